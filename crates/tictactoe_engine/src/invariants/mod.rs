//! First-class invariants for the board engine.
//!
//! Invariants are logical properties of a [`Game`](crate::Game). They are
//! testable independently and can be composed into sets with tuples.

pub mod marker_balance;
pub mod move_count;

pub use marker_balance::MarkerBalanceInvariant;
pub use move_count::MoveCountInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for 2-tuples of invariants; nest tuples for larger sets.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all hold, or every violation otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|&(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        violations.is_empty().then_some(()).ok_or(violations)
    }
}

/// Invariants that hold for any game played through [`Game::play`](crate::Game::play).
pub type AlternatingPlayInvariants = (MoveCountInvariant, MarkerBalanceInvariant);
