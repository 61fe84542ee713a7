//! Log filter selection and the startup report.

use crate::settings::{Settings, SettingsSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` if set, the settings filter otherwise.
pub fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Logs where the settings came from. Call after the subscriber is installed.
pub fn report_settings(settings: &Settings, source: &SettingsSource) {
    match source {
        SettingsSource::File(path) => {
            info!(path = %path.display(), ?settings, "Settings loaded from file")
        }
        SettingsSource::Defaults => info!(?settings, "Settings file not found, using defaults"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use tracing::level_filters::LevelFilter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_reports_defaults_at_info() {
        let logs = capture(|| report_settings(&Settings::default(), &SettingsSource::Defaults));
        assert!(logs.contains("INFO"));
        assert!(logs.contains("Settings file not found, using defaults"));
    }

    #[test]
    fn test_reports_file_path() {
        let source = SettingsSource::File(PathBuf::from("custom.toml"));
        let logs = capture(|| report_settings(&Settings::default(), &source));
        assert!(logs.contains("Settings loaded from file"));
        assert!(logs.contains("custom.toml"));
    }
}
