//! Stateless UI rendering for the tic-tac-toe board.

use super::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, Coord, Marker, rules};

/// Renders the title, the board with cursor highlight, and the status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title_area, board_area, status_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(BOARD_HEIGHT),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_board(frame, board_area, app);

    let status = Paragraph::new(app.message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);

    let help = Paragraph::new("arrows move · enter/space place · 1-9 place · r new game · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Three cell bands with one-line gridlines between them.
fn bands(cell: u16) -> [Constraint; 5] {
    let gap = Constraint::Length(1);
    let cell = Constraint::Length(cell);
    [cell, gap, cell, gap, cell]
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let [area] = Layout::horizontal([Constraint::Length(BOARD_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(BOARD_HEIGHT)])
        .flex(Flex::Center)
        .areas(area);

    let winning = app
        .game()
        .status()
        .winner()
        .and_then(|winner| rules::winning_line(app.game().board(), winner));
    let grid = Style::default().fg(Color::DarkGray);

    let rows: [Rect; 5] = Layout::vertical(bands(CELL_HEIGHT)).areas(area);
    for (band, row_area) in rows.into_iter().enumerate() {
        if band % 2 == 1 {
            let rule = "─".repeat(usize::from(row_area.width));
            frame.render_widget(Paragraph::new(rule).style(grid), row_area);
            continue;
        }

        let cols: [Rect; 5] = Layout::horizontal(bands(CELL_WIDTH)).areas(row_area);
        for (slot, cell_area) in cols.into_iter().enumerate() {
            if slot % 2 == 1 {
                let rule = vec![Line::from("│"); usize::from(cell_area.height)];
                frame.render_widget(Paragraph::new(rule).style(grid), cell_area);
            } else if let Some(coord) = Coord::new(band / 2, slot / 2) {
                let on_line = winning.is_some_and(|line| line.contains(&coord));
                draw_cell(frame, cell_area, app, coord, on_line);
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coord, on_line: bool) {
    let cell = app
        .game()
        .board()
        .get(coord.row(), coord.col())
        .unwrap_or_default();

    let (symbol, base_style) = match cell {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Marker::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Marker::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if on_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if coord == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
