//! Stateless UI rendering for 2048.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_2048::{Board, SIZE, Tile};

use super::app::App;

const CELL_WIDTH: u16 = 8;
const CELL_HEIGHT: u16 = 3;

/// Renders score line, board, status and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + scores
            Constraint::Min(CELL_HEIGHT * SIZE as u16 + 2), // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let session = app.session();
    let scores = Line::from(vec![
        Span::styled(
            "2048  ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("Score: {}   ", session.score())),
        Span::raw(format!("High Score: {}", session.high_score())),
    ]);
    let title = Paragraph::new(scores)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], session.engine().board());

    let status_style = if session.is_over() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows/hjkl/wasd: Move | U: Undo | N: New Game | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board) {
    let side = SIZE as u16;
    let board_area = center_rect(area, CELL_WIDTH * side + 2, CELL_HEIGHT * side + 2);
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Rgb(0xbb, 0xad, 0xa0)));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); SIZE])
        .split(inner);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); SIZE])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            let value = board.get(row, col).unwrap_or(0);
            draw_cell(frame, *cell_area, value);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, value: Tile) {
    let text = if value == 0 { String::new() } else { value.to_string() };
    let style = Style::default()
        .bg(tile_color(value))
        .fg(text_color(value))
        .add_modifier(Modifier::BOLD);

    // Pad the top so the number sits on the middle line.
    let lines = vec![Line::raw(""), Line::raw(text)];
    let cell = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

/// Classic tile palette; anything past 2048 reuses the 2048 color.
fn tile_color(value: Tile) -> Color {
    match value {
        0 => Color::Rgb(0xcd, 0xc1, 0xb4),
        2 => Color::Rgb(0xee, 0xe4, 0xda),
        4 => Color::Rgb(0xed, 0xe0, 0xc8),
        8 => Color::Rgb(0xf2, 0xb1, 0x79),
        16 => Color::Rgb(0xf5, 0x95, 0x63),
        32 => Color::Rgb(0xf6, 0x7c, 0x5f),
        64 => Color::Rgb(0xf6, 0x5e, 0x3b),
        128 => Color::Rgb(0xed, 0xcf, 0x72),
        256 => Color::Rgb(0xed, 0xcc, 0x61),
        512 => Color::Rgb(0xed, 0xc8, 0x50),
        1024 => Color::Rgb(0xed, 0xc5, 0x3f),
        _ => Color::Rgb(0xed, 0xc2, 0x2e),
    }
}

fn text_color(value: Tile) -> Color {
    if value <= 4 {
        Color::Rgb(0x77, 0x6e, 0x65)
    } else {
        Color::Rgb(0xf9, 0xf6, 0xf2)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
