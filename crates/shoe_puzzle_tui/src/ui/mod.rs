//! UI rendering using ratatui.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::rc::Rc;

pub use board::{BoardGeometry, render_board};

fn chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area)
}

/// Grid placement for a frame of the given size.
pub fn board_geometry(frame_area: Rect) -> BoardGeometry {
    BoardGeometry::centered(chunks(frame_area)[1])
}

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = chunks(f.area());

    let title = Paragraph::new("Shoe Puzzle - bring the red and blue shoes together")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], app.state());

    let mut info = format!("Moves: {}", app.moves());
    if app.show_legal_moves() {
        let legal = app
            .state()
            .legal_moves()
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        info.push_str(&format!(" | Legal: {}", legal));
    }
    let info = Paragraph::new(info)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(info, chunks[2]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[3]);

    let help = Paragraph::new("Arrows/click: move | Ctrl-R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);

    if app.is_game_over() {
        render_game_over(f, f.area());
    }
}

fn render_game_over(f: &mut Frame, area: Rect) {
    let popup = center_rect(area, 50, 5);
    let text = "Congratulations, you have solved the puzzle!\n\nPress Enter to continue";
    let dialog = Paragraph::new(text)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));
    f.render_widget(Clear, popup);
    f.render_widget(dialog, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_geometry_sits_between_title_and_info() {
        let frame = Rect::new(0, 0, 80, 40);
        let geometry = board_geometry(frame);
        // Title takes rows 0..3, the board chunk rows 3..31.
        assert_eq!(geometry, BoardGeometry::new(20, 9));
        assert_eq!(geometry.cell_at(20, 9), Some((0, 0)));
    }

    #[test]
    fn test_center_rect_clamps() {
        let area = Rect::new(0, 0, 20, 4);
        assert_eq!(center_rect(area, 50, 5), area);
        assert_eq!(center_rect(Rect::new(0, 0, 60, 11), 50, 5), Rect::new(5, 3, 50, 5));
    }
}
