//! Board rendering and click mapping.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use shoe_puzzle::{BOARD_SIZE, Piece, Position, PuzzleState};

/// Width of one board cell in terminal columns.
pub const CELL_WIDTH: u16 = 13;
/// Height of one board cell in terminal rows.
pub const CELL_HEIGHT: u16 = 5;

const CELLS: u16 = BOARD_SIZE as u16;

/// Where the grid sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct BoardGeometry {
    x: u16,
    y: u16,
}

impl BoardGeometry {
    /// Centres the grid inside `area`.
    pub fn centered(area: Rect) -> Self {
        let x = area.x + area.width.saturating_sub(CELL_WIDTH * CELLS) / 2;
        let y = area.y + area.height.saturating_sub(CELL_HEIGHT * CELLS) / 2;
        Self::new(x, y)
    }

    /// Screen rectangle of a cell.
    pub fn cell_rect(&self, row: u16, col: u16) -> Rect {
        Rect::new(
            self.x + col * CELL_WIDTH,
            self.y + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// Maps a terminal coordinate to the board cell under it.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        if column < self.x || row < self.y {
            return None;
        }
        let col = (column - self.x) / CELL_WIDTH;
        let row = (row - self.y) / CELL_HEIGHT;
        (row < CELLS && col < CELLS).then_some((i32::from(row), i32::from(col)))
    }
}

/// Renders the 3x3 board with the pieces on each cell.
pub fn render_board(f: &mut Frame, area: Rect, state: &PuzzleState) {
    let geometry = BoardGeometry::centered(area);
    for row in 0..CELLS {
        for col in 0..CELLS {
            let rect = geometry.cell_rect(row, col).intersection(area);
            if rect.is_empty() {
                continue;
            }
            render_square(f, rect, state, row, col);
        }
    }
}

fn render_square(f: &mut Frame, area: Rect, state: &PuzzleState, row: u16, col: u16) {
    let background = if (row + col) % 2 == 0 {
        Color::Gray
    } else {
        Color::DarkGray
    };
    let position = Position::new(i32::from(row), i32::from(col));
    let spans: Vec<Span> = state
        .board()
        .pieces_at(position)
        .into_iter()
        .flat_map(|piece| [piece_span(piece), Span::raw(" ")])
        .collect();

    let paragraph = Paragraph::new(vec![Line::default(), Line::from(spans)])
        .style(Style::default().bg(background))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn piece_span(piece: Piece) -> Span<'static> {
    let (symbol, color) = match piece {
        Piece::Block => ("■", Color::White),
        Piece::RedShoe => ("R", Color::Red),
        Piece::BlueShoe => ("U", Color::Blue),
        Piece::BlackShoe => ("K", Color::Black),
    };
    Span::styled(
        symbol,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
