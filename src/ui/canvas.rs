//! Character-cell renderer for the board.
//!
//! Implements the core [`Renderer`] by rasterising sprite boxes onto a grid of
//! terminal cells scaled from board coordinates.

use flappy::game::{Rect as BoardRect, Renderer, Sprite};
use flappy::GameConfig;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    symbol: char,
    style: Style,
}

const EMPTY: Cell = Cell {
    symbol: ' ',
    style: Style::new(),
};

/// A `cols` x `rows` grid covering the whole board.
pub struct CellCanvas {
    cols: u16,
    rows: u16,
    cell_width: f64,
    cell_height: f64,
    cells: Vec<Cell>,
    texts: Vec<(String, u16, u16)>,
}

impl CellCanvas {
    pub fn new(cols: u16, rows: u16, config: &GameConfig) -> Self {
        Self {
            cols,
            rows,
            cell_width: config.board_width / f64::from(cols.max(1)),
            cell_height: config.board_height / f64::from(rows.max(1)),
            cells: vec![EMPTY; usize::from(cols) * usize::from(rows)],
            texts: Vec::new(),
        }
    }

    /// Cell span `[start, end)` covered by `[pos, pos + len)` on one axis.
    fn span(pos: f64, len: f64, cell: f64, limit: u16) -> (u16, u16) {
        let limit = f64::from(limit);
        let start = (pos / cell).floor().clamp(0.0, limit);
        let end = ((pos + len) / cell).ceil().clamp(0.0, limit);
        (start as u16, end as u16)
    }

    fn fill(&mut self, rect: BoardRect, cell: Cell) {
        let (c0, c1) = Self::span(rect.x, rect.width, self.cell_width, self.cols);
        let (r0, r1) = Self::span(rect.y, rect.height, self.cell_height, self.rows);
        for row in r0..r1 {
            for col in c0..c1 {
                let idx = usize::from(row) * usize::from(self.cols) + usize::from(col);
                self.cells[idx] = cell;
            }
        }
    }

    fn cell_for(sprite: Sprite) -> Cell {
        match sprite {
            Sprite::Bird => Cell {
                symbol: '►',
                style: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            },
            Sprite::TopPipe => Cell {
                symbol: '█',
                style: Style::new().fg(Color::Green),
            },
            Sprite::BottomPipe => Cell {
                symbol: '█',
                style: Style::new().fg(Color::LightGreen),
            },
        }
    }

    /// Convert the grid, with text overlaid, into ratatui lines.
    pub fn into_lines(mut self) -> Vec<Line<'static>> {
        let text_style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
        for (text, col, row) in std::mem::take(&mut self.texts) {
            for (i, ch) in text.chars().enumerate() {
                let c = usize::from(col) + i;
                if c >= usize::from(self.cols) || row >= self.rows {
                    break;
                }
                self.cells[usize::from(row) * usize::from(self.cols) + c] = Cell {
                    symbol: ch,
                    style: text_style,
                };
            }
        }

        if self.cols == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(usize::from(self.cols))
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .iter()
                    .map(|cell| Span::styled(cell.symbol.to_string(), cell.style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Renderer for CellCanvas {
    fn clear(&mut self) {
        self.cells.fill(EMPTY);
        self.texts.clear();
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: BoardRect) {
        self.fill(rect, Self::cell_for(sprite));
    }

    /// `y` is the text baseline, so the text sits on the row above it.
    fn draw_text(&mut self, text: &str, x: f64, y: f64) {
        let col = (x / self.cell_width).floor().max(0.0) as u16;
        let row = ((y / self.cell_height).ceil() - 1.0).max(0.0) as u16;
        self.texts.push((text.to_string(), col, row));
    }
}
