//! The game screen: board, status bar and info panel.

use super::canvas::CellCanvas;
use flappy::game::{draw_frame, render::format_score};
use flappy::GameState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 22;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

const CONTROLS: [(&str, &str); 2] = [("Space/Up/X", "jump"), ("Q/Esc", "quit")];

/// Screen regions of the play scene.
struct SceneAreas {
    board: Rect,
    status: Rect,
    info: Rect,
}

/// Outer border coloured by game state, the board column (board above a
/// one-line status) on the left and the info panel on the right.
fn scene_areas(frame: &mut Frame, area: Rect, game: &GameState) -> SceneAreas {
    frame.render_widget(Clear, area);

    let border = if game.game_over {
        Color::Red
    } else {
        Color::Cyan
    };
    let outer = Block::default()
        .title(" Flappy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [column, info] = split_pair(
        inner,
        Direction::Horizontal,
        [Constraint::Min(1), Constraint::Length(INFO_PANEL_WIDTH)],
    );
    let [board, status] = split_pair(
        column,
        Direction::Vertical,
        [Constraint::Min(1), Constraint::Length(1)],
    );

    SceneAreas {
        board: board_area(board, game),
        status,
        info,
    }
}

fn split_pair(area: Rect, direction: Direction, constraints: [Constraint; 2]) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    [chunks[0], chunks[1]]
}

/// Render the whole game screen.
pub fn render_play_scene(frame: &mut Frame, area: Rect, game: &GameState) {
    let areas = scene_areas(frame, area, game);
    render_board(frame, areas.board, game);
    render_status_line(frame, areas.status, game);
    render_info_panel(frame, areas.info, game);
}

fn render_status_line(frame: &mut Frame, area: Rect, game: &GameState) {
    let (text, color) = if game.game_over {
        ("Crashed! Jump to play again".to_string(), Color::Red)
    } else {
        (format!("Score: {}", format_score(game.score)), Color::Green)
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        area,
    );
}

/// Largest board-shaped area that fits, centred horizontally.
fn board_area(area: Rect, game: &GameState) -> Rect {
    let ratio = game.config.board_width / game.config.board_height * CELL_ASPECT;
    let cols = (f64::from(area.height) * ratio).round() as u16;
    let cols = cols.clamp(1, area.width.max(1)).min(area.width);
    Rect {
        x: area.x + (area.width - cols) / 2,
        width: cols,
        ..area
    }
}

fn render_board(frame: &mut Frame, board: Rect, game: &GameState) {
    if board.width == 0 || board.height == 0 {
        return;
    }

    let mut canvas = CellCanvas::new(board.width, board.height, &game.config);
    draw_frame(game, &mut canvas);
    frame.render_widget(
        Paragraph::new(canvas.into_lines()).style(Style::default().bg(Color::Black)),
        board,
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &GameState) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(format_score(game.score), value),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(game.pipes.len().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(format!("{:+.1}", game.bird.velocity_y), value),
        ]),
        Line::from(vec![
            Span::styled(" Frame: ", label),
            Span::styled(game.frame_count.to_string(), value),
        ]),
        Line::default(),
    ];
    lines.extend(CONTROLS.iter().map(|(key, action)| {
        Line::from(vec![
            Span::styled(format!(" {key} "), Style::default().fg(Color::White)),
            Span::styled(*action, label),
        ])
    }));
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_text(game: &GameState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_play_scene(frame, frame.size(), game))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer.get(x, y).symbol()).collect())
            .collect()
    }

    #[test]
    fn test_board_area_keeps_aspect_and_centres() {
        let game = GameState::default();
        let area = Rect::new(0, 0, 60, 20);
        let board = board_area(area, &game);
        // 20 rows * 360/640 * 2 = 22.5, rounded to 23 columns
        assert_eq!(board.width, 23);
        assert_eq!(board.height, 20);
        assert_eq!(board.x, 18);
    }

    #[test]
    fn test_board_area_clamped_to_narrow_space() {
        let game = GameState::default();
        let board = board_area(Rect::new(3, 0, 10, 40), &game);
        assert_eq!(board.width, 10);
        assert_eq!(board.x, 3);
    }

    #[test]
    fn test_status_line_shows_score_then_crash() {
        let mut game = GameState::default();
        game.score = 1.5;
        let rows = render_to_text(&game, 80, 30);
        // Last row inside the outer border
        assert!(rows[28].contains("Score: 1.5"), "status row: {:?}", rows[28]);

        game.game_over = true;
        let rows = render_to_text(&game, 80, 30);
        assert!(rows[28].contains("Crashed! Jump to play again"));
    }

    #[test]
    fn test_info_panel_lists_controls() {
        let rows = render_to_text(&GameState::default(), 80, 30);
        assert!(rows.iter().any(|row| row.contains(" Info ")));
        assert!(rows.iter().any(|row| row.contains("Space/Up/X jump")));
        assert!(rows.iter().any(|row| row.contains("Q/Esc quit")));
    }
}
