use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{EntityKind, GameState, Position};
use crate::metrics::SessionMetrics;

/// What occupies a cell, in drawing priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Head,
    Body,
    Object(EntityKind),
}

/// Draws the whole board every frame
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &SessionMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);
        frame.render_widget(self.render_grid(state), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn cell_map(state: &GameState) -> HashMap<Position, Cell> {
        let mut cells = HashMap::with_capacity(state.snake.len() + state.stones.len() + 2);

        for entity in state.entities() {
            cells.insert(entity.position(), Cell::Object(entity.kind()));
        }
        for segment in state.snake.segments() {
            cells.insert(*segment, Cell::Body);
        }
        cells.insert(state.snake.head(), Cell::Head);

        cells
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'static> {
        let cells = Self::cell_map(state);
        let grid = &state.grid;
        let mut lines = Vec::with_capacity(grid.rows() as usize);

        for row in 0..grid.rows() {
            let spans: Vec<Span<'static>> = (0..grid.columns())
                .map(|column| {
                    let pos = grid.cell_at(column, row);
                    match cells.get(&pos) {
                        Some(Cell::Head) => Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Some(Cell::Body) => Span::styled("□ ", Style::default().fg(Color::Green)),
                        Some(Cell::Object(EntityKind::Apple)) => Span::styled(
                            "O ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                        Some(Cell::Object(EntityKind::Poison)) => Span::styled(
                            "x ",
                            Style::default()
                                .fg(Color::Magenta)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Some(Cell::Object(EntityKind::Stone)) => {
                            Span::styled("▲ ", Style::default().fg(Color::Gray))
                        }
                        None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                    }
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &SessionMetrics) -> Paragraph<'static> {
        let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Yellow));
        let value = |text: String| Span::styled(text, Style::default().fg(Color::White));

        let text = vec![Line::from(vec![
            label("Length: "),
            Span::styled(
                state.snake.length().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            label("Longest: "),
            value(metrics.longest.to_string()),
            Span::raw("    "),
            label("Resets: "),
            value(state.resets.to_string()),
            Span::raw("    "),
            label("Time: "),
            value(metrics.format_time()),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" new board | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
