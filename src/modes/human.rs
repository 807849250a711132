use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::game::{Action, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

/// Keyboard-driven play in the terminal
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.new_game();

        Self {
            engine,
            state,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = self.engine.config().tick_interval();
        let mut tick_timer = interval(tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(?tick_interval, "game loop started");

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    self.update_game();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            ticks = self.metrics.ticks,
            resets = self.state.resets,
            longest = self.metrics.longest,
            "game loop finished"
        );

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Turn(direction) => self.state.snake.buffer_direction(direction),
            KeyAction::Restart => self.reset_game(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        // Turns are already buffered on the snake as keys arrive
        self.engine.tick(&mut self.state, Action::Continue);
        self.metrics.on_tick(self.state.snake.length());
        self.metrics.update();
    }

    fn reset_game(&mut self) {
        self.state = self.engine.new_game();
        self.metrics.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position, Stone};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn seeded() -> HumanMode {
        HumanMode::new(GameConfig {
            seed: Some(1),
            ..GameConfig::default()
        })
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = seeded();
        assert_eq!(mode.state.snake.length(), 1);
        assert_eq!(mode.state.snake.head(), Position::new(320, 240));
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_key_buffers_turn() {
        let mut mode = seeded();
        mode.state.stones.clear();
        mode.state.place_poison(Position::new(0, 0));
        mode.handle_event(key(KeyCode::Up));
        assert_eq!(mode.state.snake.pending_direction(), Some(Direction::Up));

        mode.update_game();
        assert_eq!(mode.state.snake.direction(), Direction::Up);
        assert_eq!(mode.metrics.ticks, 1);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = seeded();
        mode.handle_event(key(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_restart_key() {
        let mut mode = seeded();
        mode.update_game();
        mode.update_game();
        mode.handle_event(key(KeyCode::Char('r')));
        assert_eq!(mode.state.ticks, 0);
        assert_eq!(mode.metrics.ticks, 0);
        assert_eq!(mode.state.snake.head(), Position::new(320, 240));
    }

    #[test]
    fn test_crash_counted_on_game_state() {
        let mut mode = seeded();
        mode.state.place_apple(Position::new(0, 0));
        mode.state.place_poison(Position::new(20, 0));
        mode.state.stones = vec![Stone::new(Position::new(340, 240))];
        mode.state.reclaim_fixed_cells();

        mode.update_game();
        assert_eq!(mode.state.resets, 1);
        assert_eq!(mode.metrics.ticks, 1);

        mode.handle_event(key(KeyCode::Char('r')));
        assert_eq!(mode.state.resets, 0);
    }
}
