use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Turn request, buffered until the next tick
    Turn(Direction),
    /// Lay out a fresh board
    Restart,
    Quit,
    None,
}

/// Maps terminal key presses to game requests
#[derive(Debug, Default, Clone, Copy)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => KeyAction::Turn(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S') => KeyAction::Turn(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A') => KeyAction::Turn(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D') => KeyAction::Turn(Direction::Right),

            KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r' | 'R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(press(KeyCode::Up), KeyAction::Turn(Direction::Up));
        assert_eq!(press(KeyCode::Down), KeyAction::Turn(Direction::Down));
        assert_eq!(press(KeyCode::Left), KeyAction::Turn(Direction::Left));
        assert_eq!(press(KeyCode::Right), KeyAction::Turn(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(press(KeyCode::Char('w')), KeyAction::Turn(Direction::Up));
        assert_eq!(press(KeyCode::Char('a')), KeyAction::Turn(Direction::Left));
        assert_eq!(press(KeyCode::Char('s')), KeyAction::Turn(Direction::Down));
        assert_eq!(press(KeyCode::Char('D')), KeyAction::Turn(Direction::Right));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(press(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(KeyCode::Esc), KeyAction::Quit);

        let handler = InputHandler::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_restart_and_unknown() {
        assert_eq!(press(KeyCode::Char('r')), KeyAction::Restart);
        assert_eq!(press(KeyCode::Char('x')), KeyAction::None);
    }
}
