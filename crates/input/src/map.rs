//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction, GamePhase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Arrow keys and WASD are aliases.
pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Map keyboard input to game actions.
///
/// Enter and Space confirm whatever prompt the current phase shows: "Play" on
/// the title screen, "Try Again" after a game over.
pub fn handle_key_event(key: KeyEvent, phase: GamePhase) -> Option<GameAction> {
    if let Some(dir) = direction_for(key.code) {
        return Some(GameAction::Move(dir));
    }

    match (key.code, phase) {
        (KeyCode::Enter | KeyCode::Char(' '), GamePhase::Start) => Some(GameAction::Play),
        (KeyCode::Enter | KeyCode::Char(' '), GamePhase::GameOver) => Some(GameAction::Restart),
        (KeyCode::Char('r') | KeyCode::Char('R'), GamePhase::GameOver) => {
            Some(GameAction::Restart)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_arrows_and_wasd_are_aliases() {
        let pairs = [
            (KeyCode::Up, KeyCode::Char('w'), Direction::Up),
            (KeyCode::Down, KeyCode::Char('s'), Direction::Down),
            (KeyCode::Left, KeyCode::Char('a'), Direction::Left),
            (KeyCode::Right, KeyCode::Char('d'), Direction::Right),
        ];
        for (arrow, letter, dir) in pairs {
            let expected = Some(GameAction::Move(dir));
            assert_eq!(handle_key_event(key(arrow), GamePhase::Playing), expected);
            assert_eq!(handle_key_event(key(letter), GamePhase::Playing), expected);
        }
        assert_eq!(direction_for(KeyCode::Char('W')), Some(Direction::Up));
        assert_eq!(direction_for(KeyCode::Char('D')), Some(Direction::Right));
    }

    #[test]
    fn test_confirm_depends_on_phase() {
        assert_eq!(
            handle_key_event(key(KeyCode::Enter), GamePhase::Start),
            Some(GameAction::Play)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char(' ')), GamePhase::GameOver),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(key(KeyCode::Enter), GamePhase::Playing), None);
    }

    #[test]
    fn test_restart_key_only_after_game_over() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('r')), GamePhase::GameOver),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('r')), GamePhase::Playing), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('x'))));
        assert!(!should_quit(key(KeyCode::Char('c'))));
    }
}
