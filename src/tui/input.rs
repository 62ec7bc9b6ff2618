//! Key bindings for the terminal game.

use crossterm::event::KeyCode;
use strictly_2048::Direction;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Shift the board.
    Move(Direction),
    /// Take back the last move.
    Undo,
    /// Start over.
    NewGame,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action. Arrow keys, `hjkl` and `wasd` all move.
pub fn map_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(Action::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(Action::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(Action::Move(Direction::Right))
        }
        KeyCode::Char('u') => Some(Action::Undo),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(KeyCode::Up), Some(Action::Move(Direction::Up)));
        assert_eq!(map_key(KeyCode::Down), Some(Action::Move(Direction::Down)));
        assert_eq!(map_key(KeyCode::Left), Some(Action::Move(Direction::Left)));
        assert_eq!(map_key(KeyCode::Right), Some(Action::Move(Direction::Right)));
    }

    #[test]
    fn test_vim_and_wasd_agree() {
        for (vim, wasd) in [('k', 'w'), ('j', 's'), ('h', 'a'), ('l', 'd')] {
            assert_eq!(map_key(KeyCode::Char(vim)), map_key(KeyCode::Char(wasd)));
            assert!(matches!(map_key(KeyCode::Char(vim)), Some(Action::Move(_))));
        }
    }

    #[test]
    fn test_commands() {
        assert_eq!(map_key(KeyCode::Char('u')), Some(Action::Undo));
        assert_eq!(map_key(KeyCode::Char('n')), Some(Action::NewGame));
        assert_eq!(map_key(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(map_key(KeyCode::Esc), Some(Action::Quit));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Enter), None);
    }
}
