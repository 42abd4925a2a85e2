//! Platform abstraction layer
//!
//! Turns raw key input into the discrete commands the engine understands.

/// A decoded player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Up,
    Down,
    Left,
    Right,
    NewGame,
}

impl InputCommand {
    /// Decode a single key (WASD, vi keys or space)
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' | 'k' => Some(InputCommand::Up),
            's' | 'j' => Some(InputCommand::Down),
            'a' | 'h' => Some(InputCommand::Left),
            'd' | 'l' => Some(InputCommand::Right),
            ' ' | 'n' => Some(InputCommand::NewGame),
            _ => None,
        }
    }

    /// Decode a typed line: a key, or a word like "up" / "new"
    pub fn from_line(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "up" => Some(InputCommand::Up),
            "down" => Some(InputCommand::Down),
            "left" => Some(InputCommand::Left),
            "right" => Some(InputCommand::Right),
            "new" | "space" => Some(InputCommand::NewGame),
            word => {
                let mut chars = word.chars();
                match (chars.next(), chars.next()) {
                    (Some(key), None) => Self::from_key(key),
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(InputCommand::from_key('W'), Some(InputCommand::Up));
        assert_eq!(InputCommand::from_key('j'), Some(InputCommand::Down));
        assert_eq!(InputCommand::from_key(' '), Some(InputCommand::NewGame));
        assert_eq!(InputCommand::from_key('x'), None);
    }

    #[test]
    fn test_from_line() {
        assert_eq!(InputCommand::from_line(" Left \n"), Some(InputCommand::Left));
        assert_eq!(InputCommand::from_line("d"), Some(InputCommand::Right));
        assert_eq!(InputCommand::from_line("new"), Some(InputCommand::NewGame));
        assert_eq!(InputCommand::from_line("dd"), None);
        assert_eq!(InputCommand::from_line(""), None);
    }
}
