use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Decodes a `KeyboardEvent.key` name. Anything but the four arrow keys
    /// is not a direction.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// Classifies a swipe by its dominant axis. Screen coordinates: `dy > 0`
    /// points down. Movement within `deadzone` pixels on the dominant axis
    /// is not a swipe. Equal magnitudes count as vertical.
    #[must_use]
    pub fn from_swipe(dx: i32, dy: i32, deadzone: i32) -> Option<Self> {
        if dx.unsigned_abs() > dy.unsigned_abs() {
            if dx > deadzone {
                Some(Self::Right)
            } else if dx < -deadzone {
                Some(Self::Left)
            } else {
                None
            }
        } else if dy > deadzone {
            Some(Self::Down)
        } else if dy < -deadzone {
            Some(Self::Up)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn key_name(self) -> &'static str {
        match self {
            Self::Up => "ArrowUp",
            Self::Down => "ArrowDown",
            Self::Left => "ArrowLeft",
            Self::Right => "ArrowRight",
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Left => "←",
            Self::Right => "→",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_decode() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_key(dir.key_name()), Some(dir));
        }
        assert_eq!(Direction::from_key("b"), None);
        assert_eq!(Direction::from_key("arrowup"), None);
        assert_eq!(Direction::from_key(""), None);
    }

    #[test]
    fn test_swipe_dominant_axis() {
        assert_eq!(Direction::from_swipe(80, 10, 30), Some(Direction::Right));
        assert_eq!(Direction::from_swipe(-80, 40, 30), Some(Direction::Left));
        assert_eq!(Direction::from_swipe(5, 60, 30), Some(Direction::Down));
        assert_eq!(Direction::from_swipe(-5, -60, 30), Some(Direction::Up));
    }

    #[test]
    fn test_swipe_deadzone() {
        // Exactly on the threshold is still inside the deadzone.
        assert_eq!(Direction::from_swipe(30, 0, 30), None);
        assert_eq!(Direction::from_swipe(0, -30, 30), None);
        assert_eq!(Direction::from_swipe(31, 0, 30), Some(Direction::Right));
        // Dominant axis too short: no fallback to the minor axis.
        assert_eq!(Direction::from_swipe(25, 20, 30), None);
    }

    #[test]
    fn test_swipe_tie_is_vertical() {
        assert_eq!(Direction::from_swipe(50, 50, 30), Some(Direction::Down));
        assert_eq!(Direction::from_swipe(50, -50, 30), Some(Direction::Up));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Direction::ALL).unwrap();
        assert_eq!(json, r#"["up","down","left","right"]"#);
    }
}
