use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequence length and per-round time budget for a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub length: usize,
    pub time: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Easy => Level { length: 3, time: 30 },
            Self::Medium => Level { length: 5, time: 25 },
            Self::Hard => Level { length: 7, time: 20 },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameMode {
    #[default]
    Classic,
    TimeAttack,
    Survival,
}

impl GameMode {
    pub const ALL: [Self; 3] = [Self::Classic, Self::TimeAttack, Self::Survival];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::TimeAttack => "timeAttack",
            Self::Survival => "survival",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::TimeAttack => "Time Attack",
            Self::Survival => "Survival",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerUp {
    SlowTime,
    DoublePoints,
    Shuffle,
}

impl PowerUp {
    pub const ALL: [Self; 3] = [Self::SlowTime, Self::DoublePoints, Self::Shuffle];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SlowTime => "slowTime",
            Self::DoublePoints => "doublePoints",
            Self::Shuffle => "shuffle",
        }
    }
}

impl fmt::Display for PowerUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_table() {
        assert_eq!(Difficulty::Easy.level(), Level { length: 3, time: 30 });
        assert_eq!(Difficulty::Medium.level(), Level { length: 5, time: 25 });
        assert_eq!(Difficulty::Hard.level(), Level { length: 7, time: 20 });
    }

    #[test]
    fn test_parse_matches_serde_names() {
        for mode in GameMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
            assert_eq!(GameMode::parse(mode.as_str()), Some(mode));
        }
        for diff in Difficulty::ALL {
            assert_eq!(Difficulty::parse(&diff.to_string()), Some(diff));
        }
        assert_eq!(GameMode::parse("TimeAttack"), None);
        assert_eq!(
            serde_json::to_string(&PowerUp::DoublePoints).unwrap(),
            "\"doublePoints\""
        );
    }
}
