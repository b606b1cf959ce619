use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// GameType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    Platformer,
    Puzzle,
    EndlessRunner,
    PhysicsBased,
    Arcade,
}

impl GameType {
    pub fn all() -> &'static [GameType] {
        &[
            GameType::Platformer,
            GameType::Puzzle,
            GameType::EndlessRunner,
            GameType::PhysicsBased,
            GameType::Arcade,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Platformer => "platformer",
            GameType::Puzzle => "puzzle",
            GameType::EndlessRunner => "endless-runner",
            GameType::PhysicsBased => "physics-based",
            GameType::Arcade => "arcade",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GameType {
    type Err = crate::error::GameDevError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "platformer" => Ok(GameType::Platformer),
            "puzzle" => Ok(GameType::Puzzle),
            "endless-runner" => Ok(GameType::EndlessRunner),
            "physics-based" => Ok(GameType::PhysicsBased),
            "arcade" => Ok(GameType::Arcade),
            _ => Err(crate::error::GameDevError::UnknownGameType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// GameKind
// ---------------------------------------------------------------------------

/// The game type as requested by a caller.
///
/// Requests are accepted even when the type is not one of the five known
/// kinds: the task plan then has no type-specific items and the template
/// engine falls back to the arcade bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameKind {
    Known(GameType),
    Unknown(String),
}

impl GameKind {
    pub fn known(&self) -> Option<GameType> {
        match self {
            GameKind::Known(t) => Some(*t),
            GameKind::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            GameKind::Known(t) => t.as_str(),
            GameKind::Unknown(raw) => raw,
        }
    }
}

impl From<GameType> for GameKind {
    fn from(t: GameType) -> Self {
        GameKind::Known(t)
    }
}

impl From<&str> for GameKind {
    fn from(s: &str) -> Self {
        s.parse::<GameType>()
            .map(GameKind::Known)
            .unwrap_or_else(|_| GameKind::Unknown(s.to_string()))
    }
}

impl From<String> for GameKind {
    fn from(s: String) -> Self {
        GameKind::from(s.as_str())
    }
}

impl From<GameKind> for String {
    fn from(kind: GameKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
