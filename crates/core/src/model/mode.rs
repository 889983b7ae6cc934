use std::fmt;
use std::str::FromStr;

/// Selectable question pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// General questions about the history of computing.
    History,
    /// Questions about specific historical machines.
    Computers,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::History, GameMode::Computers];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GameMode::History => "History",
            GameMode::Computers => "Computers",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            GameMode::History => "General questions about the history of computing",
            GameMode::Computers => "Questions about specific historical computers",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "history" | "normal" => Ok(GameMode::History),
            "computers" => Ok(GameMode::Computers),
            _ => Err(format!(
                "invalid game mode: '{s}'. Valid options: history, computers"
            )),
        }
    }
}
