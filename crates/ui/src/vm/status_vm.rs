use quiz_core::model::GameMode;

/// Header line: score, remaining lives and the active mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusVm {
    pub score: u32,
    pub lives: u32,
    pub mode: GameMode,
}

impl StatusVm {
    #[must_use]
    pub fn new(score: u32, lives: u32, mode: GameMode) -> Self {
        Self { score, lives, mode }
    }

    #[must_use]
    pub fn hearts(&self) -> String {
        "♥".repeat(self.lives as usize)
    }

    #[must_use]
    pub fn line(&self) -> String {
        format!(
            "Score: {}   Lives: {}   Mode: {}",
            self.score,
            self.hearts(),
            self.mode.label()
        )
    }
}
