use quiz_core::model::GameMode;

pub const TITLE: &str = "Computing History Quiz";

/// Selection made on the start menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Play(GameMode),
    Quit,
}

impl MenuChoice {
    /// Accepts the option number or the mode name.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(Self::Play(GameMode::History)),
            "2" => Some(Self::Play(GameMode::Computers)),
            "q" | "quit" | "3" => Some(Self::Quit),
            other => other.parse::<GameMode>().ok().map(Self::Play),
        }
    }
}

#[must_use]
pub fn start_menu_lines() -> Vec<String> {
    let mut lines = vec![TITLE.to_owned(), String::new(), "Choose a game mode:".to_owned()];
    for (number, mode) in GameMode::ALL.iter().enumerate() {
        lines.push(format!("  {}) {} - {}", number + 1, mode.label(), mode.description()));
    }
    lines.push("  3) Quit".to_owned());
    lines
}
