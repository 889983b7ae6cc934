/// What to do after the end screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterGame {
    /// Same mode, fresh session.
    Replay,
    /// Back to the start menu.
    Menu,
    Quit,
}

impl AfterGame {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "r" | "replay" => Some(Self::Replay),
            "2" | "m" | "menu" => Some(Self::Menu),
            "3" | "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[must_use]
pub fn end_menu_lines() -> Vec<String> {
    vec![
        "  1) Play again".to_owned(),
        "  2) Back to main menu".to_owned(),
        "  3) Quit".to_owned(),
    ]
}
