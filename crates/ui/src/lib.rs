pub mod terminal;
pub mod views;
pub mod vm;

pub use terminal::TerminalSurface;
pub use views::{AfterGame, MenuChoice};
