mod end;
mod menu;

pub use end::{AfterGame, end_menu_lines};
pub use menu::{MenuChoice, start_menu_lines};
