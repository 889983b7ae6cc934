use quiz_core::model::{GameMode, Tier};

use crate::error::SurfaceError;

/// Everything the game needs from whatever shows it to the player.
///
/// Implementations own presentation entirely; the session only hands over
/// plain data.
pub trait DisplaySurface {
    /// Header shown above each question.
    fn show_status(&mut self, score: u32, lives: u32, mode: GameMode) -> Result<(), SurfaceError>;

    fn show_question(
        &mut self,
        prompt: &str,
        difficulty: &str,
        progress_percent: u8,
    ) -> Result<(), SurfaceError>;

    /// Block until the player submits an answer.
    fn get_submitted_answer(&mut self) -> Result<String, SurfaceError>;

    fn show_empty_answer_warning(&mut self) -> Result<(), SurfaceError>;

    fn show_result(
        &mut self,
        accepted: bool,
        correct_answer: &str,
        hint_keywords: &[String],
    ) -> Result<(), SurfaceError>;

    fn show_final_screen(&mut self, score: u32, tier: Tier) -> Result<(), SurfaceError>;
}
