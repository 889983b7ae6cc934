use std::io::{BufRead, Write};

use quiz_core::model::{GameMode, Tier};
use services::{DisplaySurface, SurfaceError};

use crate::views::{AfterGame, MenuChoice, end_menu_lines, start_menu_lines};
use crate::vm::{QuestionVm, ResultVm, StatusVm, SummaryVm};

const PROMPT: &str = "> ";

/// Line-oriented display surface over any reader/writer pair.
pub struct TerminalSurface<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalSurface<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Show the start menu until a valid choice is made.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceError::Closed` when input ends.
    pub fn choose_mode(&mut self) -> Result<MenuChoice, SurfaceError> {
        self.write_lines(&start_menu_lines())?;
        loop {
            let line = self.read_line()?;
            if let Some(choice) = MenuChoice::parse(&line) {
                return Ok(choice);
            }
            self.write_lines(&["Please choose 1, 2 or 3.".to_owned()])?;
        }
    }

    /// Ask whether to replay, go back to the menu or quit.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceError::Closed` when input ends.
    pub fn choose_after_game(&mut self) -> Result<AfterGame, SurfaceError> {
        self.write_lines(&end_menu_lines())?;
        loop {
            let line = self.read_line()?;
            if let Some(choice) = AfterGame::parse(&line) {
                return Ok(choice);
            }
            self.write_lines(&["Please choose 1, 2 or 3.".to_owned()])?;
        }
    }

    fn read_line(&mut self) -> Result<String, SurfaceError> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SurfaceError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), SurfaceError> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> DisplaySurface for TerminalSurface<R, W> {
    fn show_status(&mut self, score: u32, lives: u32, mode: GameMode) -> Result<(), SurfaceError> {
        let status = StatusVm::new(score, lives, mode);
        self.write_lines(&[String::new(), status.line()])
    }

    fn show_question(
        &mut self,
        prompt: &str,
        difficulty: &str,
        progress_percent: u8,
    ) -> Result<(), SurfaceError> {
        let vm = QuestionVm::new(prompt, difficulty, progress_percent);
        self.write_lines(&vm.lines())?;
        self.write_lines(&["Your answer:".to_owned()])
    }

    fn get_submitted_answer(&mut self) -> Result<String, SurfaceError> {
        self.read_line()
    }

    fn show_empty_answer_warning(&mut self) -> Result<(), SurfaceError> {
        self.write_lines(&["Please type an answer!".to_owned()])
    }

    fn show_result(
        &mut self,
        accepted: bool,
        correct_answer: &str,
        hint_keywords: &[String],
    ) -> Result<(), SurfaceError> {
        let vm = ResultVm::new(accepted, correct_answer, hint_keywords);
        self.write_lines(&vm.lines())
    }

    fn show_final_screen(&mut self, score: u32, tier: Tier) -> Result<(), SurfaceError> {
        let vm = SummaryVm::new(score, tier);
        self.write_lines(&[String::new()])?;
        self.write_lines(&vm.lines())
    }
}
