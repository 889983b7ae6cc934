use quiz_core::model::GameMode;
use rand::Rng;
use storage::QuestionSource;

use super::service::{FinalReport, GameSession};
use crate::error::SessionError;
use crate::surface::DisplaySurface;

/// Loads a question set and plays one game against a display surface.
#[derive(Debug, Clone)]
pub struct QuizLoop<S> {
    source: S,
}

impl<S: QuestionSource> QuizLoop<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the questions for `mode` and start a fresh session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SourceUnavailable` if the questions cannot be
    /// loaded; no session exists in that case.
    pub fn start_session<R: Rng + ?Sized>(
        &self,
        mode: GameMode,
        rng: &mut R,
    ) -> Result<GameSession, SessionError> {
        let questions = self.source.load(mode)?;
        Ok(GameSession::start(questions, rng))
    }

    /// Play a complete game of `mode` and return the final report.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::SourceUnavailable` when loading fails and
    /// `SessionError::Surface` when the surface cannot show or read.
    pub fn play<R: Rng + ?Sized>(
        &self,
        mode: GameMode,
        surface: &mut dyn DisplaySurface,
        rng: &mut R,
    ) -> Result<FinalReport, SessionError> {
        let mut session = self.start_session(mode, rng)?;
        self.run(&mut session, mode, surface)
    }

    /// Drive `session` until it finishes, then show the final screen.
    ///
    /// Blank answers are re-prompted without touching the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Surface` on display failures.
    pub fn run(
        &self,
        session: &mut GameSession,
        mode: GameMode,
        surface: &mut dyn DisplaySurface,
    ) -> Result<FinalReport, SessionError> {
        while let Some(question) = session.current_question() {
            let state = session.state();
            surface.show_status(state.score, state.lives, mode)?;
            surface.show_question(
                question.prompt(),
                question.difficulty(),
                session.progress_percent(),
            )?;

            let outcome = loop {
                let answer = surface.get_submitted_answer()?;
                match session.submit(&answer) {
                    Ok(outcome) => break outcome,
                    Err(SessionError::EmptyAnswer) => surface.show_empty_answer_warning()?,
                    Err(err) => return Err(err),
                }
            };

            surface.show_result(
                outcome.accepted,
                &outcome.correct_answer,
                &outcome.hint_keywords,
            )?;
        }

        let report = session.final_report().ok_or(SessionError::InProgress)?;
        surface.show_final_screen(report.score, report.tier)?;
        Ok(report)
    }
}
