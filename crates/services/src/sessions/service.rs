use std::fmt;

use quiz_core::model::{KeywordIndex, Question, QuestionSet, Tier};
use quiz_core::{Grade, Grader};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::plan::SessionPlan;
use super::progress::SessionProgress;
use crate::error::SessionError;

/// Lives at the start of every game.
pub const STARTING_LIVES: u32 = 3;
/// Score added for each accepted answer.
pub const POINTS_PER_CORRECT: u32 = 10;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// A question is pending.
    AwaitingAnswer,
    /// Terminal; only a fresh `start` leaves it.
    Finished,
}

/// Score, lives and position in the question list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub score: u32,
    pub lives: u32,
    /// In `0..=total`.
    pub current_index: usize,
}

impl SessionState {
    fn initial() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            current_index: 0,
        }
    }
}

/// What happened to one submitted answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub accepted: bool,
    pub correct_answer: String,
    /// Expected keywords for the question, for hinting after a miss.
    pub hint_keywords: Vec<String>,
    pub grade: Grade,
    pub state: SessionState,
    pub phase: SessionPhase,
}

/// Final numbers once the session is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalReport {
    pub score: u32,
    pub tier: Tier,
    pub answered: usize,
    pub total: usize,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One game: shuffled questions, score and lives.
///
/// `submit` is the only way to change state. Replaying means dropping the
/// session and starting a new one.
pub struct GameSession {
    questions: QuestionSet,
    keywords: KeywordIndex,
    grader: Grader,
    state: SessionState,
    phase: SessionPhase,
}

impl GameSession {
    /// Shuffle `questions` with `rng` and start at the first one.
    ///
    /// An empty set yields a session that is already `Finished`.
    pub fn start<R: Rng + ?Sized>(questions: QuestionSet, rng: &mut R) -> Self {
        let SessionPlan {
            questions,
            keywords,
        } = SessionPlan::build(questions, rng);

        let phase = if questions.is_empty() {
            SessionPhase::Finished
        } else {
            SessionPhase::AwaitingAnswer
        };
        info!(
            questions = questions.len(),
            with_keywords = keywords.len(),
            "session started"
        );

        Self {
            questions,
            keywords,
            grader: Grader::default(),
            state: SessionState::initial(),
            phase,
        }
    }

    /// Like `start`, with a deterministic shuffle.
    #[must_use]
    pub fn start_seeded(questions: QuestionSet, seed: u64) -> Self {
        Self::start(questions, &mut StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn with_grader(mut self, grader: Grader) -> Self {
        self.grader = grader;
        self
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Questions in play order.
    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn keywords(&self) -> &KeywordIndex {
        &self.keywords
    }

    /// The pending question, if the session is still running.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            SessionPhase::AwaitingAnswer => self.questions.get(self.state.current_index),
            SessionPhase::Finished => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::new(
            self.total_questions(),
            self.state.current_index,
            self.is_finished(),
        )
    }

    /// Share of questions answered so far, floored to a whole percent.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        self.progress().percent
    }

    /// Grade `answer` against the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyAnswer` for blank input and
    /// `SessionError::Finished` once the game is over; neither changes state.
    pub fn submit(&mut self, answer: &str) -> Result<SubmitOutcome, SessionError> {
        let Some(question) = self.current_question() else {
            return Err(SessionError::Finished);
        };
        if answer.trim().is_empty() {
            return Err(SessionError::EmptyAnswer);
        }

        let hint_keywords = self.keywords.keywords_for(question.prompt()).to_vec();
        let grade = self
            .grader
            .evaluate(answer, question.correct_answer(), &hint_keywords);
        let correct_answer = question.correct_answer().to_owned();

        debug!(
            index = self.state.current_index,
            accepted = grade.accepted,
            matched_by = ?grade.matched_by,
            similarity = grade.answer_similarity,
            keywords_found = grade.keywords_found,
            keywords_total = grade.keywords_total,
            "answer graded"
        );

        if grade.accepted {
            self.state.score += POINTS_PER_CORRECT;
        } else {
            self.state.lives = self.state.lives.saturating_sub(1);
        }
        self.state.current_index += 1;

        if self.state.current_index >= self.questions.len() || self.state.lives == 0 {
            self.phase = SessionPhase::Finished;
            info!(
                score = self.state.score,
                lives = self.state.lives,
                answered = self.state.current_index,
                total = self.questions.len(),
                "session finished"
            );
        }

        Ok(SubmitOutcome {
            accepted: grade.accepted,
            correct_answer,
            hint_keywords,
            grade,
            state: self.state,
            phase: self.phase,
        })
    }

    /// Final score and tier; `None` while questions are still pending.
    #[must_use]
    pub fn final_report(&self) -> Option<FinalReport> {
        if !self.is_finished() {
            return None;
        }
        Some(FinalReport {
            score: self.state.score,
            tier: Tier::for_score(self.state.score),
            answered: self.state.current_index,
            total: self.questions.len(),
        })
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("questions_len", &self.questions.len())
            .field("keywords_len", &self.keywords.len())
            .field("state", &self.state)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
