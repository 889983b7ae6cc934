use std::collections::HashMap;
use std::path::PathBuf;

use quiz_core::model::{GameMode, Question, QuestionError, QuestionSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by question sources.
///
/// Every variant means the question data is unavailable; callers treat all of
/// them as fatal for the game that was about to start.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("no questions registered for mode {0}")]
    MissingMode(GameMode),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid question #{index} in {}: {source}", path.display())]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// On-disk shape of a question.
///
/// Accepts the camelCase field names as well as the legacy Portuguese keys
/// (`pergunta`, `resposta`, `dificuldade`, `palavras_chave`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(alias = "pergunta")]
    pub prompt: String,

    #[serde(rename = "correctAnswer", alias = "correct_answer", alias = "resposta")]
    pub correct_answer: String,

    #[serde(default, alias = "dificuldade")]
    pub difficulty: String,

    #[serde(default, alias = "palavras_chave", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            prompt: question.prompt().to_owned(),
            correct_answer: question.correct_answer().to_owned(),
            difficulty: question.difficulty().to_owned(),
            keywords: question.keywords().to_vec(),
        }
    }

    /// Convert the record into a validated domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or answer is blank.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        Question::new(
            self.prompt,
            self.correct_answer,
            self.difficulty,
            self.keywords,
        )
    }
}

/// Supplies the question set for a game mode.
pub trait QuestionSource {
    /// Load every question for `mode`, in file order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the data is missing or cannot be parsed.
    fn load(&self, mode: GameMode) -> Result<QuestionSet, StorageError>;
}

/// Simple in-memory source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionSource {
    sets: HashMap<GameMode, QuestionSet>,
}

impl InMemoryQuestionSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GameMode, set: QuestionSet) -> Self {
        self.sets.insert(mode, set);
        self
    }
}

impl QuestionSource for InMemoryQuestionSource {
    fn load(&self, mode: GameMode) -> Result<QuestionSet, StorageError> {
        self.sets
            .get(&mode)
            .cloned()
            .ok_or(StorageError::MissingMode(mode))
    }
}
