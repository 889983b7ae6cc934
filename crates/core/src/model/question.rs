use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Validation failures for a single question record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt must not be empty")]
    EmptyPrompt,

    #[error("correct answer must not be empty")]
    EmptyAnswer,
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single quiz question.
///
/// Immutable once constructed; `difficulty` is a free-text display label and
/// has no influence on grading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    correct_answer: String,
    difficulty: String,
    keywords: Vec<String>,
}

impl Question {
    /// Builds a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` or `QuestionError::EmptyAnswer`
    /// when the respective text is blank.
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        difficulty: impl Into<String>,
        keywords: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        let correct_answer = correct_answer.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if correct_answer.trim().is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }

        Ok(Self {
            prompt,
            correct_answer,
            difficulty: difficulty.into(),
            keywords,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    #[must_use]
    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }
}

//
// ─── QUESTION SET ─────────────────────────────────────────────────────────────
//

/// Ordered collection of questions for one game.
///
/// Reordering goes through `as_mut_slice`; individual questions stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Mutable view used for reordering only; `Question` exposes no setters.
    pub fn as_mut_slice(&mut self) -> &mut [Question] {
        &mut self.questions
    }
}

impl From<Vec<Question>> for QuestionSet {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl FromIterator<Question> for QuestionSet {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
