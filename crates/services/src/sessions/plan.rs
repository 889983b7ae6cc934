use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{KeywordIndex, QuestionSet};

/// Question order and keyword lookup for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlan {
    pub questions: QuestionSet,
    pub keywords: KeywordIndex,
}

impl SessionPlan {
    /// Shuffle `questions` once and index their keywords.
    ///
    /// Only the order changes; question contents are left as loaded.
    pub fn build<R: Rng + ?Sized>(mut questions: QuestionSet, rng: &mut R) -> Self {
        questions.as_mut_slice().shuffle(rng);
        let keywords = KeywordIndex::build(&questions);
        Self {
            questions,
            keywords,
        }
    }

    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when the plan has no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
