use services::POINTS_PER_CORRECT;

/// Feedback after an answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub accepted: bool,
    pub correct_answer: String,
    pub hint_keywords: Vec<String>,
}

impl ResultVm {
    #[must_use]
    pub fn new(accepted: bool, correct_answer: &str, hint_keywords: &[String]) -> Self {
        Self {
            accepted,
            correct_answer: correct_answer.to_owned(),
            hint_keywords: hint_keywords.to_vec(),
        }
    }

    /// Keyword hint, only offered after a wrong answer.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        if self.accepted || self.hint_keywords.is_empty() {
            return None;
        }
        Some(format!(
            "The answer should mention words like: {}",
            self.hint_keywords.join(", ")
        ))
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        if self.accepted {
            return vec![format!("Correct! +{POINTS_PER_CORRECT} points")];
        }

        let mut lines = vec![
            "Wrong answer!".to_owned(),
            format!("The correct answer was: {}", self.correct_answer),
        ];
        lines.extend(self.hint());
        lines
    }
}
