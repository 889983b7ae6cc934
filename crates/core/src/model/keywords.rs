use std::collections::HashMap;

use crate::model::QuestionSet;

/// Lookup from question prompt to its expected keywords.
///
/// Built once per game. Only questions that carry keywords are indexed, so a
/// missing entry and an empty keyword list mean the same thing to the grader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordIndex {
    by_prompt: HashMap<String, Vec<String>>,
}

impl KeywordIndex {
    /// Index every question in `set` that has at least one keyword.
    ///
    /// When two questions share a prompt, the later one wins.
    #[must_use]
    pub fn build(set: &QuestionSet) -> Self {
        let by_prompt = set
            .iter()
            .filter(|q| q.has_keywords())
            .map(|q| (q.prompt().to_owned(), q.keywords().to_vec()))
            .collect();
        Self { by_prompt }
    }

    /// Keywords for `prompt`, or an empty slice when none were indexed.
    #[must_use]
    pub fn keywords_for(&self, prompt: &str) -> &[String] {
        self.by_prompt
            .get(prompt)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, prompt: &str) -> bool {
        self.by_prompt.contains_key(prompt)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_prompt.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_prompt.is_empty()
    }
}
