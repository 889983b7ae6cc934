use crate::text::{normalize, similarity};

/// Direct answer similarity must exceed this to accept.
pub const ANSWER_SIMILARITY_THRESHOLD: f64 = 0.70;
/// A keyword counts as found when some answer token exceeds this similarity.
pub const KEYWORD_SIMILARITY_THRESHOLD: f64 = 0.70;
/// Share of keywords that must be found for the keyword fallback.
pub const KEYWORD_COVERAGE: f64 = 0.60;

//
// ─── GRADE ─────────────────────────────────────────────────────────────────────
//

/// Which rule accepted an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The whole answer was close enough to the reference answer.
    Answer,
    /// Enough expected keywords were found in the answer.
    Keywords,
}

/// Detailed outcome of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade {
    pub accepted: bool,
    pub matched_by: Option<MatchKind>,
    /// Similarity between the normalized answer and reference.
    pub answer_similarity: f64,
    /// Keywords located in the answer; zero when the fallback did not run.
    pub keywords_found: usize,
    pub keywords_total: usize,
}

//
// ─── GRADER ────────────────────────────────────────────────────────────────────
//

/// Thresholds used by the grader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradingThresholds {
    pub answer_similarity: f64,
    pub keyword_similarity: f64,
    pub keyword_coverage: f64,
}

impl Default for GradingThresholds {
    fn default() -> Self {
        Self {
            answer_similarity: ANSWER_SIMILARITY_THRESHOLD,
            keyword_similarity: KEYWORD_SIMILARITY_THRESHOLD,
            keyword_coverage: KEYWORD_COVERAGE,
        }
    }
}

/// Decides whether a free-text answer is acceptable.
///
/// Grading is pure: the same inputs always produce the same grade. Blank
/// answers are expected to be filtered out by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Grader {
    thresholds: GradingThresholds,
}

impl Grader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_thresholds(thresholds: GradingThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub fn thresholds(&self) -> GradingThresholds {
        self.thresholds
    }

    /// Returns `true` when `user_answer` satisfies the reference answer or,
    /// failing that, mentions enough of `keywords`.
    #[must_use]
    pub fn grade(
        &self,
        user_answer: &str,
        correct_answer: &str,
        keywords: &[String],
    ) -> bool {
        self.evaluate(user_answer, correct_answer, keywords).accepted
    }

    /// Grade with the intermediate scores kept for diagnostics.
    #[must_use]
    pub fn evaluate(
        &self,
        user_answer: &str,
        correct_answer: &str,
        keywords: &[String],
    ) -> Grade {
        let user_norm = normalize(user_answer);
        let correct_norm = normalize(correct_answer);
        let answer_similarity = similarity(&user_norm, &correct_norm);

        let mut grade = Grade {
            accepted: false,
            matched_by: None,
            answer_similarity,
            keywords_found: 0,
            keywords_total: keywords.len(),
        };

        if answer_similarity > self.thresholds.answer_similarity {
            grade.accepted = true;
            grade.matched_by = Some(MatchKind::Answer);
            return grade;
        }

        if keywords.is_empty() {
            return grade;
        }

        let tokens: Vec<&str> = user_norm.split_whitespace().collect();
        let found = keywords
            .iter()
            .map(|keyword| normalize(keyword))
            .filter(|keyword| {
                tokens
                    .iter()
                    .any(|token| similarity(keyword, token) > self.thresholds.keyword_similarity)
            })
            .count();
        grade.keywords_found = found;

        // Real-valued comparison; 2 of 3 passes a 0.6 coverage.
        if found as f64 >= keywords.len() as f64 * self.thresholds.keyword_coverage {
            grade.accepted = true;
            grade.matched_by = Some(MatchKind::Keywords);
        }

        grade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn punctuation_and_case_do_not_matter() {
        let grader = Grader::new();
        let grade = grader.evaluate("eniac!!", "ENIAC", &[]);
        assert!(grade.accepted);
        assert_eq!(grade.matched_by, Some(MatchKind::Answer));
        assert!((grade.answer_similarity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn accents_are_ignored() {
        assert!(Grader::new().grade("valvulas", "Válvulas", &[]));
    }

    #[test]
    fn small_typo_is_tolerated() {
        assert!(Grader::new().grade("Charles Babage", "Charles Babbage", &[]));
    }

    #[test]
    fn unrelated_answer_without_keywords_is_rejected() {
        let grade = Grader::new().evaluate("a computer", "ENIAC", &[]);
        assert!(!grade.accepted);
        assert_eq!(grade.matched_by, None);
        assert_eq!(grade.keywords_total, 0);
    }

    #[test]
    fn keyword_fallback_accepts_fuzzy_keywords() {
        let keywords = kw(&["vacuum", "tube", "1945"]);
        let grade = Grader::new().evaluate(
            "it used vacum tubes around 1945",
            "It relied on thousands of thermionic valves for computation",
            &keywords,
        );
        assert!(grade.accepted);
        assert_eq!(grade.matched_by, Some(MatchKind::Keywords));
        assert_eq!(grade.keywords_found, 3);
    }

    #[test]
    fn keyword_fallback_rejects_when_nothing_matches() {
        let keywords = kw(&["vacuum", "tube", "1945"]);
        let grade = Grader::new().evaluate(
            "a computer",
            "It relied on thousands of thermionic valves for computation",
            &keywords,
        );
        assert!(!grade.accepted);
        assert_eq!(grade.keywords_found, 0);
    }

    #[test]
    fn two_of_three_keywords_is_enough() {
        let keywords = kw(&["vacuum", "tube", "1945"]);
        assert!(Grader::new().grade(
            "vacuum tube machine",
            "It relied on thousands of thermionic valves for computation",
            &keywords,
        ));
    }

    #[test]
    fn one_of_three_keywords_is_not_enough() {
        let keywords = kw(&["vacuum", "tube", "1945"]);
        let grade = Grader::new().evaluate(
            "something from 1945",
            "It relied on thousands of thermionic valves for computation",
            &keywords,
        );
        assert!(!grade.accepted);
        assert_eq!(grade.keywords_found, 1);
    }

    #[test]
    fn coverage_threshold_is_not_rounded() {
        // 5 keywords → 3.0 needed; 4 keywords → 2.4 needed, so 2 fails.
        let five = kw(&["alpha", "bravo", "charlie", "delta", "echo"]);
        assert!(Grader::new().grade("alpha bravo charlie", "zzzz", &five));
        assert!(!Grader::new().grade("alpha bravo", "zzzz", &five));

        let four = kw(&["alpha", "bravo", "charlie", "delta"]);
        assert!(!Grader::new().grade("alpha bravo", "zzzz", &four));
        assert!(Grader::new().grade("alpha bravo charlie", "zzzz", &four));
    }

    #[test]
    fn keywords_are_normalized_before_matching() {
        let keywords = kw(&["Válvula", "TRANSISTOR!"]);
        assert!(Grader::new().grade("valvula transistor", "zzzz", &keywords));
    }

    #[test]
    fn custom_thresholds_apply() {
        let strict = Grader::with_thresholds(GradingThresholds {
            answer_similarity: 0.99,
            ..GradingThresholds::default()
        });
        assert!(!strict.grade("Charles Babage", "Charles Babbage", &[]));
        assert!(strict.grade("charles babbage", "Charles Babbage", &[]));
    }
}
