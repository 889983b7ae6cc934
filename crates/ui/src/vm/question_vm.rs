const BAR_WIDTH: usize = 20;

/// Text progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub percent: u8,
}

impl ProgressVm {
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
        }
    }

    #[must_use]
    pub fn bar(&self) -> String {
        let filled = usize::from(self.percent) * BAR_WIDTH / 100;
        format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
    }

    #[must_use]
    pub fn line(&self) -> String {
        format!("Progress: {}% {}", self.percent, self.bar())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub difficulty: String,
    pub progress: ProgressVm,
}

impl QuestionVm {
    #[must_use]
    pub fn new(prompt: &str, difficulty: &str, progress_percent: u8) -> Self {
        Self {
            prompt: prompt.to_owned(),
            difficulty: difficulty.to_owned(),
            progress: ProgressVm::new(progress_percent),
        }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);
        if !self.difficulty.trim().is_empty() {
            lines.push(format!("Difficulty: {}", self.difficulty));
        }
        lines.push(self.prompt.clone());
        lines.push(self.progress.line());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(ProgressVm::new(0).bar(), format!("[{}]", "-".repeat(20)));
        assert_eq!(
            ProgressVm::new(50).bar(),
            format!("[{}{}]", "#".repeat(10), "-".repeat(10))
        );
        assert_eq!(ProgressVm::new(100).bar(), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn percent_is_capped() {
        assert_eq!(ProgressVm::new(250).percent, 100);
    }

    #[test]
    fn blank_difficulty_is_omitted() {
        let vm = QuestionVm::new("Who built the Z3?", "", 40);
        assert_eq!(vm.lines(), vec!["Who built the Z3?".to_owned(), ProgressVm::new(40).line()]);

        let vm = QuestionVm::new("Who built the Z3?", "Hard", 40);
        assert_eq!(vm.lines()[0], "Difficulty: Hard");
    }
}
