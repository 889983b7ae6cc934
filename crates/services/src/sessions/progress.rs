/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    /// `floor(answered / total * 100)`; 100 for an empty session.
    pub percent: u8,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn new(total: usize, answered: usize, is_complete: bool) -> Self {
        let percent = if total == 0 {
            100
        } else {
            u8::try_from(answered.min(total) * 100 / total).unwrap_or(100)
        };
        Self {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            percent,
            is_complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_floored() {
        assert_eq!(SessionProgress::new(3, 1, false).percent, 33);
        assert_eq!(SessionProgress::new(3, 2, false).percent, 66);
        assert_eq!(SessionProgress::new(10, 0, false).percent, 0);
        assert_eq!(SessionProgress::new(4, 4, true).percent, 100);
    }

    #[test]
    fn empty_session_is_fully_done() {
        let progress = SessionProgress::new(0, 0, true);
        assert_eq!(progress.percent, 100);
        assert_eq!(progress.remaining, 0);
    }
}
