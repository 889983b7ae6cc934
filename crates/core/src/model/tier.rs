/// Minimum final score for the top tier.
pub const TOP_TIER_MIN: u32 = 70;
/// Minimum final score for the middle tier.
pub const MID_TIER_MIN: u32 = 40;

/// Final-score band used to pick the end-of-game message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Top,
    Mid,
    Low,
}

impl Tier {
    /// Boundaries are inclusive: 70 is `Top`, 40 is `Mid`.
    #[must_use]
    pub fn for_score(score: u32) -> Self {
        if score >= TOP_TIER_MIN {
            Tier::Top
        } else if score >= MID_TIER_MIN {
            Tier::Mid
        } else {
            Tier::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_go_to_higher_tier() {
        assert_eq!(Tier::for_score(70), Tier::Top);
        assert_eq!(Tier::for_score(69), Tier::Mid);
        assert_eq!(Tier::for_score(40), Tier::Mid);
        assert_eq!(Tier::for_score(39), Tier::Low);
        assert_eq!(Tier::for_score(0), Tier::Low);
        assert_eq!(Tier::for_score(150), Tier::Top);
    }
}
