use quiz_core::model::Tier;

#[must_use]
pub fn tier_message(tier: Tier) -> &'static str {
    match tier {
        Tier::Top => "Excellent! You really know this subject!",
        Tier::Mid => "Good job! You know the material well.",
        Tier::Low => "Study a bit more and try again!",
    }
}

/// End screen contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub score: u32,
    pub tier: Tier,
}

impl SummaryVm {
    #[must_use]
    pub fn new(score: u32, tier: Tier) -> Self {
        Self { score, tier }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            "Game over!".to_owned(),
            format!("Final score: {}", self.score),
            tier_message(self.tier).to_owned(),
        ]
    }
}
