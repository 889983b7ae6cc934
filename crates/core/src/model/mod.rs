mod keywords;
mod mode;
mod question;
mod tier;

pub use keywords::KeywordIndex;
pub use mode::GameMode;
pub use question::{Question, QuestionError, QuestionSet};
pub use tier::{MID_TIER_MIN, TOP_TIER_MIN, Tier};
