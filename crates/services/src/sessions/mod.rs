mod plan;
mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::SessionPlan;
pub use progress::SessionProgress;
pub use service::{
    FinalReport, GameSession, POINTS_PER_CORRECT, STARTING_LIVES, SessionPhase, SessionState,
    SubmitOutcome,
};
pub use workflow::QuizLoop;
