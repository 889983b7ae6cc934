#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;
pub mod surface;

pub use sessions as session;

pub use error::{SessionError, SurfaceError};
pub use surface::DisplaySurface;

pub use sessions::{
    FinalReport, GameSession, POINTS_PER_CORRECT, QuizLoop, STARTING_LIVES, SessionPhase,
    SessionProgress, SessionState, SubmitOutcome,
};
