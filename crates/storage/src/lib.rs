#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::JsonQuestionSource;
pub use repository::{InMemoryQuestionSource, QuestionRecord, QuestionSource, StorageError};
