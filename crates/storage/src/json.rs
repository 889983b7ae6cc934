use std::path::{Path, PathBuf};

use quiz_core::model::{GameMode, QuestionSet};
use tracing::debug;

use crate::repository::{QuestionRecord, QuestionSource, StorageError};

/// Reads one JSON array of question records per game mode from a directory.
#[derive(Debug, Clone)]
pub struct JsonQuestionSource {
    data_dir: PathBuf,
}

impl JsonQuestionSource {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn file_name(mode: GameMode) -> &'static str {
        match mode {
            GameMode::History => "history.json",
            GameMode::Computers => "computers.json",
        }
    }

    #[must_use]
    pub fn path_for(&self, mode: GameMode) -> PathBuf {
        self.data_dir.join(Self::file_name(mode))
    }

    fn parse(path: &Path, raw: &str) -> Result<QuestionSet, StorageError> {
        let records: Vec<QuestionRecord> =
            serde_json::from_str(raw).map_err(|source| StorageError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .into_question()
                    .map_err(|source| StorageError::InvalidRecord {
                        path: path.to_path_buf(),
                        index,
                        source,
                    })
            })
            .collect()
    }
}

impl QuestionSource for JsonQuestionSource {
    fn load(&self, mode: GameMode) -> Result<QuestionSet, StorageError> {
        let path = self.path_for(mode);
        if !path.is_file() {
            return Err(StorageError::NotFound { path });
        }

        let raw = std::fs::read_to_string(&path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        let set = Self::parse(&path, &raw)?;
        debug!(path = %path.display(), %mode, questions = set.len(), "loaded question file");
        Ok(set)
    }
}
