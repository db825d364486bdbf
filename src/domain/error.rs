//! Domain error types.

use std::path::PathBuf;

/// Top-level error type for tourneystats.
#[derive(Debug, thiserror::Error)]
pub enum TourneyError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("input path not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("no input files found under {}", path.display())]
    NoFilesFound { path: PathBuf },

    #[error("no records could be loaded")]
    NoRecordsLoaded,

    #[error("all records were filtered out, nothing to analyse")]
    AllRecordsFiltered,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TourneyError {
    pub fn invalid(section: &str, key: &str, reason: impl Into<String>) -> Self {
        TourneyError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<&TourneyError> for std::process::ExitCode {
    fn from(err: &TourneyError) -> Self {
        let code: u8 = match err {
            TourneyError::ConfigParse { .. } | TourneyError::ConfigInvalid { .. } => 2,
            TourneyError::InputNotFound { .. }
            | TourneyError::NoFilesFound { .. }
            | TourneyError::NoRecordsLoaded
            | TourneyError::AllRecordsFiltered
            | TourneyError::Io(_)
            | TourneyError::Csv(_)
            | TourneyError::Json(_) => 1,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::ExitCode;

    fn code_of(err: &TourneyError) -> String {
        format!("{:?}", ExitCode::from(err))
    }

    #[test]
    fn fatal_pipeline_conditions_exit_with_one() {
        let one = format!("{:?}", ExitCode::from(1));
        assert_eq!(code_of(&TourneyError::NoRecordsLoaded), one);
        assert_eq!(code_of(&TourneyError::AllRecordsFiltered), one);
        assert_eq!(
            code_of(&TourneyError::InputNotFound {
                path: PathBuf::from("/missing")
            }),
            one
        );
        assert_eq!(
            code_of(&TourneyError::NoFilesFound {
                path: PathBuf::from("/empty")
            }),
            one
        );
    }

    #[test]
    fn config_errors_exit_with_two() {
        let two = format!("{:?}", ExitCode::from(2));
        let err = TourneyError::invalid("input", "delimiter", "must be one character");
        assert_eq!(code_of(&err), two);
    }

    #[test]
    fn config_invalid_message_names_section_and_key() {
        let err = TourneyError::invalid("filter", "min_date", "expected YYYY-MM-DD");
        assert_eq!(
            err.to_string(),
            "invalid config value [filter] min_date: expected YYYY-MM-DD"
        );
    }
}
