use std::io;
use std::path::PathBuf;

use serde::Serialize;

/// Failure to load the reference data at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed reference data in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Outcome of a single analysis request that did not produce a report.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Please provide a verb form")]
    EmptyInput,

    #[error("Could not analyze '{form}'. It may not be a valid Prakrit verb form.")]
    NoAnalysis {
        form: String,
        suggestions: Vec<String>,
    },

    #[error("analysis failed: {0}")]
    Unexpected(String),
}

impl AnalysisError {
    /// Guidance offered to the user alongside the message.
    pub fn suggestions(&self) -> &[String] {
        match self {
            AnalysisError::NoAnalysis { suggestions, .. } => suggestions,
            _ => &[],
        }
    }
}

/// Serializable form of an [`AnalysisError`] for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl From<&AnalysisError> for ErrorReport {
    fn from(err: &AnalysisError) -> Self {
        Self {
            error: err.to_string(),
            suggestions: err.suggestions().to_vec(),
        }
    }
}
