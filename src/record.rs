use serde::Serialize;

/// Longest output, in characters, kept in a success record.
pub const OUTPUT_PREVIEW_CHARS: usize = 200;

/// One entry of a runner's results log.
///
/// Serializes as `{"step": .., "output": ..}` or `{"step": .., "error": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StepRecord {
    Success { step: String, output: String },
    Failure { step: String, error: String },
}

impl StepRecord {
    /// Build a success record. `output` is cut down to
    /// [`OUTPUT_PREVIEW_CHARS`] characters.
    pub fn success(step: impl Into<String>, output: &str) -> Self {
        StepRecord::Success {
            step: step.into(),
            output: preview(output),
        }
    }

    pub fn failure(step: impl Into<String>, error: impl Into<String>) -> Self {
        StepRecord::Failure {
            step: step.into(),
            error: error.into(),
        }
    }

    pub fn step(&self) -> &str {
        match self {
            Self::Success { step, .. } | Self::Failure { step, .. } => step,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Success { output, .. } => Some(output),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure { error, .. } => Some(error),
            Self::Success { .. } => None,
        }
    }
}

fn preview(output: &str) -> String {
    match output.char_indices().nth(OUTPUT_PREVIEW_CHARS) {
        Some((cut, _)) => output[..cut].to_string(),
        None => output.to_string(),
    }
}
