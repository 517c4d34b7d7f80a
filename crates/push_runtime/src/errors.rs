//! Conditions surfaced by the runtime. Instruction precondition failures
//! are not among them: those are silent no-ops.

use push_parser::ParseError;
use thiserror::Error;

/// Why a run stopped early. Stacks keep whatever state they reached.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("unknown or disabled stack \"{stack}\" in \"{instruction}\"")]
    UnknownStack { stack: String, instruction: String },

    #[error("unknown or disabled instruction \"{stack}.{operation}\"")]
    UnknownInstruction {
        stack: String,
        operation: String,
        /// Closest enabled operation on the same stack, if any is close.
        suggestion: Option<String>,
    },

    #[error("step limit of {limit} reached before the exec stack emptied")]
    StepLimitExceeded { limit: usize },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl RunError {
    /// Resource exhaustion is the one recoverable outcome: the partial
    /// state is consistent and execution may be resumed.
    pub fn is_step_limit(&self) -> bool {
        matches!(self, RunError::StepLimitExceeded { .. })
    }
}

/// Rejected configuration. Nothing is applied when any check fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown parameter \"{0}\"")]
    UnknownParameter(String),

    #[error("expected setting to follow \"{0}\"")]
    MissingSetting(String),

    #[error("unknown type: \"{0}\"")]
    UnknownType(String),

    #[error("unknown instruction: \"{0}\"")]
    UnknownInstruction(String),

    #[error("could not parse \"{0}\" as integer")]
    InvalidInteger(String),

    #[error("could not parse \"{0}\" as float")]
    InvalidFloat(String),

    #[error("could not parse \"{0}\" as boolean")]
    InvalidBoolean(String),

    #[error("{field} must be at least 1, got {value}")]
    TooSmall { field: &'static str, value: i64 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("NEW-ERC-NAME-PROBABILITY must be between 0 and 1 inclusive, got {0}")]
    ProbabilityOutOfRange(f64),

    #[error("MIN-RANDOM-INTEGER ({min}) must be less than or equal to MAX-RANDOM-INTEGER ({max})")]
    IntegerRange { min: i64, max: i64 },

    #[error("MIN-RANDOM-FLOAT ({min}) must be less than or equal to MAX-RANDOM-FLOAT ({max})")]
    FloatRange { min: f64, max: f64 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
