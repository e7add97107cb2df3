use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpfError {
    #[error("Invalid argument `{parameter}`: {reason}")]
    InvalidArgument { parameter: String, reason: String },

    #[error("{0} is an invalid CPF")]
    InvalidCpf(String),

    #[error("{invalid} of {total} candidates are not valid CPFs")]
    InvalidCandidates { invalid: usize, total: usize },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for `{field}` ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CpfError {
    pub fn invalid_argument(parameter: &str, reason: impl Into<String>) -> Self {
        CpfError::InvalidArgument {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CpfError::InvalidArgument { .. } => "Pass a base of exactly 9 decimal digits",
            CpfError::InvalidCpf(_) => {
                "Check the two trailing digits, or use the 11-digit form without punctuation"
            }
            CpfError::InvalidCandidates { .. } => "Drop --strict to only report invalid candidates",
            CpfError::CsvError(_) | CpfError::IoError(_) => {
                "Make sure the output directory exists and is writable"
            }
            CpfError::SerializationError(_) => "Retry without --json",
            CpfError::ConfigError { .. } | CpfError::InvalidConfigValueError { .. } => {
                "Review the config file and command-line flags"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CpfError::InvalidArgument { .. }
            | CpfError::InvalidCpf(_)
            | CpfError::InvalidCandidates { .. }
            | CpfError::SerializationError(_) => 1,
            CpfError::ConfigError { .. } | CpfError::InvalidConfigValueError { .. } => 2,
            CpfError::CsvError(_) | CpfError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CpfError>;
