//! Error types for log parsing and series building.

/// Why a single INFO line could not be turned into a sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line has too few tokens to carry a timestamp.
    MalformedLine { tokens: usize },
    /// Timestamp token is not `HH:MM:SS` with numeric parts.
    MalformedTimestamp { token: String },
    /// A memory field has no parseable leading integer.
    MalformedNumber { field: &'static str, token: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MalformedLine { tokens } => {
                write!(f, "malformed line: expected at least 2 tokens, got {}", tokens)
            }
            ParseError::MalformedTimestamp { token } => {
                write!(f, "malformed timestamp '{}': expected HH:MM:SS", token)
            }
            ParseError::MalformedNumber { field, token } => {
                write!(f, "malformed {} '{}': no leading integer", field, token)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Crate-level error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An INFO line failed to parse. `line` is 1-based over the whole text.
    Parse { line: usize, source: ParseError },
    /// I/O error while reading the log or writing output.
    Io(String),
    /// Error serializing chart output.
    Serialize(String),
    /// Invalid caller-supplied argument (mode, day origin, ...).
    InvalidArgument(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Parse { line, source } => write!(f, "line {}: {}", line, source),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::Serialize(msg) => write!(f, "Serialize error: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialize(e.to_string())
    }
}
