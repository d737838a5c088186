use std::fmt;

/// Result type for jsonlens-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while compiling rules.
///
/// Evaluation (`test`/`summarize`) is total over well-formed JSON values and
/// never produces an error; everything that can go wrong goes wrong here, at
/// construction time.
#[derive(Debug)]
pub enum Error {
    /// Descriptor is structurally invalid (empty predicate list, bad shape)
    Config(String),

    /// A `valueRegex` pattern failed to compile
    Pattern { pattern: String, source: regex::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Pattern { pattern, source } => {
                write!(f, "Invalid regex '{}': {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(_) => None,
            Error::Pattern { source, .. } => Some(source),
        }
    }
}
