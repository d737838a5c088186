use std::fmt;

/// Result type for jsonlens-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the configuration layer
#[derive(Debug)]
pub enum Error {
    /// Rule compilation error
    Engine(jsonlens_engine::Error),

    /// Descriptor parse error
    Schema(jsonlens_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Settings file error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Engine(err) => write!(f, "Rule error: {}", err),
            Error::Schema(err) => write!(f, "Descriptor error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Engine(err) => Some(err),
            Error::Schema(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<jsonlens_engine::Error> for Error {
    fn from(err: jsonlens_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<jsonlens_types::Error> for Error {
    fn from(err: jsonlens_types::Error) -> Self {
        Error::Schema(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
