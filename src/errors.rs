use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while polishing subtitles
#[derive(Debug)]
pub enum SubpolishError {
    Subtitle(SubtitleError),
    Transcript(TranscriptError),
    Config(ConfigError),
    Json(serde_json::Error),
    Other(io::Error),
}

/// Subtitle text parsing/serialization errors
#[derive(Debug)]
pub struct SubtitleError {
    pub message: String,
}

impl SubtitleError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sentence reconstruction errors (word-timestamp input)
#[derive(Debug)]
pub struct TranscriptError {
    pub message: String,
}

impl TranscriptError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The document did not contain a single timestamped word.
    pub fn insufficient_input() -> Self {
        Self::new("insufficient input: no word-level timestamps found")
    }
}

#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SubpolishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubpolishError::Other(err) => write!(f, "I/O error: {}", err),
            SubpolishError::Subtitle(err) => write!(f, "Subtitle error: {}", err),
            SubpolishError::Transcript(err) => write!(f, "Transcript error: {}", err),
            SubpolishError::Config(err) => write!(f, "Config error: {}", err),
            SubpolishError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl fmt::Display for SubtitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SubpolishError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SubpolishError::Json(err) => Some(err),
            SubpolishError::Other(err) => Some(err),
            _ => None,
        }
    }
}
impl Error for SubtitleError {}
impl Error for TranscriptError {}
impl Error for ConfigError {}

// Conversion implementations
impl From<io::Error> for SubpolishError {
    fn from(err: io::Error) -> Self {
        SubpolishError::Other(err)
    }
}

impl From<SubtitleError> for SubpolishError {
    fn from(err: SubtitleError) -> Self {
        SubpolishError::Subtitle(err)
    }
}

impl From<TranscriptError> for SubpolishError {
    fn from(err: TranscriptError) -> Self {
        SubpolishError::Transcript(err)
    }
}

impl From<ConfigError> for SubpolishError {
    fn from(err: ConfigError) -> Self {
        SubpolishError::Config(err)
    }
}

impl From<serde_json::Error> for SubpolishError {
    fn from(err: serde_json::Error) -> Self {
        SubpolishError::Json(err)
    }
}

// Conversion to io::Error so callers working with files can use `?` directly
impl From<SubpolishError> for io::Error {
    fn from(err: SubpolishError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with SubpolishError
pub type SubpolishResult<T> = Result<T, SubpolishError>;
