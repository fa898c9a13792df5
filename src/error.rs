/// Crate level result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Crate level error enum
#[derive(Debug)]
pub enum Error {
    /// Request couldn't be sent or its body couldn't be read
    Http(reqwest::Error),

    /// Occurs when a response body is not a list of training events
    SerdeJson(serde_json::Error),

    /// Report couldn't be written
    Io(std::io::Error),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(e) => e.fmt(f),
            Self::SerdeJson(e) => e.fmt(f),
            Self::Io(e) => e.fmt(f),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::SerdeJson(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}
