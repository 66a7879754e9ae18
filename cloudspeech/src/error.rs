use std::path::PathBuf;

/// All errors that can occur in cloudspeech.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("audio file not found: {path}")]
    AudioNotFound { path: PathBuf },

    #[error("unsupported encoding: \"{0}\" — use AudioEncoding::supported() to list valid names")]
    UnknownEncoding(String),

    #[error("no API key found — set SPEECH_API_KEY or GOOGLE_API_KEY")]
    MissingApiKey,

    #[error("service error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
