use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Scheme prefix identifying audio already stored in the service's object
/// store.
pub const GCS_SCHEME: &str = "gs://";

/// Where the audio for a recognition request comes from.
///
/// Exactly one source per request, enforced by construction: either the full
/// audio bytes sent inline, or an object-store URI the service dereferences
/// itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// Full audio content, read from a local file and sent with the request.
    Content(Vec<u8>),
    /// A `gs://bucket/object` reference, passed through verbatim.
    Uri(String),
}

impl AudioSource {
    /// Classify a locator string and load it.
    ///
    /// A `gs://` locator is kept as a reference — the bytes are never read by
    /// this process. Anything else is treated as a local path and read fully
    /// into memory.
    pub fn from_locator(locator: &str) -> Result<Self> {
        if locator.starts_with(GCS_SCHEME) {
            debug!(uri = locator, "remote object reference");
            return Ok(AudioSource::Uri(locator.to_string()));
        }
        Self::from_file(locator)
    }

    /// Read a local audio file fully into an inline source.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::AudioNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path)?;
        info!(path = %path.display(), bytes = bytes.len(), "loaded audio");

        Ok(AudioSource::Content(bytes))
    }

    /// Whether this source is a remote object reference.
    pub fn is_remote(&self) -> bool {
        matches!(self, AudioSource::Uri(_))
    }
}
