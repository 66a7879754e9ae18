//! Hosted speech-to-text client — local audio file or `gs://` object in, ranked
//! transcripts out.
//!
//! **cloudspeech** wraps the Cloud Speech `speech:recognize` REST endpoint:
//! a locator is classified as a local file (read fully and sent inline) or an
//! object-store reference (passed through verbatim, never read here), and the
//! service's transcript alternatives come back in confidence order.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> cloudspeech::Result<()> {
//! let client = cloudspeech::SpeechClient::from_env()?;
//! let options = cloudspeech::RecognizeOptions::default();
//!
//! // A local file — its bytes are read and sent inline
//! let recognition = cloudspeech::recognize(&client, "resources/audio.raw", &options).await?;
//! for alternative in &recognition.alternatives {
//!     println!("{}", alternative.transcript);
//! }
//!
//! // An object already in cloud storage — no local I/O at all
//! let recognition = cloudspeech::recognize(&client, "gs://bucket/audio.flac", &options).await?;
//! # Ok(())
//! # }
//! ```
//!
//! See the [README](https://github.com/cloudspeech/cloudspeech) for CLI usage.

pub mod client;
pub mod config;
pub mod error;
pub mod source;
pub mod types;

pub use client::SpeechClient;
pub use config::{AudioEncoding, RecognizeOptions};
pub use error::{Error, Result};
pub use source::{AudioSource, GCS_SCHEME};
pub use types::{Alternative, Recognition};

use std::path::Path;
use std::time::Instant;

/// Recognize the audio at `locator`, dispatching on its shape.
///
/// A `gs://` locator goes to the service by reference; anything else is read
/// from the local filesystem and sent inline. The service call is timed on
/// both paths.
pub async fn recognize(
    client: &SpeechClient,
    locator: &str,
    options: &RecognizeOptions,
) -> Result<Recognition> {
    let source = AudioSource::from_locator(locator)?;
    recognize_source(client, source, options).await
}

/// Recognize a local audio file, sending its full contents inline.
pub async fn recognize_file(
    client: &SpeechClient,
    path: impl AsRef<Path>,
    options: &RecognizeOptions,
) -> Result<Recognition> {
    let source = AudioSource::from_file(path)?;
    recognize_source(client, source, options).await
}

/// Recognize audio already stored in the service's object store.
pub async fn recognize_uri(
    client: &SpeechClient,
    uri: &str,
    options: &RecognizeOptions,
) -> Result<Recognition> {
    recognize_source(client, AudioSource::Uri(uri.to_string()), options).await
}

async fn recognize_source(
    client: &SpeechClient,
    source: AudioSource,
    options: &RecognizeOptions,
) -> Result<Recognition> {
    let started = Instant::now();
    let alternatives = client.recognize(&source, options).await?;

    Ok(Recognition {
        alternatives,
        elapsed: started.elapsed(),
    })
}
