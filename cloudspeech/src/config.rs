use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Audio encoding of the request payload, using the recognition service's
/// own encoding names.
///
/// The service rejects a request whose declared encoding does not match the
/// audio, so callers validate the name here before anything is read or sent.
/// Defaults to `LINEAR16` (uncompressed 16-bit signed little-endian PCM).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    #[default]
    Linear16,
    Flac,
    Mulaw,
    Amr,
    AmrWb,
    OggOpus,
    SpeexWithHeaderByte,
}

impl AudioEncoding {
    /// The service-side name of this encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioEncoding::Linear16 => "LINEAR16",
            AudioEncoding::Flac => "FLAC",
            AudioEncoding::Mulaw => "MULAW",
            AudioEncoding::Amr => "AMR",
            AudioEncoding::AmrWb => "AMR_WB",
            AudioEncoding::OggOpus => "OGG_OPUS",
            AudioEncoding::SpeexWithHeaderByte => "SPEEX_WITH_HEADER_BYTE",
        }
    }

    /// All encoding names the service accepts.
    pub fn supported() -> &'static [&'static str] {
        &[
            "LINEAR16",
            "FLAC",
            "MULAW",
            "AMR",
            "AMR_WB",
            "OGG_OPUS",
            "SPEEX_WITH_HEADER_BYTE",
        ]
    }
}

impl FromStr for AudioEncoding {
    type Err = Error;

    /// Parse a service encoding name (e.g. CLI argument). Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_uppercase().as_str() {
            "LINEAR16" => Ok(AudioEncoding::Linear16),
            "FLAC" => Ok(AudioEncoding::Flac),
            "MULAW" => Ok(AudioEncoding::Mulaw),
            "AMR" => Ok(AudioEncoding::Amr),
            "AMR_WB" => Ok(AudioEncoding::AmrWb),
            "OGG_OPUS" => Ok(AudioEncoding::OggOpus),
            "SPEEX_WITH_HEADER_BYTE" => Ok(AudioEncoding::SpeexWithHeaderByte),
            _ => Err(Error::UnknownEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options for a recognition request.
///
/// Sample rate and language tag are forwarded to the service as-is; the
/// service decides which combinations are valid.
#[derive(Debug, Clone)]
pub struct RecognizeOptions {
    pub encoding: AudioEncoding,
    /// Sample rate of the source audio in hertz.
    pub sample_rate_hertz: u32,
    /// BCP-47 language tag of the spoken audio.
    pub language_code: String,
}

impl Default for RecognizeOptions {
    fn default() -> Self {
        Self {
            encoding: AudioEncoding::Linear16,
            sample_rate_hertz: 16_000,
            language_code: "en-US".into(),
        }
    }
}

impl RecognizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encoding(mut self, encoding: AudioEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn sample_rate_hertz(mut self, hertz: u32) -> Self {
        self.sample_rate_hertz = hertz;
        self
    }

    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = code.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_parse_exact() {
        assert_eq!(
            "LINEAR16".parse::<AudioEncoding>().unwrap(),
            AudioEncoding::Linear16
        );
        assert_eq!(
            "AMR_WB".parse::<AudioEncoding>().unwrap(),
            AudioEncoding::AmrWb
        );
        assert_eq!(
            "OGG_OPUS".parse::<AudioEncoding>().unwrap(),
            AudioEncoding::OggOpus
        );
    }

    #[test]
    fn test_encoding_parse_case_insensitive() {
        assert_eq!(
            "linear16".parse::<AudioEncoding>().unwrap(),
            AudioEncoding::Linear16
        );
        assert_eq!(
            "flac".parse::<AudioEncoding>().unwrap(),
            AudioEncoding::Flac
        );
    }

    #[test]
    fn test_encoding_parse_unknown() {
        let err = "MP3".parse::<AudioEncoding>().unwrap_err();
        assert!(matches!(err, Error::UnknownEncoding(_)));
        assert!(err.to_string().contains("MP3"));
    }

    #[test]
    fn test_encoding_round_trips_through_as_str() {
        for name in AudioEncoding::supported() {
            let encoding = name.parse::<AudioEncoding>().unwrap();
            assert_eq!(encoding.as_str(), *name);
        }
    }

    #[test]
    fn test_encoding_serializes_to_service_name() {
        let json = serde_json::to_string(&AudioEncoding::SpeexWithHeaderByte).unwrap();
        assert_eq!(json, "\"SPEEX_WITH_HEADER_BYTE\"");
    }

    #[test]
    fn test_encoding_default() {
        assert_eq!(AudioEncoding::default(), AudioEncoding::Linear16);
    }

    #[test]
    fn test_options_defaults() {
        let opts = RecognizeOptions::default();
        assert_eq!(opts.encoding, AudioEncoding::Linear16);
        assert_eq!(opts.sample_rate_hertz, 16_000);
        assert_eq!(opts.language_code, "en-US");
    }

    #[test]
    fn test_options_builder() {
        let opts = RecognizeOptions::new()
            .encoding(AudioEncoding::Flac)
            .sample_rate_hertz(44_100)
            .language_code("de-DE");
        assert_eq!(opts.encoding, AudioEncoding::Flac);
        assert_eq!(opts.sample_rate_hertz, 44_100);
        assert_eq!(opts.language_code, "de-DE");
    }
}
