use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{AudioEncoding, RecognizeOptions};
use crate::error::{Error, Result};
use crate::source::AudioSource;
use crate::types::Alternative;

const DEFAULT_BASE_URL: &str = "https://speech.googleapis.com/v1";

/// Environment variables consulted for the API key, in order.
const API_KEY_VARS: [&str; 2] = ["SPEECH_API_KEY", "GOOGLE_API_KEY"];

/// Handle to the hosted recognition service.
///
/// Construct one per process and pass it by reference into
/// [`crate::recognize`] and friends. No request timeout is set here;
/// whatever the HTTP client enforces by default applies.
#[derive(Debug)]
pub struct SpeechClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SpeechClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from `SPEECH_API_KEY` or `GOOGLE_API_KEY`.
    pub fn from_env() -> Result<Self> {
        for var in API_KEY_VARS {
            if let Ok(key) = std::env::var(var) {
                if !key.is_empty() {
                    return Ok(Self::new(key));
                }
            }
        }
        Err(Error::MissingApiKey)
    }

    /// Point the client at a different endpoint (test servers, emulators).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// One synchronous recognition round-trip.
    ///
    /// Returns the service's alternatives in its own ranking, highest
    /// confidence first.
    pub async fn recognize(
        &self,
        source: &AudioSource,
        options: &RecognizeOptions,
    ) -> Result<Vec<Alternative>> {
        let body = RecognizeRequest::build(source, options);
        let url = format!("{}/speech:recognize", self.base_url);

        debug!(
            encoding = options.encoding.as_str(),
            sample_rate = options.sample_rate_hertz,
            language = %options.language_code,
            remote = source.is_remote(),
            "sending recognition request"
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: extract_error_message(&raw),
            });
        }

        let raw = response.text().await?;
        let parsed: RecognizeResponse = serde_json::from_str(&raw)?;
        let alternatives = parsed.into_alternatives();
        info!(alternatives = alternatives.len(), "recognition complete");

        Ok(alternatives)
    }
}

#[derive(Debug, Serialize)]
struct RecognizeRequest {
    config: RecognitionConfig,
    audio: RecognitionAudio,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig {
    encoding: AudioEncoding,
    sample_rate_hertz: u32,
    language_code: String,
}

/// The service schema makes `content`/`uri` a one-of; exactly one field is
/// ever populated here.
#[derive(Debug, Serialize)]
struct RecognitionAudio {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
}

impl RecognizeRequest {
    fn build(source: &AudioSource, options: &RecognizeOptions) -> Self {
        let audio = match source {
            AudioSource::Content(bytes) => RecognitionAudio {
                content: Some(BASE64.encode(bytes)),
                uri: None,
            },
            AudioSource::Uri(uri) => RecognitionAudio {
                content: None,
                uri: Some(uri.clone()),
            },
        };

        Self {
            config: RecognitionConfig {
                encoding: options.encoding,
                sample_rate_hertz: options.sample_rate_hertz,
                language_code: options.language_code.clone(),
            },
            audio,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<WireAlternative>,
}

#[derive(Debug, Deserialize)]
struct WireAlternative {
    #[serde(default)]
    transcript: String,
    confidence: Option<f32>,
}

impl RecognizeResponse {
    /// Flatten results into one alternatives list, preserving service order.
    fn into_alternatives(self) -> Vec<Alternative> {
        self.results
            .into_iter()
            .flat_map(|r| r.alternatives)
            .map(|a| Alternative {
                transcript: a.transcript,
                confidence: a.confidence,
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull the human-readable message out of the service's error envelope,
/// falling back to the raw body for non-JSON errors (proxies, HTML pages).
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_options() -> RecognizeOptions {
        RecognizeOptions::default()
    }

    #[test]
    fn test_request_inline_content_is_base64() {
        let source = AudioSource::Content(vec![0x52, 0x49, 0x46, 0x46]);
        let request = RecognizeRequest::build(&source, &default_options());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["audio"]["content"], "UklGRg==");
        assert_eq!(json["config"]["encoding"], "LINEAR16");
        assert_eq!(json["config"]["sampleRateHertz"], 16_000);
        assert_eq!(json["config"]["languageCode"], "en-US");
    }

    #[test]
    fn test_request_uri_passes_through_verbatim() {
        let source = AudioSource::Uri("gs://bucket/object.flac".into());
        let request = RecognizeRequest::build(&source, &default_options());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["audio"]["uri"], "gs://bucket/object.flac");
    }

    #[test]
    fn test_request_audio_has_exactly_one_field() {
        let inline = RecognizeRequest::build(
            &AudioSource::Content(vec![1, 2, 3]),
            &default_options(),
        );
        let json = serde_json::to_value(&inline).unwrap();
        let audio = json["audio"].as_object().unwrap();
        assert_eq!(audio.keys().collect::<Vec<_>>(), vec!["content"]);

        let remote = RecognizeRequest::build(
            &AudioSource::Uri("gs://bucket/a.raw".into()),
            &default_options(),
        );
        let json = serde_json::to_value(&remote).unwrap();
        let audio = json["audio"].as_object().unwrap();
        assert_eq!(audio.keys().collect::<Vec<_>>(), vec!["uri"]);
    }

    #[test]
    fn test_response_preserves_service_order() {
        let parsed: RecognizeResponse = serde_json::from_str(
            r#"{
                "results": [
                    {"alternatives": [
                        {"transcript": "how old is the Brooklyn Bridge", "confidence": 0.98},
                        {"transcript": "how old is the Brooklyn bridge", "confidence": 0.72}
                    ]},
                    {"alternatives": [
                        {"transcript": "it opened in 1883"}
                    ]}
                ]
            }"#,
        )
        .unwrap();

        let alternatives = parsed.into_alternatives();
        assert_eq!(alternatives.len(), 3);
        assert_eq!(alternatives[0].transcript, "how old is the Brooklyn Bridge");
        assert_eq!(alternatives[0].confidence, Some(0.98));
        assert_eq!(alternatives[2].transcript, "it opened in 1883");
        assert_eq!(alternatives[2].confidence, None);
    }

    #[test]
    fn test_response_empty_body() {
        // The service returns {} when it hears nothing.
        let parsed: RecognizeResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.into_alternatives().is_empty());
    }

    #[test]
    fn test_extract_error_message_envelope() {
        let body = r#"{"error": {"code": 400, "message": "Invalid sample rate.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(extract_error_message(body), "Invalid sample rate.");
    }

    #[test]
    fn test_extract_error_message_non_json() {
        assert_eq!(
            extract_error_message("502 Bad Gateway\n"),
            "502 Bad Gateway"
        );
    }

    #[test]
    fn test_from_env_missing_key() {
        // Only meaningful when the variables are unset, as in CI.
        if API_KEY_VARS.iter().all(|v| std::env::var(v).is_err()) {
            assert!(matches!(
                SpeechClient::from_env().unwrap_err(),
                Error::MissingApiKey
            ));
        }
    }

    #[test]
    fn test_with_base_url() {
        let client = SpeechClient::new("test-key").with_base_url("http://localhost:9090/v1");
        assert_eq!(client.base_url, "http://localhost:9090/v1");
    }
}
