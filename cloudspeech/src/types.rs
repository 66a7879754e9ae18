use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One candidate transcription for a recognition request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub transcript: String,
    /// Service-reported confidence in [0, 1], when the service provides one.
    pub confidence: Option<f32>,
}

/// Result of one recognition round-trip.
#[derive(Debug, Clone)]
pub struct Recognition {
    /// Candidate transcripts in the service's confidence order, highest first.
    pub alternatives: Vec<Alternative>,
    /// Wall-clock time of the service call.
    pub elapsed: Duration,
}

impl Recognition {
    /// The top-ranked transcript, if the service returned any.
    pub fn best(&self) -> Option<&str> {
        self.alternatives.first().map(|a| a.transcript.as_str())
    }
}
