//! Recognize an object already stored in cloud storage — no local I/O.
//!
//! Usage: cargo run --example gcs -- gs://bucket/audio.flac

#[tokio::main]
async fn main() -> cloudspeech::Result<()> {
    let uri = std::env::args()
        .nth(1)
        .expect("usage: gcs <gs://bucket/object>");

    let client = cloudspeech::SpeechClient::from_env()?;
    let options = cloudspeech::RecognizeOptions::default();

    let recognition = cloudspeech::recognize_uri(&client, &uri, &options).await?;

    for alternative in &recognition.alternatives {
        println!("{}", alternative.transcript);
    }

    Ok(())
}
