//! Recognize with a custom encoding, sample rate, and language.
//!
//! Usage: cargo run --example options -- path/to/audio.flac

use cloudspeech::{AudioEncoding, RecognizeOptions};

#[tokio::main]
async fn main() -> cloudspeech::Result<()> {
    let path = std::env::args()
        .nth(1)
        .expect("usage: options <audio-file>");

    let client = cloudspeech::SpeechClient::from_env()?;
    let options = RecognizeOptions::new()
        .encoding(AudioEncoding::Flac)
        .sample_rate_hertz(44_100)
        .language_code("de-DE");

    let recognition = cloudspeech::recognize(&client, &path, &options).await?;

    println!("Runtime: {:.2}s", recognition.elapsed.as_secs_f64());
    for alternative in &recognition.alternatives {
        match alternative.confidence {
            Some(c) => println!("{} (confidence {c:.2})", alternative.transcript),
            None => println!("{}", alternative.transcript),
        }
    }

    Ok(())
}
