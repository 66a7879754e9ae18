//! Recognize a local audio file and print the top transcript.
//!
//! Usage: cargo run --example basic -- path/to/audio.raw

#[tokio::main]
async fn main() -> cloudspeech::Result<()> {
    let path = std::env::args()
        .nth(1)
        .expect("usage: basic <audio-file>");

    let client = cloudspeech::SpeechClient::from_env()?;
    let options = cloudspeech::RecognizeOptions::default();

    let recognition = cloudspeech::recognize_file(&client, &path, &options).await?;

    for alternative in &recognition.alternatives {
        println!("{}", alternative.transcript);
    }

    Ok(())
}
