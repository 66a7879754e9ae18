use clap::Parser;
use cloudspeech::{AudioEncoding, RecognizeOptions, SpeechClient};

#[derive(Parser)]
#[command(
    name = "cloudspeech",
    about = "Transcribe a local audio file or gs:// object via the hosted recognition service"
)]
struct Cli {
    /// Local file path or gs:// URI of the audio to recognize.
    path: String,

    /// Audio encoding of the source.
    #[arg(long, default_value = "LINEAR16")]
    encoding: String,

    /// Sample rate of the source in hertz.
    #[arg(long = "sample_rate", default_value_t = 16_000)]
    sample_rate: u32,

    /// BCP-47 language tag of the spoken audio.
    #[arg(long, default_value = "en-US")]
    language: String,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cloudspeech=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Validate the encoding name before any file or network I/O.
    let encoding = match cli.encoding.parse::<AudioEncoding>() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Supported encodings: {}",
                AudioEncoding::supported().join(", ")
            );
            std::process::exit(1);
        }
    };

    let client = match SpeechClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let options = RecognizeOptions::new()
        .encoding(encoding)
        .sample_rate_hertz(cli.sample_rate)
        .language_code(cli.language);

    let recognition = match cloudspeech::recognize(&client, &cli.path, &options).await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Timing goes to stderr so stdout carries nothing but transcript lines.
    eprintln!("Runtime: {:.2}s", recognition.elapsed.as_secs_f64());

    for alternative in &recognition.alternatives {
        println!("Transcript: {}", alternative.transcript);
    }
}
