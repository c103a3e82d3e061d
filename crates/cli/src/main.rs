use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use speechmark_core::pipeline::analyze_use_case::AnalyzeTranscriptUseCase;
use speechmark_core::pipeline::report::AnalysisInput;
use speechmark_core::shared::constants::DEFAULT_FALLBACK_DURATION_SECS;

/// Speech performance scoring from a plain-text transcript.
///
/// Scores pacing, filler words, grammar, vocabulary, structure, and
/// confidence, and prints the full analysis as JSON. Pause, pronunciation,
/// and pitch figures are punctuation-derived proxies, not acoustic
/// measurements.
#[derive(Parser)]
#[command(name = "speechmark")]
struct Cli {
    /// Transcript file to analyze ("-" reads stdin).
    transcript: PathBuf,

    /// Audio duration in seconds. Defaults to 60 when the real duration
    /// is unknown.
    #[arg(long, default_value_t = DEFAULT_FALLBACK_DURATION_SECS)]
    duration: f64,

    /// Print compact single-line JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.duration < 0.0 || !cli.duration.is_finite() {
        return Err(format!("duration must be a non-negative number, got {}", cli.duration).into());
    }

    let transcript = if cli.transcript.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&cli.transcript)?
    };

    log::info!(
        "analyzing {} words over {}s",
        transcript.split_whitespace().count(),
        cli.duration
    );

    let engine = AnalyzeTranscriptUseCase::with_neutral_sentiment();
    let result = engine.run(&AnalysisInput::new(transcript, cli.duration))?;

    let json = if cli.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{json}");

    Ok(())
}
