use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use freqsum::{SummarizeError, Summarizer, SummarizerConfig, SummaryOrder, SummaryResult};

#[derive(Parser)]
#[command(name = "freqsum")]
#[command(about = "Summarize text by word-frequency sentence scoring", long_about = None)]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Fraction of sentences to keep (default: 0.3)
    #[arg(short, long)]
    ratio: Option<f64>,

    /// Stopword language code (default: en)
    #[arg(short, long)]
    language: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit the result as JSON
    #[arg(long)]
    json: bool,

    /// Emit selected sentences in source order instead of score order
    #[arg(long)]
    document_order: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "freqsum=debug",
        _ => "freqsum=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<SummarizerConfig> {
    let mut config = match &cli.config {
        Some(path) => SummarizerConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SummarizerConfig::default(),
    };
    if let Some(ratio) = cli.ratio {
        config.ratio = ratio;
    }
    if let Some(language) = &cli.language {
        config.language = language.clone();
    }
    if cli.document_order {
        config.order = SummaryOrder::Document;
    }
    Ok(config)
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn render(text: &str, result: &SummaryResult) {
    println!("Original Text:");
    println!("{}", text.trim_end());
    println!();
    println!("Original Text Length: {} words", result.original_word_count);
    println!();
    println!("Summarized Text:");
    println!("{}", result.summary);
    println!();
    println!("Summary Length: {} words", result.summary_word_count);
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    let summarizer = Summarizer::with_config(config).context("failed to start summarizer")?;

    let text = read_input(cli.input.as_ref())?;
    if text.trim().is_empty() {
        eprintln!("warning: please enter some text for summarization");
        return Ok(ExitCode::from(2));
    }

    match summarizer.summarize(&text) {
        Ok(result) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                render(&text, &result);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ SummarizeError::NoScorableContent) | Err(err @ SummarizeError::EmptyInput) => {
            tracing::warn!(%err, "input rejected");
            eprintln!("error: {err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
