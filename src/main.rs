//! TuxDictate - Dictation normalizer for Linux
//!
//! Turns recognized speech into typed text with numbers as digits.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use tuxdictate::config::{config_path, Config};
use tuxdictate::TextNormalizer;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/tuxdictate/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Convert spoken numbers to digits
    #[arg(long, global = true, conflicts_with = "words")]
    digits: bool,

    /// Leave spoken numbers as words
    #[arg(long, global = true)]
    words: bool,

    /// Group digits with thousands separators
    #[arg(long, global = true)]
    separator: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize text from arguments, or each line of stdin
    Normalize {
        /// Text to normalize
        text: Vec<String>,
    },
    /// Dictate from the microphone
    #[cfg(feature = "listen")]
    Listen {
        /// Print every utterance instead of stopping after the first
        #[arg(short, long)]
        continuous: bool,

        /// Audio input device index
        #[arg(short, long)]
        device: Option<usize>,

        /// Vosk model directory
        #[arg(long)]
        model: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let path = args.config.clone().unwrap_or_else(config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    // Setup logging (stderr, stdout carries the text)
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("Using config {}", path.display());

    if args.digits {
        config.numbers_as_digits = true;
    }
    if args.words {
        config.numbers_as_digits = false;
    }
    if args.separator {
        config.numbers_use_separator = true;
    }

    let command = args.command.unwrap_or(Commands::Normalize { text: Vec::new() });

    match command {
        Commands::Normalize { text } => normalize(&config, &text),
        #[cfg(feature = "listen")]
        Commands::Listen {
            continuous,
            device,
            model,
        } => {
            if device.is_some() {
                config.audio_device = device;
            }
            if let Some(model) = model {
                config.vosk_model_path = model.to_string_lossy().to_string();
            }
            listen(config, continuous).await
        }
    }
}

/// Normalize the joined arguments, or stdin line by line
fn normalize(config: &Config, text: &[String]) -> Result<()> {
    let normalizer = TextNormalizer::from_config(config);

    if !text.is_empty() {
        println!("{}", normalizer.normalize(&text.join(" ")));
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        println!("{}", normalizer.normalize(&line));
    }
    Ok(())
}

#[cfg(feature = "listen")]
async fn listen(config: Config, continuous: bool) -> Result<()> {
    use tuxdictate::dictation::Dictation;

    config.validate()?;

    tracing::info!("🐧 TuxDictate v{} starting...", env!("CARGO_PKG_VERSION"));

    let engine = tuxdictate::asr::create_engine(&config).context("Failed to start ASR")?;
    let (mut audio_rx, _capture) =
        tuxdictate::audio::start_capture(config.audio_device, config.sample_rate)
            .context("Failed to start audio capture")?;
    tracing::info!("🎙️ Audio capture started");

    let mut dictation = Dictation::new(engine, TextNormalizer::from_config(&config));

    tracing::info!("✅ Say something");
    if continuous {
        let count = dictation.run(audio_rx, |text| println!("{}", text)).await?;
        tracing::info!("Dictated {} utterance(s)", count);
    } else if let Some(text) = dictation.next_utterance(&mut audio_rx).await? {
        println!("{}", text);
    }

    Ok(())
}
