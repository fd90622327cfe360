//! Shared command-line surface for the per-format entry points.

use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::path::PathBuf;
use tts_client::{BackendKind, Language, Synthesizer, VoiceConfig};

use crate::config::Write2AudioConfig;
use crate::extract::DocumentKind;
use crate::pipeline::{self, PipelineOptions};

/// Command-line arguments common to every document-type entry point.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// File to be read
    pub input: PathBuf,

    /// Language used by the TTS backend (it, en)
    #[arg(value_parser = parse_language)]
    pub language: Option<Language>,

    /// Output file path (default: <input-stem>.m4b next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TTS backend to use (google, espeak, say; default: platform pick)
    #[arg(long)]
    pub backend: Option<String>,

    /// Backend-specific voice name
    #[arg(long)]
    pub voice: Option<String>,

    /// DEBUG mode
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse()
}

/// Entry point shared by the four binaries.
pub async fn run_entry_point(kind: DocumentKind) -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if !args.input.exists() {
        error!("file to read {} does not exist", args.input.display());
        std::process::exit(1);
    }

    let config = Write2AudioConfig::load().context("Failed to load configuration")?;

    let language = match args.language {
        Some(language) => language,
        None => match &config.language {
            Some(code) => code.parse().map_err(anyhow::Error::msg)?,
            None => Language::Italian,
        },
    };

    let backend = match args.backend.as_deref().or(config.backend.as_deref()) {
        Some(name) => BackendKind::from_str(name)?,
        None => BackendKind::default_for_platform(),
    };

    let mut voice = VoiceConfig::new(language);
    if let Some(name) = args.voice.clone().or_else(|| config.voice.clone()) {
        voice = voice.with_voice(name);
    }

    let synth = Synthesizer::new(backend, voice)?;
    eprintln!("Backend: {}", synth.backend_name());

    let output_path = args.output.clone().unwrap_or_else(|| {
        let stem = args.input.file_stem().unwrap_or_default();
        args.input
            .with_file_name(format!("{}.m4b", stem.to_string_lossy()))
    });

    let opts = PipelineOptions {
        language,
        bitrate: config.bitrate.clone(),
        chunk_chars: config.chunk_chars,
    };

    pipeline::run(&args.input, kind, &synth, &output_path, &opts).await
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
