use clap::Parser;
use get_video_id::config::{self, Config, OutputFormat};
use get_video_id::{extract_video_id, extract_video_id_value, logger, ExtractError, VideoId};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "get-video-id")]
#[command(about = "Extract video ids from YouTube, Vimeo, Vine and VideoPress urls")]
struct Cli {
    /// Urls or embed snippets; read from stdin, one per line, when omitted
    inputs: Vec<String>,

    #[arg(long, help = "Parse every input as a JSON value; only strings are looked up")]
    json_input: bool,

    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    #[arg(long, help = "Pretty-print JSON output")]
    pretty: bool,

    #[arg(long, help = "Print nothing for inputs with no known service")]
    skip_unknown: bool,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "Config file (default: ~/.config/get-video-id/config.yml)")]
    config: Option<PathBuf>,

    #[arg(long, help = "Save the effective settings to the config file")]
    write_config: bool,
}

impl Cli {
    fn merge(&self, mut config: Config) -> Config {
        if let Some(output) = self.output {
            config.output = output;
        }
        config.pretty |= self.pretty;
        config.skip_unknown |= self.skip_unknown;
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let loaded = match &cli.config {
        Some(path) => config::load_config(path),
        None => config::get_config(),
    };
    let config = match loaded {
        Ok(config) => cli.merge(config),
        Err(e) => {
            tracing::error!("Failed to load config {}: {}", config_path.display(), e);
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Effective config: {:?}", config);

    if cli.write_config {
        if let Err(e) = config::save_config(&config, &config_path) {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
        tracing::info!("Saved config to {}", config_path.display());
    }

    let inputs: Box<dyn Iterator<Item = io::Result<String>>> = if cli.inputs.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(cli.inputs.clone().into_iter().map(Ok))
    };

    match run(inputs, cli.json_input, &config, &mut io::stdout().lock()) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Error)]
enum LineError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("Input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print one result per non-blank input. Returns whether any input failed.
fn run<I, W>(inputs: I, json_input: bool, config: &Config, out: &mut W) -> io::Result<bool>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut failed = false;
    for line in inputs {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match extract(&line, json_input) {
            Ok(video) => {
                if video.is_empty() && config.skip_unknown {
                    continue;
                }
                writeln!(out, "{}", render(&video, config))?;
            }
            Err(e) => {
                tracing::warn!("Could not extract id from {:?}: {}", line, e);
                eprintln!("❌ {}", e);
                failed = true;
            }
        }
    }
    Ok(failed)
}

fn extract(line: &str, json_input: bool) -> Result<VideoId, LineError> {
    if !json_input {
        return Ok(extract_video_id(line)?);
    }
    let value: serde_json::Value = serde_json::from_str(line)?;
    Ok(extract_video_id_value(&value)?)
}

fn render(video: &VideoId, config: &Config) -> String {
    match config.output {
        OutputFormat::Json if config.pretty => {
            serde_json::to_string_pretty(video).unwrap_or_default()
        }
        OutputFormat::Json => serde_json::to_string(video).unwrap_or_default(),
        OutputFormat::Text => format!(
            "{}\t{}",
            video.service.map(|s| s.as_str()).unwrap_or_default(),
            video.id.as_deref().unwrap_or_default()
        ),
    }
}
