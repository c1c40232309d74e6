//! Gesture replay tool: feeds recorded landmark frames through the gesture
//! engine and prints the stabilized gesture events.

use anyhow::{Context, Result};
use clap::Parser;
use hand_gesture_estimation::{
    config::{Config, EXAMPLE_CONFIG},
    engine::{DetectionMode, FrameInput},
};
use log::{info, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON-lines frame log to replay (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Detection mode (hands, face, both)
    #[arg(short, long)]
    mode: Option<String>,

    /// Debounce interval in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Minimum template score (0.0 to 1.0)
    #[arg(long)]
    min_confidence: Option<f64>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// One line of the replay log
#[derive(Deserialize)]
#[serde(untagged)]
enum ReplayLine {
    /// Save the current pose under a new name
    Capture { capture: String },
    /// Landmark model output for one frame
    Frame(Box<FrameInput>),
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Hand Gesture Estimation - replay");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Command line overrides
    if let Some(mode) = &args.mode {
        config.detection.mode = mode.parse::<DetectionMode>()?;
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.stabilizer.debounce_ms = debounce_ms;
    }
    if let Some(min_confidence) = args.min_confidence {
        config.estimator.min_confidence = min_confidence;
    }

    let mut engine = config.build_engine()?;

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            info!("Replaying frames from: {}", path);
            Box::new(BufReader::new(
                File::open(path).with_context(|| format!("Failed to open {path}"))?,
            ))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut frame_count = 0_usize;
    let mut event_count = 0_usize;

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<ReplayLine>(&line) {
            Ok(ReplayLine::Capture { capture }) => match engine.capture_gesture(&capture) {
                Ok(()) => info!("Saved gesture '{}'", capture.trim()),
                Err(e) => warn!("Line {}: {}", line_number + 1, e),
            },
            Ok(ReplayLine::Frame(frame)) => {
                frame_count += 1;
                if let Some(event) = engine.process_frame(&frame) {
                    event_count += 1;
                    writeln!(out, "{}", serde_json::to_string(&event)?)?;
                }
            }
            Err(e) => warn!("Skipping line {}: {}", line_number + 1, e),
        }
    }

    info!("Processed {} frames, emitted {} events", frame_count, event_count);
    Ok(())
}
