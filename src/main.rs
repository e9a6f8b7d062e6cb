//! Gesture control application for replaying recorded landmark streams.

use anyhow::Result;
use clap::Parser;
use hand_gesture_control::app::{AppConfig, ControlMode, GestureApp};
use hand_gesture_control::dispatch::LoggingSink;
use hand_gesture_control::source::JsonlSource;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recorded landmark stream (one JSON frame per line)
    #[arg(short, long)]
    frames: String,

    /// Control mode (system, presentation)
    #[arg(short, long, default_value = "system")]
    mode: String,

    /// Number of slides for presentation mode
    #[arg(short, long, default_value = "0")]
    slides: usize,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Hand Gesture Control");

    // Load configuration if provided
    let pipeline = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match hand_gesture_control::config::Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                hand_gesture_control::config::Config::default()
            }
        }
    } else {
        hand_gesture_control::config::Config::default()
    };

    let mode = match args.mode.as_str() {
        "presentation" => ControlMode::Presentation,
        _ => ControlMode::System,
    };

    // Build and run the application
    let mut app = GestureApp::new(AppConfig {
        mode,
        pipeline,
        slide_count: args.slides,
    })?;

    let source = JsonlSource::open(&args.frames)?;
    app.start_session(Box::new(source), Box::new(LoggingSink))?;
    app.run()?;

    if mode == ControlMode::Presentation {
        info!(
            "replay finished on slide {} / {}",
            app.deck().current() + 1,
            app.deck().count()
        );
    }

    Ok(())
}
