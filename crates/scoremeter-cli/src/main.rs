//! Scoremeter CLI - validate meter configs, render frames, inspect the reveal.

use clap::{Args, Parser, Subcommand, ValueEnum};
use scoremeter::prelude::*;
use scoremeter::widgets::{end_hue_degrees, RevealSample, MAX_SAMPLE_FPS};
use scoremeter::BoxStyle;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "scoremeter")]
#[command(about = "Render and inspect vertical score meters")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a meter config file
    Check {
        /// Path to TOML config
        config: PathBuf,
    },

    /// Render one frame of the meter as draw commands
    Render {
        #[command(flatten)]
        meter: MeterArgs,

        /// Reveal progress from 0 (covered) to 1 (revealed)
        #[arg(short, long, default_value_t = 1.0)]
        progress: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print mask offsets over the whole reveal
    Timeline {
        #[command(flatten)]
        meter: MeterArgs,

        /// Samples per second
        #[arg(long, default_value_t = 60)]
        fps: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Meter inputs shared by `render` and `timeline`.
#[derive(Args)]
struct MeterArgs {
    /// TOML file with meter settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Correct responses
    #[arg(long)]
    correct: Option<u32>,

    /// Total questions
    #[arg(long)]
    questions: Option<u32>,

    /// Viewport width
    #[arg(long, default_value_t = 400.0)]
    width: f32,

    /// Viewport height
    #[arg(long, default_value_t = 600.0)]
    height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Meter(#[from] MeterError),

    #[error("viewport must be finite and non-negative, got {width}x{height}")]
    Viewport { width: f32, height: f32 },

    #[error("progress must be a finite number, got {0}")]
    Progress(f64),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match run(cli.command, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, out: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Commands::Check { config } => check_config(&config, out),
        Commands::Render {
            meter,
            progress,
            format,
        } => render(&meter, progress, format, out),
        Commands::Timeline { meter, fps, format } => timeline(&meter, fps, format, out),
    }
}

impl MeterArgs {
    fn settings(&self) -> Result<MeterSettings, CliError> {
        let mut settings = match &self.config {
            Some(path) => load_settings(path)?,
            None => MeterSettings::default(),
        };
        if let Some(correct) = self.correct {
            settings.correct_responses = correct;
        }
        if let Some(questions) = self.questions {
            settings.question_count = questions;
        }
        Ok(settings)
    }

    fn meter_config(&self) -> Result<MeterConfig, CliError> {
        Ok(self.settings()?.build()?)
    }

    fn viewport(&self) -> Result<Rect, CliError> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(Rect::new(0.0, 0.0, self.width, self.height))
        } else {
            Err(CliError::Viewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

fn load_settings(path: &Path) -> Result<MeterSettings, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded meter settings from {}", path.display());
    parse_settings(&content).map_err(|source| CliError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_settings(content: &str) -> Result<MeterSettings, toml::de::Error> {
    toml::from_str(content)
}

fn check_config(path: &Path, out: &mut dyn Write) -> Result<(), CliError> {
    let config = load_settings(path)?.build()?;
    let fraction = compute_fraction(&config);

    writeln!(out, "Config valid: {}", path.display())?;
    writeln!(
        out,
        "  Score: {} of {}",
        config.correct_responses(),
        config.question_count()
    )?;
    writeln!(out, "  Fraction: {fraction:.3}")?;
    writeln!(out, "  End hue: {:.1}°", end_hue_degrees(fraction))?;
    writeln!(out, "  End color: {}", compute_end_color(fraction).to_hex())?;
    Ok(())
}

fn render(
    args: &MeterArgs,
    progress: f64,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !progress.is_finite() {
        return Err(CliError::Progress(progress));
    }
    let config = args.meter_config()?;
    let commands = render_frame(&config, args.viewport()?, progress);
    log::debug!("rendered {} draw commands at progress {progress}", commands.len());

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &commands)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for command in &commands {
                writeln!(out, "{}", describe(command))?;
            }
        }
    }
    Ok(())
}

fn timeline(
    args: &MeterArgs,
    fps: u32,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if fps > MAX_SAMPLE_FPS {
        log::warn!("sampling at {MAX_SAMPLE_FPS} fps instead of {fps}");
    }
    let config = args.meter_config()?;
    let layout = compute_layout(&config, args.viewport()?.height);
    let samples = RevealTimeline::new(layout.track_height).sample(fps);

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &samples)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for RevealSample { time, offset } in samples {
                writeln!(out, "{time:>6.3}s {offset:>9.2}")?;
            }
        }
    }
    Ok(())
}

fn describe(command: &DrawCommand) -> String {
    let bounds = command.bounds();
    let rect = format!(
        "x={:.1} y={:.1} w={:.1} h={:.1}",
        bounds.x, bounds.y, bounds.width, bounds.height
    );

    match command {
        DrawCommand::Rect {
            style: BoxStyle { fill, stroke },
            ..
        } => {
            let mut line = format!("rect     {rect}");
            if let Some(fill) = fill {
                line.push_str(&format!(" fill={}", fill.to_hex()));
            }
            if let Some(stroke) = stroke {
                line.push_str(&format!(
                    " stroke={} width={}",
                    stroke.color.to_hex(),
                    stroke.width
                ));
            }
            line
        }
        DrawCommand::Gradient { gradient, .. } => format!(
            "gradient {rect} {} -> {}",
            gradient.start.to_hex(),
            gradient.end.to_hex()
        ),
    }
}
