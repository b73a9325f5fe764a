mod analysis;
mod app;
mod channel;
mod color;
mod config;
mod data;
mod error;
mod picker;
mod state;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use app::GuiPicker;
use config::AnalysisConfig;
use picker::{PointPicker, ScriptedPicker};

#[derive(Parser)]
#[command(name = "mixing-gradient")]
#[command(version, about = "Mixing gradients from channel cross-section profiles", long_about = None)]
struct Cli {
    /// Channel directories containing `{distance}mm_{replicate}.hst` profiles
    #[arg(value_name = "CHANNEL", required = true)]
    channels: Vec<PathBuf>,

    /// Settings file (default: <CHANNEL>/mixing.json if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Lattice size (default: longest trimmed replicate)
    #[arg(short, long, value_name = "N")]
    num_points: Option<usize>,

    /// Smooth the median profile with a triangular window
    #[arg(long)]
    smooth: bool,

    /// Triangle half-width for --smooth (default: N / 100)
    #[arg(long, value_name = "N")]
    smooth_degree: Option<usize>,

    /// Pre-recorded clicks (JSON) instead of interactive plots
    #[arg(long, value_name = "FILE")]
    clicks: Option<PathBuf>,

    /// Also write each median profile to <CHANNEL>/profiles/
    #[arg(long)]
    export_profiles: bool,
}

impl Cli {
    /// Channel settings with command-line overrides applied.
    fn config_for(&self, channel: &std::path::Path) -> Result<AnalysisConfig> {
        let mut config = AnalysisConfig::for_channel(channel, self.config.as_deref())?;
        if self.num_points.is_some() {
            config.num_points = self.num_points;
        }
        if self.smooth || self.smooth_degree.is_some() {
            config.smoothing = true;
        }
        if self.smooth_degree.is_some() {
            config.smoothing_degree = self.smooth_degree;
        }
        if self.export_profiles {
            config.export_profiles = true;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut picker: Box<dyn PointPicker> = match &cli.clicks {
        Some(path) => match ScriptedPicker::from_file(path) {
            Ok(p) => Box::new(p),
            Err(e) => {
                log::error!("{e:#}");
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(GuiPicker),
    };

    let mut failed = 0usize;
    for dir in &cli.channels {
        let result = cli
            .config_for(dir)
            .and_then(|config| channel::process_channel(dir, &config, picker.as_mut()));
        match result {
            Ok(records) => println!("{}: {} gradients written", dir.display(), records.len()),
            Err(e) => {
                log::error!("{}: {e:#}", dir.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        eprintln!("{failed} of {} channels failed", cli.channels.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
