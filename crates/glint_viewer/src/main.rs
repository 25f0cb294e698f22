//! Glint viewer: render a scene and show it in a window.

mod description;
mod display;
mod presets;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glint_renderer::{
    render_with_stats, IntersectionBackend, RenderConfig, DEFAULT_ROWS_PER_BUCKET,
};

use description::SceneDescription;
use presets::Preset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BackendArg {
    /// Floating-point quadratic solver
    Analytic,
    /// Q16.16 fixed-point solver
    FixedPoint,
}

impl From<BackendArg> for IntersectionBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Analytic => IntersectionBackend::Analytic,
            BackendArg::FixedPoint => IntersectionBackend::FixedPoint,
        }
    }
}

/// Render a sphere scene with a Whitted-style ray tracer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image width in pixels
    #[arg(short = 'W', long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = 600)]
    height: u32,

    /// Worker threads (defaults to one per logical CPU)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Rows handed to a worker at a time
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_BUCKET)]
    rows_per_bucket: u32,

    /// Built-in scene to render
    #[arg(short, long, value_enum, default_value_t = Preset::CandyLand)]
    preset: Preset,

    /// JSON scene description (overrides --preset)
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Write the frame to a PNG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not open a window
    #[arg(long)]
    no_window: bool,

    /// Ray-sphere intersection backend
    #[arg(long, value_enum, default_value_t = BackendArg::Analytic)]
    backend: BackendArg,

    /// Print the built-in scenes and exit
    #[arg(long)]
    list_presets: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    if args.list_presets {
        for preset in Preset::value_variants() {
            if let Some(value) = preset.to_possible_value() {
                let help = value.get_help().map(|h| h.to_string()).unwrap_or_default();
                println!("{:<18} {}", value.get_name(), help);
            }
        }
        return Ok(());
    }

    log::info!("Starting Glint");

    let (scene, camera, title) = match &args.scene {
        Some(path) => {
            let (scene, camera) = SceneDescription::load(path)?.build();
            (scene, camera, format!("Glint - {}", path.display()))
        }
        None => {
            log::info!("Using preset {:?}", args.preset);
            (args.preset.build(), args.preset.camera(), format!("Glint - {:?}", args.preset))
        }
    };
    let scene = scene.with_backend(args.backend.into());

    let mut config = RenderConfig::default()
        .with_resolution(args.width, args.height)
        .with_rows_per_bucket(args.rows_per_bucket);
    config.threads = args.threads;

    let (frame, stats) = render_with_stats(&scene, &camera, &config).context("Render failed")?;
    log::info!(
        "Traced {} primary rays on {} threads",
        stats.primary_rays,
        stats.threads
    );

    if let Some(path) = &args.output {
        frame
            .save_png(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    if !args.no_window {
        display::show(&frame, &title)?;
    }

    Ok(())
}
