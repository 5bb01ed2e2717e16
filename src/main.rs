use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ppm_raster::{Raster, Transform};
use ppmkit::models::AppConfig;
use ppmkit::services::Session;

#[derive(Parser)]
#[command(name = "ppmkit")]
#[command(about = "Grayscale, black-and-white, compress and dither transforms for P3 PPM images")]
struct Cli {
    /// YAML session configuration (defaults to $PPMKIT_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load images interactively and apply menu commands (default)
    Session,
    /// Transform one image and write it next to the input
    Apply {
        /// Input P3 image
        input: PathBuf,

        /// Transform: grayscale (gs), black-and-white (bw), compress (cmp) or dither (dth)
        transform: Transform,
    },
    /// Print the geometry of an image
    Info {
        /// Input P3 image
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries prompts and results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ppmkit=info,ppm_raster=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var("PPMKIT_CONFIG").ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Apply { input, transform }) => run_apply_command(&input, transform),
        Some(Commands::Info { input }) => run_info_command(&input),
        Some(Commands::Session) | None => run_session(config_path.as_deref()),
    }
}

fn run_session(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path);
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);

    session.load_images()?;
    let report = session.run()?;

    tracing::info!(
        written = report.written.len(),
        failed = report.failed,
        skipped = report.skipped,
        released = report.released,
        "Session closed"
    );
    Ok(())
}

fn run_apply_command(input: &Path, transform: Transform) -> anyhow::Result<()> {
    let raster = Raster::open(input)?;
    let written = raster.transform(transform)?;
    println!("{}", written.display());
    Ok(())
}

fn run_info_command(input: &Path) -> anyhow::Result<()> {
    let raster = Raster::open(input)?;
    println!("{}", input.display());
    println!("  Size:      {}x{}", raster.width(), raster.height());
    println!("  Max value: {}", raster.max_value());
    println!("  Samples:   {}", raster.samples().len());
    Ok(())
}
