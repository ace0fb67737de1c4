//! sidewalk - prepare images for the sidewalk printer
//!
//! Loads an image, scales it to the print width and converts it to CMYK
//! through an ICC press profile.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "sidewalk")]
#[command(author, version, about = "RGB to CMYK conversion for the sidewalk printer")]
#[command(long_about = "
Converts images to CMYK through an ICC press profile, sized for the printer.

Examples:
  sidewalk convert photo.jpg --profile USWebCoatedSWOP.icc
  sidewalk convert photo.png --config sidewalk.yaml -o photo_cmyk.tiff
  sidewalk -v convert photo.png --profile press.icc --parallel --dpi 8
  sidewalk info USWebCoatedSWOP.icc
  sidewalk save photo.jpg photo_copy png
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv per-pixel trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to CMYK
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Show ICC profile information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Re-save an image as <filename>.<format>
    Save(SaveArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Input image (PNG, JPEG, TIFF)
    input: PathBuf,

    /// CMYK ICC profile (overrides the config file)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Convert rows in parallel
    #[arg(long)]
    parallel: bool,

    /// Keep the source size instead of scaling to print width
    #[arg(long)]
    no_resize: bool,

    /// Printable width in inches
    #[arg(long)]
    width_inches: Option<u32>,

    /// Printer dots per inch
    #[arg(long)]
    dpi: Option<u32>,

    /// Resampling filter: nearest, bilinear, bicubic, lanczos3
    #[arg(short, long, default_value = "bicubic")]
    filter: String,

    /// Write the result as a CMYK TIFF
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct InfoArgs {
    /// ICC profile
    profile: PathBuf,
}

#[derive(Args)]
struct SaveArgs {
    /// Input image
    input: PathBuf,

    /// Output name without extension
    filename: String,

    /// Format token (png, jpg, tiff)
    format: String,
}

/// Installs the fmt subscriber; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose > 1)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args),
        Commands::Save(args) => commands::save::run(args),
    }
}
