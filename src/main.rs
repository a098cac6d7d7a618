//! Letterbox CLI - batch image letterboxing
//!
//! Resizes every JPEG, PNG and BMP in `<directory>/raw_images` onto a black
//! canvas of the requested size and writes JPEGs to
//! `<directory>/resized_images`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use console::style;
use tracing::debug;

use letterbox::{BatchReport, BatchRunner, LetterboxError, RunConfig, Settings, SizeSpec};

/// Letterbox - batch image resizer with aspect-preserving padding
#[derive(Parser)]
#[command(
    name = "letterbox",
    version,
    about = "Resize images in a directory and save them as JPG",
    long_about = "Scales every image in <DIRECTORY>/raw_images to fit inside the requested \
                  size, centres it on a black canvas of exactly that size, and saves the \
                  result as <DIRECTORY>/resized_images/<name>.jpg."
)]
struct Cli {
    /// Directory containing the raw_images folder (default: the executable's directory)
    #[arg(short, long, value_name = "PATH")]
    directory: Option<PathBuf>,

    /// Output size, format: widthxheight (e.g. 640x480)
    #[arg(short, long, value_name = "WIDTHxHEIGHT", value_parser = parse_size)]
    size: SizeSpec,

    /// JPEG quality (1-100)
    #[arg(short, long, value_name = "QUALITY", value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,

    /// Settings file (.toml or .yaml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show what would be processed without writing any images
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (errors only, no progress bar)
    #[arg(short = 'Q', long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Parse size string (e.g., "640x480")
fn parse_size(s: &str) -> Result<SizeSpec, String> {
    SizeSpec::parse(s).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path).unwrap_or_else(|e| fail(&e)),
        None => Settings::default(),
    };

    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        settings.log_level.as_str()
    };
    letterbox::init_with_level(log_level);

    match run(&cli, &settings) {
        Ok(report) => {
            debug!(
                "Batch finished: {} outputs, {} skipped, dry run: {}",
                report.outputs.len(),
                report.skipped,
                report.dry_run
            );
        }
        Err(e) => fail(&e),
    }
}

fn run(cli: &Cli, settings: &Settings) -> letterbox::Result<BatchReport> {
    let quality = cli.quality.unwrap_or(settings.quality);
    let config = RunConfig::from_settings(cli.directory.clone(), cli.size, settings)?
        .quality(quality);

    BatchRunner::new(config)
        .dry_run(cli.dry_run)
        .show_progress(!cli.quiet)
        .run()
}

fn fail(error: &LetterboxError) -> ! {
    println!("{}: {}", style("Error").red().bold(), error);
    process::exit(error.exit_code());
}
