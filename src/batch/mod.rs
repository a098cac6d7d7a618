//! Sequential batch letterboxing of an input directory

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::config::{short_path, RunConfig};
use crate::error::Result;
use crate::processing::{output_path_for, ProcessingEngine};

pub mod scan;

pub use scan::*;

/// Outcome of a completed batch run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Output files, in processing order. For a dry run, the files that
    /// would have been written.
    pub outputs: Vec<PathBuf>,
    /// Input directory entries ignored by the extension filter
    pub skipped: usize,
    pub dry_run: bool,
}

/// Letterboxes every supported image under `RunConfig::input_dir`.
///
/// Files are handled one at a time; the first failure aborts the run and
/// leaves already written outputs in place.
pub struct BatchRunner {
    config: RunConfig,
    engine: ProcessingEngine,
    dry_run: bool,
    show_progress: bool,
}

impl BatchRunner {
    /// Create a runner for a resolved configuration
    pub fn new(config: RunConfig) -> Self {
        let engine = ProcessingEngine::new(config.size).with_quality(config.quality);
        Self {
            config,
            engine,
            dry_run: false,
            show_progress: false,
        }
    }

    /// List what would be processed without decoding or writing images
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Draw a progress bar on stderr while processing
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run the batch, printing the summary to stdout
    pub fn run(&self) -> Result<BatchReport> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Run the batch, printing the summary to `out`
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<BatchReport> {
        let start_time = Instant::now();

        self.config.ensure_output_dir()?;
        self.write_summary(out)?;

        let scan = scan_input_dir(&self.config.input_dir)?;
        info!(
            "Found {} files to process ({} skipped)",
            scan.candidates.len(),
            scan.skipped
        );

        let mut report = BatchReport {
            outputs: Vec::with_capacity(scan.candidates.len()),
            skipped: scan.skipped,
            dry_run: self.dry_run,
        };

        if self.dry_run {
            for file in &scan.candidates {
                let output = output_path_for(file, &self.config.output_dir)?;
                writeln!(out, "  {} -> {}", short_path(file), short_path(&output))?;
                report.outputs.push(output);
            }
            return Ok(report);
        }

        let progress = self.progress_bar(scan.candidates.len() as u64);

        for file in &scan.candidates {
            progress.set_message(short_path(file));

            let result = match self.engine.process_file(file, &self.config.output_dir) {
                Ok(result) => result,
                Err(e) => {
                    progress.abandon();
                    return Err(e);
                }
            };

            debug!(
                "Wrote {:?} in {:.1}ms",
                result.output.path,
                result.processing_time.as_secs_f64() * 1000.0
            );
            report.outputs.push(result.output.path);
            progress.inc(1);
        }

        progress.finish_and_clear();
        info!(
            "Letterboxed {} images in {:.2}s",
            report.outputs.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(report)
    }

    fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Arguments:")?;
        writeln!(out, "  Image file: {}", short_path(&self.config.input_dir))?;
        writeln!(out, "  Image size: {}", self.config.size)?;
        writeln!(out)?;
        writeln!(out, "Output files:")?;
        writeln!(out, "  Resized image: {}", short_path(&self.config.output_dir))?;
        out.flush()
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb
    }
}
