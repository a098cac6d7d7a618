//! Letterbox - batch image letterboxing
//!
//! Scales every image in `<base>/raw_images` to fit a fixed canvas while
//! preserving its aspect ratio, pads the remainder with black, and writes
//! the result as `<base>/resized_images/<stem>.jpg`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use letterbox::{BatchRunner, RunConfig, SizeSpec};
//!
//! let size: SizeSpec = "640x480".parse()?;
//! let config = RunConfig::new("/srv/assets", size);
//!
//! let report = BatchRunner::new(config).run()?;
//! println!("Wrote {} thumbnails", report.outputs.len());
//! # Ok::<(), letterbox::LetterboxError>(())
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod config;
pub mod error;
pub mod processing;

// Re-export commonly used types
pub use batch::{BatchReport, BatchRunner};
pub use config::{RunConfig, Settings, SizeSpec};
pub use error::{ErrorKind, LetterboxError, Result};
pub use processing::{Letterbox, ProcessingEngine};

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging at the default `warn` level
pub fn init() {
    init_with_level("warn");
}

/// Initialize logging to stderr.
///
/// `RUST_LOG`, when set, takes precedence over `level`. Calling this more
/// than once leaves the first subscriber in place.
pub fn init_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        info!("Letterbox v{} initialized", VERSION);
    }
}
