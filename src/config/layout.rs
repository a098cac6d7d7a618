//! Input/output directory resolution

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::config::{Settings, SizeSpec, DEFAULT_QUALITY};
use crate::error::{ErrorContext, LetterboxError, Result};

/// Subdirectory of the base directory holding the source images
pub const INPUT_DIR_NAME: &str = "raw_images";

/// Subdirectory of the base directory receiving the JPEG output
pub const OUTPUT_DIR_NAME: &str = "resized_images";

/// Everything a batch run needs, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub base_dir: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub size: SizeSpec,
    /// JPEG quality (1-100)
    pub quality: u8,
}

impl RunConfig {
    /// Resolve `<base>/raw_images` and `<base>/resized_images`
    pub fn new<P: Into<PathBuf>>(base_dir: P, size: SizeSpec) -> Self {
        let base_dir = base_dir.into();
        Self {
            input_dir: base_dir.join(INPUT_DIR_NAME),
            output_dir: base_dir.join(OUTPUT_DIR_NAME),
            base_dir,
            size,
            quality: DEFAULT_QUALITY,
        }
    }

    /// Resolve directories using the names and quality from `settings`.
    ///
    /// Without an explicit base the directory holding the running
    /// executable is used.
    pub fn from_settings(
        base_dir: Option<PathBuf>,
        size: SizeSpec,
        settings: &Settings,
    ) -> Result<Self> {
        let base_dir = match base_dir {
            Some(dir) => dir,
            None => program_directory()?,
        };

        Ok(Self {
            input_dir: base_dir.join(&settings.input_dir),
            output_dir: base_dir.join(&settings.output_dir),
            base_dir,
            size,
            quality: settings.quality,
        })
    }

    /// Set the JPEG quality
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Create the output directory and any missing parents
    pub fn ensure_output_dir(&self) -> Result<()> {
        debug!("Ensuring output directory: {:?}", self.output_dir);
        fs::create_dir_all(&self.output_dir).with_path(&self.output_dir)
    }
}

/// Directory containing the running executable
pub fn program_directory() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| LetterboxError::config(format!("Executable {exe:?} has no parent directory")))
}

/// Last two components of `path`, joined with `/`, for display
pub fn short_path<P: AsRef<Path>>(path: P) -> String {
    let parts: Vec<_> = path
        .as_ref()
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            // joins to a leading `/`
            Component::RootDir => Some("".into()),
            Component::CurDir | Component::Prefix(_) => None,
        })
        .collect();

    let start = parts.len().saturating_sub(2);
    parts[start..].join("/")
}
