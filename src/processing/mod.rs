//! Core image processing functionality

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use image::io::Reader as ImageReader;
use image::DynamicImage;
use tracing::debug;

use crate::config::{SizeSpec, DEFAULT_QUALITY};
use crate::error::{LetterboxError, Result};

pub mod formats;
pub mod letterbox;

pub use formats::*;
pub use letterbox::*;

/// Decodes, letterboxes and re-encodes single files
pub struct ProcessingEngine {
    letterbox: Letterbox,
    quality: u8,
}

impl ProcessingEngine {
    /// Create a new processing engine for the given canvas size
    pub fn new(size: SizeSpec) -> Self {
        Self {
            letterbox: Letterbox::new(size),
            quality: DEFAULT_QUALITY,
        }
    }

    /// Set the JPEG quality
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Replace the transform, e.g. to change the resampling filter
    pub fn with_letterbox(mut self, letterbox: Letterbox) -> Self {
        self.letterbox = letterbox;
        self
    }

    pub fn size(&self) -> SizeSpec {
        self.letterbox.size()
    }

    /// Letterbox `input_path` and write it as `<output_dir>/<stem>.jpg`
    pub fn process_file<P: AsRef<Path>>(
        &self,
        input_path: P,
        output_dir: &Path,
    ) -> Result<ProcessingResult> {
        let start_time = Instant::now();
        let input_path = input_path.as_ref();
        let output_path = output_path_for(input_path, output_dir)?;

        debug!("Processing file: {:?} -> {:?}", input_path, output_path);

        let image = load_image(input_path)?;
        let original = ImageInfo {
            path: input_path.to_path_buf(),
            width: image.width(),
            height: image.height(),
        };

        let canvas = self.letterbox.apply(&image)?;
        drop(image);

        let file_size = write_jpeg(&canvas, &output_path, self.quality)?;

        debug!("Saved image: {}x{} ({} bytes)", canvas.width(), canvas.height(), file_size);

        Ok(ProcessingResult {
            original,
            output: ImageInfo {
                path: output_path,
                width: canvas.width(),
                height: canvas.height(),
            },
            output_file_size: file_size,
            processing_time: start_time.elapsed(),
        })
    }
}

/// Open and decode an image, sniffing the format from its contents
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    debug!("Loading image: {:?}", path);

    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| LetterboxError::decode(path, image::ImageError::IoError(e)))?;

    reader.decode().map_err(|e| LetterboxError::decode(path, e))
}

/// Information about an image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Result of processing an image
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    pub original: ImageInfo,
    pub output: ImageInfo,
    pub output_file_size: u64,
    pub processing_time: Duration,
}
