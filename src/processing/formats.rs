//! Input format filtering and JPEG output

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, RgbImage};

use crate::error::{ErrorContext, LetterboxError, Result};

/// Extension given to every output file
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Get supported input extensions
pub fn supported_input_formats() -> &'static [&'static str] {
    &["jpg", "bmp", "png"]
}

/// Check if a file extension is supported for input
pub fn is_supported_input_format(extension: &str) -> bool {
    supported_input_formats()
        .iter()
        .any(|&fmt| fmt.eq_ignore_ascii_case(extension))
}

/// Check whether `path` carries a supported extension (case-insensitive)
pub fn has_supported_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_supported_input_format)
}

/// `<output_dir>/<stem>.jpg` for the given source file
pub fn output_path_for<P: AsRef<Path>>(source: P, output_dir: &Path) -> Result<PathBuf> {
    let source = source.as_ref();
    let stem = source.file_stem().ok_or_else(|| {
        LetterboxError::invalid_argument(format!("Source path {:?} has no file name", source))
    })?;

    let mut output = output_dir.join(stem);
    output.as_mut_os_string().push(".");
    output.as_mut_os_string().push(OUTPUT_EXTENSION);
    Ok(output)
}

/// Encode `canvas` as JPEG at `path`, replacing any existing file.
/// Returns the written size in bytes.
pub fn write_jpeg(canvas: &RgbImage, path: &Path, quality: u8) -> Result<u64> {
    let file = File::create(path).with_path(path)?;
    let mut writer = BufWriter::new(file);

    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode(canvas.as_raw(), canvas.width(), canvas.height(), ColorType::Rgb8)
        .map_err(|e| LetterboxError::encode(path, e))?;

    writer.flush().with_path(path)?;

    let size = std::fs::metadata(path).with_path(path)?.len();
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::TempDir;

    #[test]
    fn test_supported_formats() {
        assert!(is_supported_input_format("jpg"));
        assert!(is_supported_input_format("PNG"));
        assert!(is_supported_input_format("Bmp"));
        assert!(!is_supported_input_format("jpeg"));
        assert!(!is_supported_input_format("gif"));
        assert!(!is_supported_input_format("txt"));
    }

    #[test]
    fn test_has_supported_extension() {
        assert!(has_supported_extension("raw_images/Photo.JPG"));
        assert!(has_supported_extension("a.png"));
        assert!(!has_supported_extension("photo.GIF"));
        assert!(!has_supported_extension("notes.txt"));
        assert!(!has_supported_extension("png"));
        assert!(!has_supported_extension(".png"));
    }

    #[test]
    fn test_output_path_uses_stem() {
        let out = Path::new("/base/resized_images");
        assert_eq!(
            output_path_for("/base/raw_images/a.png", out).unwrap(),
            PathBuf::from("/base/resized_images/a.jpg")
        );
        assert_eq!(
            output_path_for("holiday.2024.BMP", out).unwrap(),
            PathBuf::from("/base/resized_images/holiday.2024.jpg")
        );
    }

    #[test]
    fn test_write_jpeg() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.jpg");
        let canvas = RgbImage::from_pixel(32, 16, Rgb([10, 20, 30]));

        let size = write_jpeg(&canvas, &path, 75).unwrap();
        assert!(size > 0);

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 16));
        assert_eq!(image::ImageFormat::from_path(&path).unwrap(), image::ImageFormat::Jpeg);
    }

    #[test]
    fn test_write_jpeg_into_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing/out.jpg");
        let canvas = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));

        let err = write_jpeg(&canvas, &path, 75).unwrap_err();
        assert!(matches!(err, LetterboxError::Filesystem { .. }));
    }
}
