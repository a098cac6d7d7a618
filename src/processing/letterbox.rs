//! Aspect-preserving resize onto a fixed-size black canvas

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};
use tracing::debug;

use crate::config::SizeSpec;
use crate::error::{LetterboxError, Result};

/// Canvas fill colour
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Where the scaled source lands on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Scaled source width
    pub width: u32,
    /// Scaled source height
    pub height: u32,
    /// Left padding
    pub x: u32,
    /// Top padding
    pub y: u32,
}

/// Compute the uniform scale that fits `source` inside `target`, and the
/// centring offsets.
///
/// The scale is `min(W / src_w, H / src_h)`; the scaled size is floored.
/// Evaluated in integer arithmetic so the limiting axis always matches the
/// target exactly. A floored axis of zero is clamped to one pixel.
pub fn fit_within(source: (u32, u32), target: SizeSpec) -> Placement {
    let (src_w, src_h) = (u64::from(source.0.max(1)), u64::from(source.1.max(1)));
    let (dst_w, dst_h) = (u64::from(target.width()), u64::from(target.height()));

    // W / src_w <= H / src_h  <=>  W * src_h <= H * src_w
    let (width, height) = if dst_w * src_h <= dst_h * src_w {
        (dst_w, src_h * dst_w / src_w)
    } else {
        (src_w * dst_h / src_h, dst_h)
    };

    // both values are bounded by the target dimensions, so they fit in u32
    let width = (width as u32).max(1);
    let height = (height as u32).max(1);

    Placement {
        width,
        height,
        x: (target.width() - width) / 2,
        y: (target.height() - height) / 2,
    }
}

/// Letterbox transform for a fixed target size
#[derive(Debug, Clone, Copy)]
pub struct Letterbox {
    size: SizeSpec,
    filter: FilterType,
}

impl Letterbox {
    /// Create a transform using Lanczos3 resampling
    pub fn new(size: SizeSpec) -> Self {
        Self {
            size,
            filter: FilterType::Lanczos3,
        }
    }

    /// Use a different resampling filter
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn size(&self) -> SizeSpec {
        self.size
    }

    /// Scale `image` to fit and centre it on a black RGB canvas of exactly
    /// the target size. Any alpha channel is dropped.
    pub fn apply(&self, image: &DynamicImage) -> Result<RgbImage> {
        if image.width() == 0 || image.height() == 0 {
            return Err(LetterboxError::EmptyImage);
        }

        let source = image.to_rgb8();
        let placement = fit_within(source.dimensions(), self.size);

        debug!(
            "Letterboxing {}x{} -> {}x{} at ({}, {}) on {} canvas",
            source.width(),
            source.height(),
            placement.width,
            placement.height,
            placement.x,
            placement.y,
            self.size
        );

        let scaled = if source.dimensions() == (placement.width, placement.height) {
            source
        } else {
            imageops::resize(&source, placement.width, placement.height, self.filter)
        };

        let mut canvas = RgbImage::from_pixel(self.size.width(), self.size.height(), BACKGROUND);
        imageops::replace(&mut canvas, &scaled, i64::from(placement.x), i64::from(placement.y));

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba, RgbaImage};

    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    fn size(width: u32, height: u32) -> SizeSpec {
        SizeSpec::new(width, height).unwrap()
    }

    fn solid(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, RED))
    }

    fn is_black(pixel: &Rgb<u8>) -> bool {
        *pixel == BACKGROUND
    }

    fn is_reddish(pixel: &Rgb<u8>) -> bool {
        pixel[0] > 200 && pixel[1] < 50 && pixel[2] < 50
    }

    #[test]
    fn test_fit_wide_source_into_square() {
        assert_eq!(
            fit_within((100, 50), size(200, 200)),
            Placement { width: 200, height: 100, x: 0, y: 50 }
        );
    }

    #[test]
    fn test_fit_tall_source_into_landscape() {
        assert_eq!(
            fit_within((300, 600), size(640, 480)),
            Placement { width: 240, height: 480, x: 200, y: 0 }
        );
    }

    #[test]
    fn test_fit_same_aspect_fills_canvas() {
        assert_eq!(
            fit_within((1280, 960), size(640, 480)),
            Placement { width: 640, height: 480, x: 0, y: 0 }
        );
    }

    #[test]
    fn test_fit_floors_and_centres_odd_padding() {
        // scale = min(101/100, 50/100) = 0.5
        let placement = fit_within((100, 100), size(101, 50));
        assert_eq!(placement, Placement { width: 50, height: 50, x: 25, y: 0 });

        // scale = 100/3, so 7 * 100 / 3 = 233.33 floors to 233
        let placement = fit_within((7, 3), size(300, 100));
        assert_eq!(placement, Placement { width: 233, height: 100, x: 33, y: 0 });
    }

    #[test]
    fn test_fit_extreme_aspect_keeps_one_pixel() {
        let placement = fit_within((1000, 1), size(10, 10));
        assert_eq!(placement, Placement { width: 10, height: 1, x: 0, y: 4 });
    }

    #[test]
    fn test_fit_preserves_aspect_within_one_pixel() {
        let target = size(640, 480);
        for (w, h) in [(1920, 1080), (1080, 1920), (333, 777), (4000, 3000), (17, 5)] {
            let p = fit_within((w, h), target);
            assert!(p.width <= 640 && p.height <= 480);
            assert!(p.width == 640 || p.height == 480);

            let expected_h = f64::from(p.width) * f64::from(h) / f64::from(w);
            let expected_w = f64::from(p.height) * f64::from(w) / f64::from(h);
            assert!(
                (expected_h - f64::from(p.height)).abs() <= 1.0
                    || (expected_w - f64::from(p.width)).abs() <= 1.0,
                "{w}x{h} -> {p:?}"
            );
        }
    }

    #[test]
    fn test_apply_pads_top_and_bottom() {
        let canvas = Letterbox::new(size(200, 200)).apply(&solid(100, 50)).unwrap();
        assert_eq!(canvas.dimensions(), (200, 200));

        for x in [0, 100, 199] {
            assert!(is_black(canvas.get_pixel(x, 0)));
            assert!(is_black(canvas.get_pixel(x, 49)));
            assert!(is_reddish(canvas.get_pixel(x, 50)));
            assert!(is_reddish(canvas.get_pixel(x, 100)));
            assert!(is_reddish(canvas.get_pixel(x, 149)));
            assert!(is_black(canvas.get_pixel(x, 150)));
            assert!(is_black(canvas.get_pixel(x, 199)));
        }
    }

    #[test]
    fn test_apply_pads_left_and_right() {
        let canvas = Letterbox::new(size(160, 90)).apply(&solid(50, 100)).unwrap();
        assert_eq!(canvas.dimensions(), (160, 90));

        // scaled to 45x90, centred at x = 57
        assert!(is_black(canvas.get_pixel(56, 45)));
        assert!(is_reddish(canvas.get_pixel(57, 45)));
        assert!(is_reddish(canvas.get_pixel(101, 45)));
        assert!(is_black(canvas.get_pixel(102, 45)));
    }

    #[test]
    fn test_apply_output_is_exact_size() {
        for (src, dst) in [((1, 1), (640, 480)), ((640, 480), (1, 1)), ((31, 97), (64, 64))] {
            let canvas = Letterbox::new(size(dst.0, dst.1))
                .apply(&solid(src.0, src.1))
                .unwrap();
            assert_eq!(canvas.dimensions(), dst);
        }
    }

    #[test]
    fn test_apply_drops_alpha() {
        let transparent: RgbaImage = ImageBuffer::from_pixel(20, 20, Rgba([0, 0, 255, 0]));
        let canvas = Letterbox::new(size(20, 20))
            .apply(&DynamicImage::ImageRgba8(transparent))
            .unwrap();

        assert_eq!(*canvas.get_pixel(10, 10), Rgb([0, 0, 255]));
    }

    #[test]
    fn test_apply_is_deterministic() {
        let source = DynamicImage::ImageRgb8(ImageBuffer::from_fn(37, 23, |x, y| {
            Rgb([(x * 7) as u8, (y * 11) as u8, ((x + y) * 3) as u8])
        }));
        let letterbox = Letterbox::new(size(64, 48));

        assert_eq!(letterbox.apply(&source).unwrap(), letterbox.apply(&source).unwrap());
    }

    #[test]
    fn test_apply_rejects_empty_source_as_decode_failure() {
        let err = Letterbox::new(size(8, 8))
            .apply(&DynamicImage::new_rgb8(0, 0))
            .unwrap_err();

        assert!(matches!(err, LetterboxError::EmptyImage));
        assert_eq!(err.kind(), crate::error::ErrorKind::Decode);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_custom_filter() {
        let letterbox = Letterbox::new(size(8, 8)).with_filter(FilterType::Nearest);
        let canvas = letterbox.apply(&solid(4, 2)).unwrap();
        assert_eq!(*canvas.get_pixel(0, 2), RED);
        assert_eq!(*canvas.get_pixel(0, 1), BACKGROUND);
    }
}
