//! Decode, smooth, resample, and convert to luminance.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::DynamicImage;
use litho_field::ScalarGrid;
use tracing::debug;

use crate::error::{SampleError, SampleResult};

/// Options for turning an image into a luminance grid.
#[derive(Debug, Clone)]
pub struct SampleOptions {
    /// Physical plate width in mm.
    pub desired_width_mm: f64,

    /// Physical distance between adjacent samples in mm.
    pub step_mm: f64,

    /// Gaussian blur sigma applied before resampling. Zero disables
    /// smoothing.
    pub blur_sigma: f32,

    /// Mirror the grid along its width.
    pub mirror_x: bool,

    /// Mirror the grid along its height.
    pub mirror_y: bool,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            desired_width_mm: 100.0,
            step_mm: 0.2,
            blur_sigma: 6.0,
            mirror_x: false,
            mirror_y: false,
        }
    }
}

/// Derive the sample grid size for an image.
///
/// Truncating integer math, deliberately: `pixel_width =
/// desired_width_mm / step_mm` truncated, then `pixel_height =
/// image_height * pixel_width / image_width` in integer arithmetic.
/// Aspect ratio is only approximately preserved.
///
/// # Errors
///
/// - [`SampleError::InvalidSampling`] if width or step is not positive
///   and finite
/// - [`SampleError::GridTooSmall`] if either derived dimension is under 2
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Truncation is deliberate; positivity is checked first.
pub fn target_dimensions(
    image_width: u32,
    image_height: u32,
    options: &SampleOptions,
) -> SampleResult<(u32, u32)> {
    let (width_mm, step_mm) = (options.desired_width_mm, options.step_mm);
    if !width_mm.is_finite() || width_mm <= 0.0 || !step_mm.is_finite() || step_mm <= 0.0 {
        return Err(SampleError::InvalidSampling { width_mm, step_mm });
    }

    let pixel_width = (width_mm / step_mm) as u64;
    let pixel_height = u64::from(image_height) * pixel_width / u64::from(image_width).max(1);
    let (pixel_width, pixel_height) = (
        u32::try_from(pixel_width).unwrap_or(u32::MAX),
        u32::try_from(pixel_height).unwrap_or(u32::MAX),
    );

    if pixel_width < 2 || pixel_height < 2 {
        return Err(SampleError::GridTooSmall {
            width: pixel_width,
            height: pixel_height,
        });
    }
    Ok((pixel_width, pixel_height))
}

/// Load an image file and sample it into a luminance grid.
///
/// # Errors
///
/// Returns [`SampleError::FileNotFound`] or a decode error for the
/// input, or a sampling error from [`target_dimensions`].
pub fn load_luminance<P: AsRef<Path>>(
    path: P,
    options: &SampleOptions,
) -> SampleResult<ScalarGrid> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SampleError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let image = image::open(path)?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "decoded input image"
    );
    luminance_grid(&image, options)
}

/// Sample a decoded image into a luminance grid in `[0, 1]`.
///
/// Applies the blur → resample → luminance pipeline and the mirror
/// flags. Split out from [`load_luminance`] so in-memory images can be
/// sampled without touching the filesystem.
///
/// # Errors
///
/// Returns a sampling error from [`target_dimensions`].
pub fn luminance_grid(image: &DynamicImage, options: &SampleOptions) -> SampleResult<ScalarGrid> {
    let (pixel_width, pixel_height) = target_dimensions(image.width(), image.height(), options)?;

    let smoothed = if options.blur_sigma > 0.0 {
        image.blur(options.blur_sigma)
    } else {
        image.clone()
    };
    let resampled = imageops::resize(&smoothed, pixel_width, pixel_height, FilterType::Triangle);
    debug!(pixel_width, pixel_height, "resampled to step grid");

    let (w, h) = (pixel_width as usize, pixel_height as usize);
    let mut grid = ScalarGrid::new(w, h);
    for (x, y, pixel) in resampled.enumerate_pixels() {
        let [r, g, b, _] = pixel.0;
        let luminance =
            (0.3 * f64::from(r) + 0.59 * f64::from(g) + 0.11 * f64::from(b)) / 256.0;

        let mut i = x as usize;
        let mut j = y as usize;
        if options.mirror_x {
            i = w - 1 - i;
        }
        if options.mirror_y {
            j = h - 1 - j;
        }
        grid.set(i, j, luminance);
    }
    Ok(grid)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::{Rgb, RgbImage};

    fn options(width_mm: f64, step_mm: f64) -> SampleOptions {
        SampleOptions {
            desired_width_mm: width_mm,
            step_mm,
            blur_sigma: 0.0,
            ..SampleOptions::default()
        }
    }

    #[test]
    fn derived_grid_size_truncates() {
        // 100 / 0.2 = 500; height 333 * 500 / 500 = 333
        assert_eq!(
            target_dimensions(500, 333, &options(100.0, 0.2)).unwrap(),
            (500, 333)
        );
        // Non-exact division truncates both dimensions.
        assert_eq!(
            target_dimensions(640, 480, &options(99.9, 0.4)).unwrap(),
            (249, 186)
        );
    }

    #[test]
    fn zero_step_is_rejected() {
        assert!(matches!(
            target_dimensions(640, 480, &options(100.0, 0.0)),
            Err(SampleError::InvalidSampling { .. })
        ));
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        // A sliver image derives a 1-sample height.
        assert!(matches!(
            target_dimensions(4000, 10, &options(10.0, 0.5)),
            Err(SampleError::GridTooSmall { .. })
        ));
    }

    #[test]
    fn luminance_uses_rec601_style_weights() {
        let mut img = RgbImage::new(4, 4);
        for p in img.pixels_mut() {
            *p = Rgb([200, 100, 50]);
        }
        let grid = luminance_grid(&DynamicImage::ImageRgb8(img), &options(2.0, 0.5)).unwrap();

        let expected = (0.3 * 200.0 + 0.59 * 100.0 + 0.11 * 50.0) / 256.0;
        assert_eq!((grid.width(), grid.height()), (4, 4));
        assert_relative_eq!(grid.get(1, 2), expected, max_relative = 1e-6);
    }

    #[test]
    fn mirror_x_flips_columns() {
        let mut img = RgbImage::new(4, 2);
        img.put_pixel(0, 0, Rgb([255, 255, 255]));
        let image = DynamicImage::ImageRgb8(img);

        let plain = luminance_grid(&image, &options(2.0, 0.5)).unwrap();
        let mirrored = luminance_grid(
            &image,
            &SampleOptions {
                mirror_x: true,
                ..options(2.0, 0.5)
            },
        )
        .unwrap();

        for j in 0..2 {
            for i in 0..4 {
                assert_relative_eq!(mirrored.get(i, j), plain.get(3 - i, j));
            }
        }
    }

    #[test]
    fn mirror_y_flips_rows() {
        let mut img = RgbImage::new(2, 4);
        img.put_pixel(1, 3, Rgb([255, 0, 0]));
        let image = DynamicImage::ImageRgb8(img);

        let plain = luminance_grid(&image, &options(1.0, 0.5)).unwrap();
        let mirrored = luminance_grid(
            &image,
            &SampleOptions {
                mirror_y: true,
                ..options(1.0, 0.5)
            },
        )
        .unwrap();

        for j in 0..4 {
            for i in 0..2 {
                assert_relative_eq!(mirrored.get(i, j), plain.get(i, 3 - j));
            }
        }
    }

    #[test]
    fn missing_file_reports_file_not_found() {
        let result = load_luminance("no_such_image_462.png", &SampleOptions::default());
        assert!(matches!(result, Err(SampleError::FileNotFound { .. })));
    }

    #[test]
    fn samples_land_in_unit_interval() {
        let mut img = RgbImage::new(3, 3);
        img.put_pixel(0, 0, Rgb([255, 255, 255]));
        img.put_pixel(2, 2, Rgb([0, 0, 0]));
        let grid = luminance_grid(
            &DynamicImage::ImageRgb8(img),
            &SampleOptions {
                desired_width_mm: 3.0,
                step_mm: 1.0,
                ..SampleOptions::default()
            },
        )
        .unwrap();

        for (_, _, v) in grid.samples() {
            assert!((0.0..=1.0).contains(&v), "luminance {v} out of range");
        }
    }
}
