//! Gray plane extraction and error-diffusion dithering.
//!
//! The diffusion is a reduced Floyd-Steinberg kernel run in a single
//! left-to-right, top-to-bottom pass:
//! - Right:        3/8
//! - Bottom:       3/8
//! - Bottom-right: 1/4
//!
//! Pixels on the last column or last row only feed the neighbour that
//! exists, and the bottom-right corner drops its error.

use log::trace;

use crate::{bitmap::Bitmap, error::Error};

/// Gray values at or above this are quantized to white.
const THRESHOLD: i32 = 128;

/// Fixed point luminance of every pixel, row-major.
pub fn gray_plane(bitmap: &Bitmap) -> Vec<i32> {
    bitmap.pixels().iter().map(|p| p.luminance()).collect()
}

/// Quantize `plane` in place and return the dark decision of every pixel.
///
/// On return `plane` carries the error-adjusted gray each pixel was
/// quantized from.
///
/// # Errors
/// `InvalidDimensions` if either side is zero, `PixelCountMismatch` if
/// `plane` does not hold exactly `width * height` values.
pub fn diffuse(plane: &mut [i32], width: u32, height: u32) -> Result<Vec<bool>, Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    let expected = width as usize * height as usize;
    if plane.len() != expected {
        return Err(Error::PixelCountMismatch {
            expected,
            actual: plane.len(),
        });
    }

    Ok(diffuse_unchecked(plane, width as usize, height as usize))
}

/// `plane` must hold exactly `width * height` values.
pub(crate) fn diffuse_unchecked(plane: &mut [i32], width: usize, height: usize) -> Vec<bool> {
    let mut dark = vec![false; plane.len()];

    for i in 0..height {
        for j in 0..width {
            let index = i * width + j;
            let gray = plane[index];
            let error = if gray >= THRESHOLD {
                gray - 255
            } else {
                dark[index] = true;
                gray
            };

            let has_right = j + 1 < width;
            let has_below = i + 1 < height;
            match (has_right, has_below) {
                (true, true) => {
                    plane[index + 1] += 3 * error / 8;
                    plane[index + width] += 3 * error / 8;
                    plane[index + width + 1] += error / 4;
                }
                (false, true) => {
                    plane[index + width] += 3 * error / 8;
                }
                (true, false) => {
                    plane[index + 1] += error / 4;
                }
                (false, false) => {}
            }
        }
    }

    trace!("Error diffusion complete for {}x{}", width, height);
    dark
}
