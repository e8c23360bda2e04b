//! Thermal printer raster conversion
//!
//! This crate turns a decoded ARGB bitmap into the 1-bit payload thermal
//! receipt printers take for their raster image command: a four byte
//! `(row bytes, rows)` header followed by MSB-first packed rows.
//!
//! Two conversion paths are available. Without dithering each pixel is
//! thresholded on its weighted gray value. With dithering a fixed point gray
//! plane goes through error diffusion first, which keeps photos readable.
//!
//! Fully transparent pixels always print as white background.
//!
//! # Example
//!
//! ```rust
//! use thermal_raster::{render, Argb, Bitmap};
//!
//! let bitmap = Bitmap::new(1, 1, vec![Argb::BLACK]).unwrap();
//! assert_eq!(render(&bitmap, false), vec![1, 0, 1, 0, 0x80]);
//! ```

mod bitmap;
mod config;
mod dither;
mod error;
mod pixel;
mod raster;

use log::debug;

pub use crate::{
    bitmap::Bitmap,
    config::{Config, BAND_UNIT, DEFAULT_MAX_WIDTH},
    dither::{diffuse, gray_plane},
    error::Error,
    pixel::{Argb, DARK_THRESHOLD},
    raster::{header, pack, payload_len, row_bytes, to_matrix, HEADER_LEN},
};

/// Type alias for 1-bit bitmap rows.
///
/// Each inner `Vec<u8>` is one pixel row, 8 pixels per byte with the
/// leftmost pixel in the most significant bit.
pub type Matrix = Vec<Vec<u8>>;

/// Convert `bitmap` into a raster payload.
///
/// The result is always `4 + height * ceil(width / 8)` bytes long. The same
/// input and flag always produce the same bytes.
pub fn render(bitmap: &Bitmap, dither: bool) -> Vec<u8> {
    let (width, height) = (bitmap.width(), bitmap.height());
    debug!("Rendering {}x{} raster, dither: {}", width, height, dither);

    if dither {
        let mut plane = gray_plane(bitmap);
        let dark = crate::dither::diffuse_unchecked(&mut plane, width as usize, height as usize);
        crate::raster::pack_unchecked(width, height, dark)
    } else {
        let dark = bitmap.pixels().iter().map(|p| p.is_dark());
        crate::raster::pack_unchecked(width, height, dark)
    }
}

/// Validate packed `0xAARRGGBB` words and convert them in one step.
///
/// # Errors
/// Any of the [`Bitmap::new`] precondition errors.
pub fn render_argb(
    width: u32,
    height: u32,
    words: &[u32],
    dither: bool,
) -> Result<Vec<u8>, Error> {
    let bitmap = Bitmap::from_argb(width, height, words)?;
    Ok(render(&bitmap, dither))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, pixel: Argb) -> Bitmap {
        Bitmap::new(width, height, vec![pixel; (width * height) as usize]).unwrap()
    }

    #[test]
    fn test_single_pixel() {
        let gray = uniform(1, 1, Argb::new(255, 150, 150, 150));
        assert_eq!(render(&gray, false), vec![1, 0, 1, 0, 0x80]);
        // 150 >= 128 quantizes to white when dithering
        assert_eq!(render(&gray, true), vec![1, 0, 1, 0, 0x00]);
    }

    #[test]
    fn test_black_keeps_padding_clear() {
        let out = render(&uniform(10, 3, Argb::BLACK), false);
        assert_eq!(out.len(), 4 + 2 * 3);
        assert_eq!(&out[4..], &[0xFF, 0xC0, 0xFF, 0xC0, 0xFF, 0xC0]);
    }

    #[test]
    fn test_white_is_empty() {
        for &dither in &[false, true] {
            let out = render(&uniform(13, 5, Argb::WHITE), dither);
            assert!(out[4..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_paths_agree_on_extremes() {
        for &pixel in &[Argb::WHITE, Argb::BLACK, Argb::new(0, 12, 34, 56)] {
            let bitmap = uniform(11, 4, pixel);
            assert_eq!(render(&bitmap, false), render(&bitmap, true));
        }
    }

    #[test]
    fn test_dither_2x2() {
        let words = [0xFF64_6464, 0xFFC8_C8C8, 0xFF32_3232, 0xFF7F_7F7F];
        let out = render_argb(2, 2, &words, true).unwrap();
        assert_eq!(out, vec![1, 0, 2, 0, 0x80, 0x80]);
    }

    #[test]
    fn test_paths_diverge_on_mid_gray() {
        let bitmap = uniform(8, 8, Argb::new(255, 150, 150, 150));
        let plain = render(&bitmap, false);
        let dithered = render(&bitmap, true);
        assert!(plain[4..].iter().all(|&b| b == 0xFF));
        assert_ne!(plain, dithered);
    }

    #[test]
    fn test_render_argb_rejects_bad_input() {
        assert_eq!(
            render_argb(0, 1, &[], false),
            Err(Error::InvalidDimensions {
                width: 0,
                height: 1
            })
        );
        assert_eq!(
            render_argb(2, 1, &[0xFF00_0000], true),
            Err(Error::PixelCountMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
