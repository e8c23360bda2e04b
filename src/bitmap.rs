//! Source raster handed in by the image loading side.

use crate::{error::Error, pixel::Argb, raster::check_dimensions};

/// Row-major ARGB raster with validated, non-zero dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Argb>,
}

impl Bitmap {
    /// Wrap a decoded pixel buffer.
    ///
    /// # Errors
    /// `InvalidDimensions` if either side is zero, `DimensionsTooLarge` if
    /// the raster header could not describe the image, and
    /// `PixelCountMismatch` if `pixels` does not hold exactly
    /// `width * height` entries.
    pub fn new(width: u32, height: u32, pixels: Vec<Argb>) -> Result<Self, Error> {
        check_dimensions(width, height)?;

        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Bitmap {
            width,
            height,
            pixels,
        })
    }

    /// Build from packed `0xAARRGGBB` words, as returned by platform
    /// `getPixels`-style calls.
    pub fn from_argb(width: u32, height: u32, words: &[u32]) -> Result<Self, Error> {
        Self::new(width, height, words.iter().copied().map(Argb::from).collect())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Argb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Copy out the `width` x `height` rectangle whose top-left corner is
    /// `(x, y)`.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Self, Error> {
        let fits = x
            .checked_add(width)
            .map_or(false, |right| right <= self.width)
            && y.checked_add(height)
                .map_or(false, |bottom| bottom <= self.height);
        if !fits {
            return Err(Error::CropOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }

        let stride = self.width as usize;
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in y..(y + height) {
            let start = row as usize * stride + x as usize;
            pixels.extend_from_slice(&self.pixels[start..start + width as usize]);
        }

        Bitmap::new(width, height, pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> Bitmap {
        let words: Vec<u32> = (0..width * height).map(|i| 0xFF00_0000 | i).collect();
        Bitmap::from_argb(width, height, &words).unwrap()
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Bitmap::new(0, 4, vec![]),
            Err(Error::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            Bitmap::new(4, 0, vec![]),
            Err(Error::InvalidDimensions {
                width: 4,
                height: 0
            })
        );
    }

    #[test]
    fn test_rejects_pixel_count_mismatch() {
        assert_eq!(
            Bitmap::new(2, 2, vec![Argb::WHITE; 3]),
            Err(Error::PixelCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_rejects_oversized_header() {
        // 65536 rows cannot be written to a 16-bit header field
        let err = Bitmap::new(1, 65536, vec![Argb::WHITE; 65536]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionsTooLarge {
                width: 1,
                height: 65536
            }
        );
    }

    #[test]
    fn test_row_byte_width_limit() {
        // 524_280 columns pack into exactly 65535 bytes per row
        let widest = Bitmap::new(524_280, 1, vec![Argb::WHITE; 524_280]).unwrap();
        assert_eq!(widest.width(), 524_280);

        assert_eq!(
            Bitmap::new(524_281, 1, vec![Argb::WHITE; 524_281]),
            Err(Error::DimensionsTooLarge {
                width: 524_281,
                height: 1
            })
        );
    }

    #[test]
    fn test_pixel_lookup() {
        let bitmap = numbered(3, 2);
        assert_eq!(bitmap.pixel(0, 0), Some(Argb::from_u32(0xFF00_0000)));
        assert_eq!(bitmap.pixel(2, 1), Some(Argb::from_u32(0xFF00_0005)));
        assert_eq!(bitmap.pixel(3, 0), None);
        assert_eq!(bitmap.pixel(0, 2), None);
    }

    #[test]
    fn test_crop() {
        let bitmap = numbered(4, 3);
        let cropped = bitmap.crop(1, 1, 2, 2).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (2, 2));
        let words: Vec<u32> = cropped.pixels().iter().map(|p| p.to_u32() & 0xFF).collect();
        assert_eq!(words, vec![5, 6, 9, 10]);
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let bitmap = numbered(4, 3);
        assert!(matches!(
            bitmap.crop(3, 0, 2, 1),
            Err(Error::CropOutOfBounds { .. })
        ));
        assert!(matches!(
            bitmap.crop(0, 0, 4, 0),
            Err(Error::InvalidDimensions { .. })
        ));
    }
}
