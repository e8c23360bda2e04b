use log::debug;

use crate::{bitmap::Bitmap, error::Error};

/// Printable width of an 80mm receipt head, in dots.
pub const DEFAULT_MAX_WIDTH: u32 = 576;

/// Rows per raster band. Band heights are always a multiple of this.
pub const BAND_UNIT: u32 = 24;

/// Conversion settings.
///
/// # Example
///
/// ```
/// use thermal_raster::{Argb, Bitmap, Config};
///
/// let bitmap = Bitmap::new(16, 60, vec![Argb::BLACK; 16 * 60]).unwrap();
/// let bands = Config::new().dither(true).render_bands(&bitmap).unwrap();
/// assert_eq!(bands.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    dither: bool,
    max_width: u32,
    band_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Threshold conversion, 576 dot wide bands of 24 rows.
    pub fn new() -> Config {
        Config {
            dither: false,
            max_width: DEFAULT_MAX_WIDTH,
            band_height: BAND_UNIT,
        }
    }

    /// Enable error-diffusion dithering instead of the plain threshold.
    pub fn dither(self, flag: bool) -> Self {
        Config {
            dither: flag,
            ..self
        }
    }

    /// Columns past `width` are clipped when slicing into bands.
    pub fn max_width(self, width: u32) -> Self {
        Config {
            max_width: width,
            ..self
        }
    }

    /// Rows per band, rounded down to a multiple of 24 with a minimum of 24.
    pub fn band_height(self, height: u32) -> Self {
        let band_height = if height < BAND_UNIT {
            BAND_UNIT
        } else {
            height - height % BAND_UNIT
        };
        Config {
            band_height,
            ..self
        }
    }

    pub fn is_dither(&self) -> bool {
        self.dither
    }

    pub fn get_max_width(&self) -> u32 {
        self.max_width
    }

    pub fn get_band_height(&self) -> u32 {
        self.band_height
    }

    /// Convert the whole image into a single payload, ignoring band limits.
    pub fn render(&self, bitmap: &Bitmap) -> Vec<u8> {
        crate::render(bitmap, self.dither)
    }

    /// Slice `bitmap` into horizontal bands no wider than `max_width`.
    ///
    /// The last band holds whatever rows remain and may be shorter.
    pub fn bands(&self, bitmap: &Bitmap) -> Result<Vec<Bitmap>, Error> {
        if self.max_width == 0 {
            return Err(Error::InvalidConfig(
                "max width must be at least one dot".to_string(),
            ));
        }

        let width = bitmap.width().min(self.max_width);
        let mut bands = Vec::new();
        let mut y = 0;
        while y < bitmap.height() {
            let rows = self.band_height.min(bitmap.height() - y);
            bands.push(bitmap.crop(0, y, width, rows)?);
            y += rows;
        }

        debug!(
            "Sliced {}x{} into {} bands of {}x{}",
            bitmap.width(),
            bitmap.height(),
            bands.len(),
            width,
            self.band_height
        );
        Ok(bands)
    }

    /// Slice into bands and convert each one on its own.
    ///
    /// Diffusion error does not carry across band borders.
    pub fn render_bands(&self, bitmap: &Bitmap) -> Result<Vec<Vec<u8>>, Error> {
        Ok(self
            .bands(bitmap)?
            .iter()
            .map(|band| crate::render(band, self.dither))
            .collect())
    }
}
