//! Packing of bilevel decisions into the raster payload.
//!
//! Layout:
//!
//! ```text
//! [bw lo][bw hi][h lo][h hi][row 0: bw bytes]...[row h-1: bw bytes]
//! ```
//!
//! `bw = ceil(width / 8)`. Within a row, column `c` lands in byte `c / 8`
//! at bit `7 - c % 8`, so the leftmost pixel is the most significant bit.
//! A set bit prints a dark dot. Padding bits past the last column stay 0.

use crate::{error::Error, Matrix};

/// Size of the little-endian `(bw, height)` header.
pub const HEADER_LEN: usize = 4;

/// Number of bytes one row of `width` pixels occupies.
pub fn row_bytes(width: u32) -> u32 {
    width / 8 + u32::from(width % 8 != 0)
}

/// Total payload size for a `width` x `height` image, header included.
pub fn payload_len(width: u32, height: u32) -> usize {
    HEADER_LEN + row_bytes(width) as usize * height as usize
}

/// Reject dimensions the `(bw, height)` header cannot describe.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    if row_bytes(width) > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(Error::DimensionsTooLarge { width, height });
    }
    Ok(())
}

/// Encode the `(bw, height)` header for a `width` x `height` image.
pub fn header(width: u32, height: u32) -> Result<[u8; HEADER_LEN], Error> {
    check_dimensions(width, height)?;
    Ok(encode_header(width, height))
}

fn encode_header(width: u32, height: u32) -> [u8; HEADER_LEN] {
    let bw = (row_bytes(width) as u16).to_le_bytes();
    let rows = (height as u16).to_le_bytes();
    [bw[0], bw[1], rows[0], rows[1]]
}

/// Pack one dark decision per pixel, row-major, into a full payload.
///
/// # Errors
/// The [`header`] errors, or `PixelCountMismatch` if `dark` does not yield
/// exactly `width * height` decisions.
pub fn pack<I>(width: u32, height: u32, dark: I) -> Result<Vec<u8>, Error>
where
    I: IntoIterator<Item = bool>,
{
    check_dimensions(width, height)?;

    let expected = width as usize * height as usize;
    let dark: Vec<bool> = dark.into_iter().collect();
    if dark.len() != expected {
        return Err(Error::PixelCountMismatch {
            expected,
            actual: dark.len(),
        });
    }

    Ok(pack_unchecked(width, height, dark))
}

/// `width` and `height` must pass `check_dimensions` and `dark` must yield
/// exactly `width * height` items.
pub(crate) fn pack_unchecked<I>(width: u32, height: u32, dark: I) -> Vec<u8>
where
    I: IntoIterator<Item = bool>,
{
    let bw = row_bytes(width) as usize;
    let mut buf = vec![0x00; payload_len(width, height)];
    buf[..HEADER_LEN].copy_from_slice(&encode_header(width, height));

    let width = width as usize;
    for (index, is_dark) in dark.into_iter().enumerate() {
        if !is_dark {
            continue;
        }
        let (row, col) = (index / width, index % width);
        buf[HEADER_LEN + row * bw + col / 8] |= 0x80 >> (col % 8);
    }

    buf
}

/// Split the row data of a payload into one `Vec` per row.
///
/// Returns `None` if the buffer is shorter than its header, or the row data
/// does not match the dimensions the header announces.
pub fn to_matrix(payload: &[u8]) -> Option<Matrix> {
    if payload.len() < HEADER_LEN {
        return None;
    }
    let bw = u16::from_le_bytes([payload[0], payload[1]]) as usize;
    let height = u16::from_le_bytes([payload[2], payload[3]]) as usize;
    let rows = &payload[HEADER_LEN..];
    if bw == 0 || rows.len() != bw * height {
        return None;
    }

    Some(rows.chunks(bw).map(<[u8]>::to_vec).collect())
}
