//! Reduction of an RGBA pixel buffer to its mean RGB color.

use rgb::{FromSlice, RGB8, RGBA8};
use tracing::trace;
use crate::error::{Error, Result};

/// Number of bytes of one RGBA sample.
pub const RGBA_STRIDE: usize = 4;

/// Returns the mean color of the RGBA samples `pixels`.  The alpha
/// channel is ignored and each channel mean is truncated toward zero.
///
/// Fails with [`Error::InvalidInput`] if `pixels` is empty or its
/// length is not a multiple of 4.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// let pixels = [0, 0, 0, 255,  255, 255, 255, 255];
/// let avg = beer_color_meter::average(&pixels)?;
/// assert_eq!(avg, RGB8::new(127, 127, 127));
/// # Ok::<(), beer_color_meter::Error>(())
/// ```
pub fn average(pixels: &[u8]) -> Result<RGB8> {
    if pixels.is_empty() {
        return Err(Error::invalid_input("empty buffer"));
    }
    if pixels.len() % RGBA_STRIDE != 0 {
        return Err(Error::invalid_input(format!(
            "length {} is not a multiple of {RGBA_STRIDE}", pixels.len())));
    }
    average_rgba(pixels.as_rgba())
}

/// Same as [`average`] for a buffer of `width` × `height` pixels, as
/// handed over by an image decoder.  The dimensions must match the
/// buffer length exactly.
pub fn average_region(pixels: &[u8], width: usize, height: usize)
                      -> Result<RGB8> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_input(format!(
            "empty region {width}×{height}")));
    }
    let expected = width.checked_mul(height)
        .and_then(|n| n.checked_mul(RGBA_STRIDE))
        .ok_or_else(|| Error::invalid_input(format!(
            "region {width}×{height} is too large")))?;
    if expected != pixels.len() {
        return Err(Error::invalid_input(format!(
            "region {width}×{height} needs {expected} bytes, got {}",
            pixels.len())));
    }
    average(pixels)
}

/// Mean color of typed RGBA pixels.  See [`average`].
pub fn average_rgba(pixels: &[RGBA8]) -> Result<RGB8> {
    if pixels.is_empty() {
        return Err(Error::invalid_input("no pixels"));
    }
    // u64 sums overflow only past 2^56 pixels.
    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for p in pixels {
        r += p.r as u64;
        g += p.g as u64;
        b += p.b as u64;
    }
    let n = pixels.len() as u64;
    let avg = RGB8 { r: (r / n) as u8, g: (g / n) as u8, b: (b / n) as u8 };
    trace!(pixels = pixels.len(), ?avg, "averaged pixel buffer");
    Ok(avg)
}
