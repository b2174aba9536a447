//! RGB to sepia tone conversion.
//!
//! Each output channel is an independent weighted sum of the source
//! channels, truncated toward zero and clamped to a 255 ceiling. The
//! sums are non-negative, so no floor clamp is required.

/// Converts interleaved RGB bytes to sepia-mapped RGB bytes.
///
/// `rgb` must hold exactly `pixel_count * 3` bytes; that is the caller's
/// contract, not a runtime error path. Output channel order stays R,G,B.
pub fn to_sepia(rgb: &[u8], pixel_count: usize) -> Vec<u8> {
    debug_assert_eq!(rgb.len(), pixel_count * 3);

    rgb.chunks_exact(3)
        .flat_map(|pixel| {
            let r = f64::from(pixel[0]);
            let g = f64::from(pixel[1]);
            let b = f64::from(pixel[2]);

            [
                (0.393 * r + 0.769 * g + 0.189 * b).min(255.0) as u8,
                (0.349 * r + 0.686 * g + 0.168 * b).min(255.0) as u8,
                (0.272 * r + 0.534 * g + 0.131 * b).min(255.0) as u8,
            ]
        })
        .collect()
}
