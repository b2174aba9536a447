//! RGB to greyscale conversion.
//!
//! Uses the BT.601 luminance formula `Y = 0.299R + 0.587G + 0.114B`,
//! truncated toward zero into a byte. The weights sum to at most one,
//! so the result never reaches 255 and needs no upper clamp.

/// Converts interleaved RGB bytes to one luma byte per pixel.
///
/// `rgb` must hold exactly `pixel_count * 3` bytes; that is the caller's
/// contract, not a runtime error path.
pub fn to_greyscale(rgb: &[u8], pixel_count: usize) -> Vec<u8> {
    debug_assert_eq!(rgb.len(), pixel_count * 3);

    rgb.chunks_exact(3)
        .map(|pixel| {
            let luma = 0.299 * f64::from(pixel[0])
                + 0.587 * f64::from(pixel[1])
                + 0.114 * f64::from(pixel[2]);
            luma as u8
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_maps_to_zero() {
        assert_eq!(to_greyscale(&[0, 0, 0], 1), vec![0]);
    }

    #[test]
    fn white_truncates_to_254() {
        assert_eq!(to_greyscale(&[255, 255, 255], 1), vec![254]);
    }

    #[test]
    fn known_pixels() {
        // 0.299*10 + 0.587*20 + 0.114*30 = 18.15
        // 0.299*200 + 0.587*100 + 0.114*50 = 124.2
        let out = to_greyscale(&[10, 20, 30, 200, 100, 50], 2);
        assert_eq!(out, vec![18, 124]);
    }

    #[test]
    fn single_channel_weights() {
        assert_eq!(to_greyscale(&[255, 0, 0], 1), vec![76]); // 76.245
        assert_eq!(to_greyscale(&[0, 255, 0], 1), vec![149]); // 149.685
        assert_eq!(to_greyscale(&[0, 0, 255], 1), vec![29]); // 29.07
    }

    #[test]
    fn output_length_is_pixel_count() {
        let rgb = vec![7u8; 12 * 3];
        assert_eq!(to_greyscale(&rgb, 12).len(), 12);
    }
}
