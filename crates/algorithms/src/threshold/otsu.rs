//! Otsu threshold estimation
//!
//! Exhaustive search for the intensity cutoff maximizing between-class
//! variance, plus a polarity heuristic deciding whether dark or bright
//! pixels form the foreground.

use super::histogram::{histogram, HISTOGRAM_BINS};
use partscan_core::raster::Raster;

/// An estimated binarization threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtsuThreshold {
    /// Intensity cutoff; pixels on the foreground side of it become
    /// foreground during binarization.
    pub threshold: u8,
    /// Whether low intensities are the foreground (dark particles on a
    /// bright background).
    pub small_values_are_foreground: bool,
}

impl Default for OtsuThreshold {
    fn default() -> Self {
        Self {
            threshold: 0,
            small_values_are_foreground: true,
        }
    }
}

/// Estimate the optimal threshold of a gray raster using Otsu's method.
///
/// For each candidate threshold the between-class variance
/// `wB * wF * (meanB - meanF)^2` is evaluated from running cumulative
/// sums; candidates where either class is empty are skipped. Strict
/// comparison keeps the first maximum encountered. If only one class
/// ever has weight (single-bin histogram, empty raster), the threshold
/// stays at 0.
///
/// Foreground polarity is decided from the histogram mass in `[0, 128)`:
/// when at most half the pixels are dark, the dark minority is treated
/// as foreground.
pub fn otsu_threshold(raster: &Raster<u8>) -> OtsuThreshold {
    let bins = histogram(raster);
    let total = raster.len() as f64;

    let mut sum = 0.0;
    for (i, &count) in bins.iter().enumerate() {
        sum += i as f64 * count as f64;
    }

    let mut sum_b = 0.0;
    let mut w_b = 0.0;
    let mut var_max = 0.0;
    let mut threshold = 0u8;

    for (i, &count) in bins.iter().enumerate() {
        w_b += count as f64;
        if w_b == 0.0 {
            continue;
        }
        let w_f = total - w_b;
        if w_f == 0.0 {
            break;
        }

        sum_b += i as f64 * count as f64;
        let mean_b = sum_b / w_b;
        let mean_f = (sum - sum_b) / w_f;

        let var_between = w_b * w_f * (mean_b - mean_f) * (mean_b - mean_f);
        if var_between > var_max {
            var_max = var_between;
            threshold = i as u8;
        }
    }

    let dark_pixels: u32 = bins[..HISTOGRAM_BINS / 2].iter().sum();
    let small_values_are_foreground = (dark_pixels as usize) <= raster.len() / 2;

    OtsuThreshold {
        threshold,
        small_values_are_foreground,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otsu_bimodal() {
        // Half the pixels at 50, half at 200; the best split is right at
        // the lower peak.
        let mut raster: Raster<u8> = Raster::filled(16, 16, 200);
        for row in 0..8 {
            for col in 0..16 {
                raster.set(row, col, 50).unwrap();
            }
        }

        let ot = otsu_threshold(&raster);
        assert_eq!(ot.threshold, 50);
        // Exactly half the pixels are dark, so dark is still foreground
        assert!(ot.small_values_are_foreground);
    }

    #[test]
    fn test_otsu_single_bin() {
        // Only one class ever has weight; threshold stays initialized
        let raster: Raster<u8> = Raster::filled(8, 8, 7);
        let ot = otsu_threshold(&raster);
        assert_eq!(ot.threshold, 0);
    }

    #[test]
    fn test_otsu_empty_raster() {
        let raster: Raster<u8> = Raster::new(0, 0);
        let ot = otsu_threshold(&raster);
        assert_eq!(ot.threshold, 0);
        assert!(ot.small_values_are_foreground);
    }

    #[test]
    fn test_otsu_bright_foreground() {
        // Mostly dark image: bright blobs are the foreground
        let mut raster: Raster<u8> = Raster::filled(16, 16, 30);
        for row in 6..10 {
            for col in 6..10 {
                raster.set(row, col, 220).unwrap();
            }
        }

        let ot = otsu_threshold(&raster);
        assert!(!ot.small_values_are_foreground);
        assert!(ot.threshold >= 30);
        assert!(ot.threshold < 220);
    }
}
