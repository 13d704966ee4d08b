//! Binarization of gray rasters
//!
//! Applies a threshold plus polarity decision, producing a two-valued
//! background/foreground raster ready for morphology and labeling.

use crate::maybe_rayon::*;
use crate::{BACKGROUND, FOREGROUND};
use ndarray::Array2;
use partscan_core::raster::Raster;
use partscan_core::{Algorithm, Error, Result};

use super::otsu::OtsuThreshold;

/// Parameters for binarization
#[derive(Debug, Clone, Default)]
pub struct BinarizeParams {
    /// Threshold and polarity, usually from [`otsu_threshold`](super::otsu_threshold)
    pub threshold: OtsuThreshold,
}

/// Binarization algorithm
#[derive(Debug, Clone, Default)]
pub struct Binarize;

impl Algorithm for Binarize {
    type Input = Raster<u8>;
    type Output = Raster<i32>;
    type Params = BinarizeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Binarize"
    }

    fn description(&self) -> &'static str {
        "Threshold a gray raster into background (0) and foreground (1)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        binarize(&input, params.threshold)
    }
}

/// Threshold a gray raster into a two-valued raster.
///
/// A pixel becomes foreground when `pixel <= threshold` and small values
/// are the foreground, or symmetrically `pixel > threshold` otherwise.
/// The output contains exactly the values [`BACKGROUND`] and
/// [`FOREGROUND`]. Rows are processed in parallel.
pub fn binarize(raster: &Raster<u8>, threshold: OtsuThreshold) -> Result<Raster<i32>> {
    let (rows, cols) = raster.shape();
    let cutoff = threshold.threshold;
    let (fg, bg) = if threshold.small_values_are_foreground {
        (FOREGROUND, BACKGROUND)
    } else {
        (BACKGROUND, FOREGROUND)
    };

    let data: Vec<i32> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![BACKGROUND; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let v = unsafe { raster.get_unchecked(row, col) };
                *out = if v <= cutoff { fg } else { bg };
            }
            row_data
        })
        .collect();

    let array =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    Ok(Raster::from_array(array))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binarize_dark_foreground() {
        let mut raster: Raster<u8> = Raster::filled(4, 4, 200);
        raster.set(1, 2, 10).unwrap();

        let threshold = OtsuThreshold {
            threshold: 50,
            small_values_are_foreground: true,
        };
        let binary = binarize(&raster, threshold).unwrap();

        assert_eq!(binary.get(1, 2).unwrap(), FOREGROUND);
        assert_eq!(binary.get(0, 0).unwrap(), BACKGROUND);
        assert_eq!(binary.count_value(FOREGROUND), 1);
    }

    #[test]
    fn test_binarize_bright_foreground() {
        let mut raster: Raster<u8> = Raster::filled(4, 4, 10);
        raster.set(2, 3, 220).unwrap();

        let threshold = OtsuThreshold {
            threshold: 50,
            small_values_are_foreground: false,
        };
        let binary = binarize(&raster, threshold).unwrap();

        assert_eq!(binary.get(2, 3).unwrap(), FOREGROUND);
        assert_eq!(binary.count_value(FOREGROUND), 1);
    }

    #[test]
    fn test_binarize_boundary_is_inclusive() {
        let raster: Raster<u8> = Raster::filled(2, 2, 50);
        let threshold = OtsuThreshold {
            threshold: 50,
            small_values_are_foreground: true,
        };
        let binary = binarize(&raster, threshold).unwrap();
        // pixel == threshold counts as "small"
        assert_eq!(binary.count_value(FOREGROUND), 4);
    }
}
