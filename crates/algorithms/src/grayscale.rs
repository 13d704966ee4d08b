//! RGB to gray intensity conversion
//!
//! Weighted luma conversion (ITU-R BT.601 coefficients) from three 8-bit
//! color bands to a single gray band. The particle pipeline itself
//! consumes gray rasters; this is the entry point for hosts holding
//! color imagery.

use crate::maybe_rayon::*;
use ndarray::Array2;
use partscan_core::raster::Raster;
use partscan_core::{Error, Result};

const LUMA_RED: f64 = 0.299;
const LUMA_GREEN: f64 = 0.587;
const LUMA_BLUE: f64 = 0.114;

/// Convert three RGB bands to a gray intensity raster.
///
/// Each output pixel is the weighted sum `0.299 R + 0.587 G + 0.114 B`,
/// rounded and clamped to 0..=255. All three bands must share the same
/// dimensions.
pub fn grayscale(red: &Raster<u8>, green: &Raster<u8>, blue: &Raster<u8>) -> Result<Raster<u8>> {
    let (rows, cols) = red.shape();
    for band in [green, blue] {
        let (br, bc) = band.shape();
        if (br, bc) != (rows, cols) {
            return Err(Error::SizeMismatch {
                er: rows,
                ec: cols,
                ar: br,
                ac: bc,
            });
        }
    }

    let data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0u8; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let r = unsafe { red.get_unchecked(row, col) } as f64;
                let g = unsafe { green.get_unchecked(row, col) } as f64;
                let b = unsafe { blue.get_unchecked(row, col) } as f64;
                let luma = LUMA_RED * r + LUMA_GREEN * g + LUMA_BLUE * b;
                *out = luma.round().clamp(0.0, 255.0) as u8;
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
    fn test_grayscale_weights() {
        let red = Raster::filled(2, 2, 255u8);
        let green = Raster::filled(2, 2, 0u8);
        let blue = Raster::filled(2, 2, 0u8);

        let gray = grayscale(&red, &green, &blue).unwrap();
        // 0.299 * 255 = 76.245 -> 76
        assert_eq!(gray.get(0, 0).unwrap(), 76);
    }

    #[test]
    fn test_grayscale_white_stays_white() {
        let band = Raster::filled(3, 3, 255u8);
        let gray = grayscale(&band, &band, &band).unwrap();
        assert_eq!(gray.get(1, 1).unwrap(), 255);
    }

    #[test]
    fn test_grayscale_size_mismatch() {
        let red: Raster<u8> = Raster::new(3, 3);
        let green: Raster<u8> = Raster::new(3, 3);
        let blue: Raster<u8> = Raster::new(2, 3);
        assert!(grayscale(&red, &green, &blue).is_err());
    }
}
