//! Binary morphological erosion
//!
//! A pixel stays foreground only if every active mask cell maps to an
//! in-bounds foreground pixel. Out-of-bounds counts as background, so
//! foreground touching the image border erodes away.

use crate::maybe_rayon::*;
use crate::{BACKGROUND, FOREGROUND};
use ndarray::Array2;
use partscan_core::raster::Raster;
use partscan_core::{Algorithm, Error, Result};

use super::element::StructuringElement;

/// Parameters for morphological erosion
#[derive(Debug, Clone, Default)]
pub struct ErodeParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Erosion algorithm
#[derive(Debug, Clone, Default)]
pub struct Erode;

impl Algorithm for Erode {
    type Input = Raster<i32>;
    type Output = Raster<i32>;
    type Params = ErodeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Erode"
    }

    fn description(&self) -> &'static str {
        "Binary erosion (every mask cell must cover in-bounds foreground)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        erode(&input, &params.element)
    }
}

/// Perform binary erosion on a two-valued raster.
///
/// The output pixel is foreground only when all active mask cells map to
/// in-bounds foreground pixels; any out-of-bounds or background neighbor
/// clears it. Rows are processed in parallel.
pub fn erode(raster: &Raster<i32>, element: &StructuringElement) -> Result<Raster<i32>> {
    element.validate()?;

    let (rows, cols) = raster.shape();
    let offsets = element.offsets();

    let data: Vec<i32> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![BACKGROUND; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let r = row as isize;
                let c = col as isize;

                let mut set = true;
                for &(dr, dc) in &offsets {
                    let nr = r + dr;
                    let nc = c + dc;
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                        set = false;
                        break;
                    }
                    if unsafe { raster.get_unchecked(nr as usize, nc as usize) } != FOREGROUND {
                        set = false;
                        break;
                    }
                }

                if set {
                    *out = FOREGROUND;
                }
            }
            row_data
        })
        .collect();

    let array =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    Ok(Raster::from_array(array))
}
