//! Binary morphological dilation
//!
//! A pixel becomes foreground if any mask-aligned neighbor is foreground.
//! Out-of-bounds neighbors never match, so blobs cannot grow past the
//! image border.

use crate::maybe_rayon::*;
use crate::{BACKGROUND, FOREGROUND};
use ndarray::Array2;
use partscan_core::raster::Raster;
use partscan_core::{Algorithm, Error, Result};

use super::element::StructuringElement;

/// Parameters for morphological dilation
#[derive(Debug, Clone, Default)]
pub struct DilateParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Dilation algorithm
#[derive(Debug, Clone, Default)]
pub struct Dilate;

impl Algorithm for Dilate {
    type Input = Raster<i32>;
    type Output = Raster<i32>;
    type Params = DilateParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "Binary dilation (any foreground neighbor under the mask sets the pixel)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        dilate(&input, &params.element)
    }
}

/// Perform binary dilation on a two-valued raster.
///
/// The output pixel is foreground when at least one in-bounds neighbor
/// under an active mask cell is foreground. Rows are processed in
/// parallel; each output row reads only the input raster.
pub fn dilate(raster: &Raster<i32>, element: &StructuringElement) -> Result<Raster<i32>> {
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

                let mut set = false;
                for &(dr, dc) in &offsets {
                    let nr = r + dr;
                    let nc = c + dc;
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                        continue;
                    }
                    if unsafe { raster.get_unchecked(nr as usize, nc as usize) } == FOREGROUND {
                        set = true;
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
