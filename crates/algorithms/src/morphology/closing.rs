//! Morphological closing (dilation followed by erosion)
//!
//! Fills small gaps and notches in foreground blobs while preserving
//! their gross size. Idempotent for binary images whose blobs stay clear
//! of the raster border.

use partscan_core::raster::Raster;
use partscan_core::{Algorithm, Error, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for morphological closing
#[derive(Debug, Clone, Default)]
pub struct ClosingParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Closing algorithm
#[derive(Debug, Clone, Default)]
pub struct Closing;

impl Algorithm for Closing {
    type Input = Raster<i32>;
    type Output = Raster<i32>;
    type Params = ClosingParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Closing"
    }

    fn description(&self) -> &'static str {
        "Morphological closing (dilation then erosion) to fill small gaps"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        closing(&input, &params.element)
    }
}

/// Perform morphological closing on a two-valued raster.
pub fn closing(raster: &Raster<i32>, element: &StructuringElement) -> Result<Raster<i32>> {
    let dilated = dilate(raster, element)?;
    erode(&dilated, element)
}
