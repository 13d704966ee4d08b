//! Intensity histogram

use partscan_core::raster::Raster;

/// Number of intensity bins for 8-bit gray rasters
pub const HISTOGRAM_BINS: usize = 256;

/// Compute the 256-bin intensity histogram of a gray raster in one pass.
pub fn histogram(raster: &Raster<u8>) -> [u32; HISTOGRAM_BINS] {
    let mut bins = [0u32; HISTOGRAM_BINS];
    for &v in raster.data().iter() {
        bins[v as usize] += 1;
    }
    bins
}
