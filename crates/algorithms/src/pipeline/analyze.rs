//! Pipeline orchestration

use crate::morphology::{closing, StructuringElement};
use crate::regions::{fill_holes, label_components};
use crate::shape::{circularity, region_moments, region_perimeter, PERIMETER_CORRECTION};
use crate::threshold::{binarize, otsu_threshold};
use crate::{FIRST_LABEL, FOREGROUND};
use partscan_core::raster::{BoundingBox, Raster};
use partscan_core::{Algorithm, Error, Result};
use tracing::debug;

use super::visualize::false_color;

/// One connected foreground region and its shape descriptors.
///
/// Created once per pipeline run and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Label carried by the region's pixels in the labeled raster (>= 2)
    pub label: i32,
    /// Extent of the region
    pub bounding_box: BoundingBox,
    /// Pixel count
    pub area: usize,
    /// Center of mass as (x, y)
    pub centroid: (f64, f64),
    /// Major axis angle in radians, in (-pi/2, pi/2]
    pub orientation: f64,
    /// Elongation measure, 0 = circle
    pub eccentricity: f64,
    /// Boundary pixel count
    pub perimeter: usize,
    /// Perimeter scaled by the empirical correction factor
    pub perimeter_corrected: f64,
    /// `4 * pi * area / perimeter^2` from the raw perimeter
    pub circularity: f64,
    /// Circularity from the corrected perimeter
    pub circularity_corrected: f64,
}

/// Parameters for a particle analysis run
#[derive(Debug, Clone)]
pub struct ParticleAnalysisParams {
    /// Treat the input as already binary (any nonzero pixel is
    /// foreground), skipping threshold estimation and binarization
    pub assume_binary: bool,
    /// Structuring element for the closing step
    pub element: StructuringElement,
    /// Components with fewer pixels produce no particle record
    pub min_area: usize,
    /// Correction factor applied to the boundary-pixel count
    pub perimeter_correction: f64,
}

impl Default for ParticleAnalysisParams {
    fn default() -> Self {
        Self {
            assume_binary: false,
            element: StructuringElement::default(),
            min_area: 10,
            perimeter_correction: PERIMETER_CORRECTION,
        }
    }
}

/// Result of a particle analysis run.
///
/// Built in full before being handed out; a failed run returns an error
/// and never exposes a partially written raster.
#[derive(Debug, Clone)]
pub struct ParticleAnalysis {
    /// Particle records in label assignment order (raster scan order of
    /// each blob's first pixel)
    pub particles: Vec<Particle>,
    /// Labeled raster: 0 = background, labels from 2 upward
    pub labels: Raster<i32>,
    /// False-color rendering of the labeled raster
    pub visualization: Raster<u8>,
}

/// Particle analysis algorithm
#[derive(Debug, Clone, Default)]
pub struct ParticleAnalyzer;

impl Algorithm for ParticleAnalyzer {
    type Input = Raster<u8>;
    type Output = ParticleAnalysis;
    type Params = ParticleAnalysisParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "ParticleAnalyzer"
    }

    fn description(&self) -> &'static str {
        "Isolate, label and measure foreground particles in a gray raster"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        analyze_particles(&input, &params)
    }
}

/// Run the full particle analysis pipeline on a gray raster.
///
/// Stages: Otsu threshold estimate -> binarize -> morphological closing
/// -> hole filling -> connected-component labeling -> shape descriptors
/// -> min-area rejection -> false-color visualization. Each stage
/// produces a fresh raster or mutates its own working copy; the input is
/// never modified.
pub fn analyze_particles(
    input: &Raster<u8>,
    params: &ParticleAnalysisParams,
) -> Result<ParticleAnalysis> {
    let (rows, cols) = input.shape();
    if input.is_empty() {
        return Ok(ParticleAnalysis {
            particles: Vec::new(),
            labels: Raster::new(rows, cols),
            visualization: Raster::new(rows, cols),
        });
    }

    let binary = if params.assume_binary {
        binary_from_gray(input)
    } else {
        let threshold = otsu_threshold(input);
        debug!(
            threshold = threshold.threshold,
            small_values_are_foreground = threshold.small_values_are_foreground,
            "estimated otsu threshold"
        );
        binarize(input, threshold)?
    };

    let mut working = closing(&binary, &params.element)?;
    fill_holes(&mut working);

    let regions = label_components(&mut working)?;
    debug!(components = regions.len(), "labeled connected components");

    let mut particles = Vec::with_capacity(regions.len());
    let mut rejected = 0usize;

    for region in &regions {
        let stats = region_moments(&working, &region.bbox, region.label);
        if stats.area < params.min_area {
            rejected += 1;
            continue;
        }

        let perimeter = region_perimeter(&working, region.seed, region.label, &region.bbox);
        let perimeter_corrected = perimeter as f64 * params.perimeter_correction;

        particles.push(Particle {
            label: region.label,
            bounding_box: region.bbox,
            area: stats.area,
            centroid: stats.centroid,
            orientation: stats.orientation,
            eccentricity: stats.eccentricity,
            perimeter,
            perimeter_corrected,
            circularity: circularity(stats.area, perimeter as f64),
            circularity_corrected: circularity(stats.area, perimeter_corrected),
        });
    }

    if rejected > 0 {
        debug!(
            rejected,
            min_area = params.min_area,
            "discarded sub-threshold components"
        );
    }

    let max_label = regions.last().map(|r| r.label).unwrap_or(FIRST_LABEL - 1);
    let visualization = false_color(&working, max_label as f64);

    Ok(ParticleAnalysis {
        particles,
        labels: working,
        visualization,
    })
}

/// Interpret a gray raster as binary: any nonzero pixel is foreground.
fn binary_from_gray(input: &Raster<u8>) -> Raster<i32> {
    let mut out = input.with_same_shape::<i32>();
    for (o, &v) in out.data_mut().iter_mut().zip(input.data().iter()) {
        if v != 0 {
            *o = FOREGROUND;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_empty_image() {
        let input: Raster<u8> = Raster::new(0, 0);
        let result = analyze_particles(&input, &ParticleAnalysisParams::default()).unwrap();
        assert!(result.particles.is_empty());
        assert!(result.labels.is_empty());
    }

    #[test]
    fn test_analyze_assume_binary() {
        let mut input: Raster<u8> = Raster::new(20, 20);
        for row in 5..15 {
            for col in 5..15 {
                input.set(row, col, 1).unwrap();
            }
        }

        let params = ParticleAnalysisParams {
            assume_binary: true,
            ..Default::default()
        };
        let result = analyze_particles(&input, &params).unwrap();
        assert_eq!(result.particles.len(), 1);
        assert_eq!(result.particles[0].area, 100);
    }

    #[test]
    fn test_analyze_via_algorithm_trait() {
        let input: Raster<u8> = Raster::filled(10, 10, 200);
        let result = ParticleAnalyzer.execute_default(input).unwrap();
        assert!(result.particles.is_empty());
    }
}
