//! False-color rendering and overlay drawing
//!
//! Maps label values linearly into the display intensity range and,
//! for host-side inspection, renders an RGBA buffer with optional
//! per-particle annotations: bounding box, centroid marker and
//! orientation line.

use super::analyze::ParticleAnalysis;
use partscan_core::raster::{Raster, RasterElement};

/// Bounding box outline color (RGB)
const BOX_COLOR: [u8; 3] = [0, 0, 255];
/// Centroid marker color (RGB)
const CENTROID_COLOR: [u8; 3] = [255, 0, 0];
/// Orientation line color (RGB)
const ORIENTATION_COLOR: [u8; 3] = [0, 255, 0];

/// Map raster values linearly into gray intensities.
///
/// A value `v` renders as `v / (max_value + 1) * 255`, so the highest
/// label stays just below white and background stays black.
pub fn false_color<T: RasterElement>(raster: &Raster<T>, max_value: f64) -> Raster<u8> {
    let scale = 255.0 / (max_value + 1.0);
    let mut out = raster.with_same_shape::<u8>();

    for (o, v) in out.data_mut().iter_mut().zip(raster.data().iter()) {
        let t = v.to_f64().unwrap_or(0.0) * scale;
        *o = t.clamp(0.0, 255.0) as u8;
    }
    out
}

/// Render an analysis result as an RGBA pixel buffer.
///
/// Returns a `Vec<u8>` of length `rows * cols * 4` in row-major order,
/// suitable for uploading as a texture. The false-color gray value is
/// replicated across the color channels; with `draw_overlays` each
/// particle additionally gets its bounding box, a 3x3 centroid marker
/// and an orientation line segment.
pub fn render_rgba(analysis: &ParticleAnalysis, draw_overlays: bool) -> Vec<u8> {
    let rows = analysis.visualization.rows();
    let cols = analysis.visualization.cols();

    let mut rgba = vec![0u8; rows * cols * 4];
    for (i, &gray) in analysis.visualization.data().iter().enumerate() {
        let offset = i * 4;
        rgba[offset] = gray;
        rgba[offset + 1] = gray;
        rgba[offset + 2] = gray;
        rgba[offset + 3] = 255;
    }

    if !draw_overlays {
        return rgba;
    }

    let mut put = |x: isize, y: isize, color: [u8; 3]| {
        if x < 0 || y < 0 || x >= cols as isize || y >= rows as isize {
            return;
        }
        let offset = (y as usize * cols + x as usize) * 4;
        rgba[offset] = color[0];
        rgba[offset + 1] = color[1];
        rgba[offset + 2] = color[2];
        rgba[offset + 3] = 255;
    };

    for particle in &analysis.particles {
        let b = particle.bounding_box;

        for x in b.x1..=b.x2 {
            put(x as isize, b.y1 as isize, BOX_COLOR);
            put(x as isize, b.y2 as isize, BOX_COLOR);
        }
        for y in b.y1..=b.y2 {
            put(b.x1 as isize, y as isize, BOX_COLOR);
            put(b.x2 as isize, y as isize, BOX_COLOR);
        }

        let cx = particle.centroid.0.round() as isize;
        let cy = particle.centroid.1.round() as isize;
        for dy in -1..=1 {
            for dx in -1..=1 {
                put(cx + dx, cy + dy, CENTROID_COLOR);
            }
        }

        // Line length scales with the box extent
        let half = ((b.width() - 1) + (b.height() - 1)) as isize / 4;
        let (sin, cos) = particle.orientation.sin_cos();
        for i in -half..=half {
            let dx = (i as f64 * cos) as isize;
            let dy = (i as f64 * sin) as isize;
            put(cx + dx, cy + dy, ORIENTATION_COLOR);
        }
    }

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{analyze_particles, ParticleAnalysisParams};

    #[test]
    fn test_false_color_scaling() {
        let mut labels: Raster<i32> = Raster::new(2, 2);
        labels.set(0, 1, 2).unwrap();
        labels.set(1, 0, 3).unwrap();

        let gray = false_color(&labels, 3.0);
        assert_eq!(gray.get(0, 0).unwrap(), 0);
        // 2 / 4 * 255 = 127.5 -> 127
        assert_eq!(gray.get(0, 1).unwrap(), 127);
        // 3 / 4 * 255 = 191.25 -> 191
        assert_eq!(gray.get(1, 0).unwrap(), 191);
    }

    fn analysis_with_one_particle() -> ParticleAnalysis {
        let mut input: Raster<u8> = Raster::new(20, 20);
        for row in 5..15 {
            for col in 4..16 {
                input.set(row, col, 1).unwrap();
            }
        }
        let params = ParticleAnalysisParams {
            assume_binary: true,
            ..Default::default()
        };
        analyze_particles(&input, &params).unwrap()
    }

    #[test]
    fn test_render_rgba_no_overlays() {
        let analysis = analysis_with_one_particle();
        let rgba = render_rgba(&analysis, false);
        assert_eq!(rgba.len(), 20 * 20 * 4);

        // Background pixel: black, opaque
        assert_eq!(&rgba[0..4], &[0, 0, 0, 255]);

        // Particle pixel: gray replicated across channels
        let offset = (10 * 20 + 10) * 4;
        let gray = rgba[offset];
        assert!(gray > 0);
        assert_eq!(rgba[offset + 1], gray);
        assert_eq!(rgba[offset + 2], gray);
    }

    #[test]
    fn test_render_rgba_overlays() {
        let analysis = analysis_with_one_particle();
        let rgba = render_rgba(&analysis, true);

        let b = analysis.particles[0].bounding_box;
        // Box corner painted blue
        let offset = (b.y1 * 20 + b.x1) * 4;
        assert_eq!(&rgba[offset..offset + 3], &BOX_COLOR);

        // Centroid marker painted red (one row below the center, which
        // itself is overdrawn by the orientation line)
        let (cx, cy) = analysis.particles[0].centroid;
        let offset = ((cy.round() as usize + 1) * 20 + cx.round() as usize) * 4;
        assert_eq!(&rgba[offset..offset + 3], &CENTROID_COLOR);

        // Orientation line painted green through the center
        let offset = ((cy.round() as usize) * 20 + cx.round() as usize) * 4;
        assert_eq!(&rgba[offset..offset + 3], &ORIENTATION_COLOR);
    }
}
