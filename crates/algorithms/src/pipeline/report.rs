//! Plain-text particle table

use super::analyze::Particle;
use std::fmt::Write;

/// Format particle records as a fixed-width text table, one row per
/// particle in label order, with a header line. Angles are reported in
/// degrees. An empty slice yields just the header.
pub fn particle_table(particles: &[Particle]) -> String {
    let mut out = String::new();

    // Infallible for String, so the result can be dropped
    let _ = writeln!(
        out,
        "{:>5} {:>16} {:>22} {:>6} {:>8} {:>8} {:>6} {:>8} {:>8} {:>8}",
        "Label",
        "Center of Mass",
        "Bounding Box",
        "Ecc",
        "Orient",
        "Area",
        "Perim",
        "PerimC",
        "Circ",
        "CircC",
    );

    for p in particles {
        let b = p.bounding_box;
        let _ = writeln!(
            out,
            "{:>5} {:>16} {:>22} {:>6.3} {:>8.2} {:>8} {:>6} {:>8.2} {:>8.4} {:>8.4}",
            p.label,
            format!("({:.1}, {:.1})", p.centroid.0, p.centroid.1),
            format!("({}, {}), ({}, {})", b.x1, b.y1, b.x2, b.y2),
            p.eccentricity,
            p.orientation.to_degrees(),
            p.area,
            p.perimeter,
            p.perimeter_corrected,
            p.circularity,
            p.circularity_corrected,
        );
    }

    out
}
