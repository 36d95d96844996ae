//! Mitred border frame tessellation.
//!
//! The frame replaces the plain side walls. Per boundary edge, working
//! outward from the model: a strip joining the relief boundary to the
//! flat frame plane, the horizontal shelf out to the rim, the vertical
//! outer wall, and the bottom strip back in to the footprint. Each
//! corner is closed by a mitred join of four triangles (top, diagonal
//! outer wall, bottom), so the frame forms one continuous rectangle
//! with no gap or overlap.

use litho_types::{Point3, TriangleSink};

use crate::params::BorderParams;
use crate::plate::{Emitter, PlateBuilder};

/// Number of triangles in one mitred corner join.
pub(crate) const CORNER_TRIANGLES: usize = 4;

/// Emit the full border frame: four edge strips plus four corner joins.
pub(crate) fn emit_frame<S: TriangleSink>(
    plate: &PlateBuilder<'_>,
    frame: BorderParams,
    out: &mut Emitter<'_, S>,
) -> Result<(), S::Error> {
    let top = frame.thickness_mm;
    let reach = frame.width_mm;

    for edge in plate.boundary_edges() {
        let (dx, dy) = edge.outward;
        for pair in edge.samples.windows(2) {
            let (ai, aj) = pair[0];
            let (bi, bj) = pair[1];

            let f_a = plate.front(ai, aj);
            let f_b = plate.front(bi, bj);
            let e_a = plate.grid_point(ai, aj, top);
            let e_b = plate.grid_point(bi, bj, top);
            let r_a = rim(plate, (ai, aj), (dx, dy), reach, top);
            let r_b = rim(plate, (bi, bj), (dx, dy), reach, top);
            let g_a = rim(plate, (ai, aj), (dx, dy), reach, 0.0);
            let g_b = rim(plate, (bi, bj), (dx, dy), reach, 0.0);
            let b_a = plate.back(ai, aj);
            let b_b = plate.back(bi, bj);

            // Relief boundary up (or down) to the frame plane.
            out.quad(e_a, e_b, f_b, f_a)?;
            // Shelf out to the rim.
            out.quad(r_a, r_b, e_b, e_a)?;
            // Outer wall down to the base plane.
            out.quad(g_a, g_b, r_b, r_a)?;
            // Bottom back in to the footprint.
            out.quad(b_a, b_b, g_b, g_a)?;
        }
    }

    for corner in plate.corners() {
        let center_top = plate.grid_point(corner.at.0, corner.at.1, top);
        let center_base = plate.back(corner.at.0, corner.at.1);
        let r_a = rim(plate, corner.at, corner.dir_a, reach, top);
        let g_a = rim(plate, corner.at, corner.dir_a, reach, 0.0);
        let r_b = rim(plate, corner.at, corner.dir_b, reach, top);
        let g_b = rim(plate, corner.at, corner.dir_b, reach, 0.0);

        // Mitred join: top wedge, diagonal outer wall, bottom wedge.
        out.tri(r_a, center_top, r_b)?;
        out.quad(g_b, g_a, r_a, r_b)?;
        out.tri(center_base, g_a, g_b)?;
    }

    Ok(())
}

/// Rim vertex: boundary sample pushed outward by `reach` along `dir`.
fn rim(
    plate: &PlateBuilder<'_>,
    (i, j): (usize, usize),
    (dx, dy): (f64, f64),
    reach: f64,
    z: f64,
) -> Point3<f64> {
    let base = plate.grid_point(i, j, z);
    Point3::new(base.x + reach * dx, base.y + reach * dy, z)
}
