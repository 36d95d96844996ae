//! Plate tessellation: front relief, back, side walls.

use litho_field::HeightField;
use litho_types::{Point3, Triangle, TriangleSink};
use tracing::debug;

use crate::border;
use crate::error::MeshResult;
use crate::params::{BackStyle, PlateParams};

/// Streams the closed plate mesh for one height field.
///
/// Construction validates the layout parameters; emission performs no
/// I/O of its own and can only fail by propagating the sink's error.
/// Every quad `(p1, p2, p3, p4)` is split into `(p1, p2, p4)` and
/// `(p2, p3, p4)`, with corners supplied counter-clockwise as seen from
/// outside the solid.
///
/// # Example
///
/// ```
/// use litho_field::{HeightField, ReliefParams, ScalarGrid};
/// use litho_mesh::{PlateBuilder, PlateParams};
/// use litho_types::TriangleBuffer;
///
/// let grid = ScalarGrid::from_fn(2, 2, |i, _| i as f64);
/// let field = HeightField::from_luminance(&grid, &ReliefParams::default()).unwrap();
/// let builder = PlateBuilder::new(&field, &PlateParams::with_step(1.0)).unwrap();
///
/// let mut buffer = TriangleBuffer::new();
/// let count = builder.emit(&mut buffer).unwrap();
///
/// // 1 front quad + 1 back quad + 4 wall quads, 2 triangles each.
/// assert_eq!(count, 12);
/// ```
#[derive(Debug)]
pub struct PlateBuilder<'a> {
    field: &'a HeightField,
    params: PlateParams,
}

impl<'a> PlateBuilder<'a> {
    /// Create a builder for the given field and layout.
    ///
    /// # Errors
    ///
    /// Returns a [`MeshError`](crate::MeshError) if the step or border
    /// dimensions are invalid.
    pub fn new(field: &'a HeightField, params: &PlateParams) -> MeshResult<Self> {
        params.validate()?;
        Ok(Self {
            field,
            params: params.clone(),
        })
    }

    /// Stream every surface triangle exactly once into `sink`.
    ///
    /// Returns the number of triangles emitted.
    ///
    /// # Errors
    ///
    /// Propagates the sink's error; the tessellation itself cannot fail.
    pub fn emit<S: TriangleSink>(&self, sink: &mut S) -> Result<u64, S::Error> {
        let mut out = Emitter { sink, count: 0 };

        self.emit_front(&mut out)?;
        match self.params.back_style {
            BackStyle::Grid => self.emit_back_grid(&mut out)?,
            BackStyle::Fan => self.emit_back_fan(&mut out)?,
        }
        match self.params.border {
            None => self.emit_side_walls(&mut out)?,
            Some(frame) => border::emit_frame(self, frame, &mut out)?,
        }

        debug!(
            triangles = out.count,
            width = self.field.width(),
            height = self.field.height(),
            "plate emission complete"
        );
        Ok(out.count)
    }

    /// The relief surface: one quad per cell of the sample grid.
    fn emit_front<S: TriangleSink>(&self, out: &mut Emitter<'_, S>) -> Result<(), S::Error> {
        for i in 0..self.field.width() - 1 {
            for j in 0..self.field.height() - 1 {
                out.quad(
                    self.front(i, j),
                    self.front(i + 1, j),
                    self.front(i + 1, j + 1),
                    self.front(i, j + 1),
                )?;
            }
        }
        Ok(())
    }

    /// Flat back at z=0, one quad per front quad.
    fn emit_back_grid<S: TriangleSink>(&self, out: &mut Emitter<'_, S>) -> Result<(), S::Error> {
        for i in 0..self.field.width() - 1 {
            for j in 0..self.field.height() - 1 {
                out.quad(
                    self.back(i, j),
                    self.back(i, j + 1),
                    self.back(i + 1, j + 1),
                    self.back(i + 1, j),
                )?;
            }
        }
        Ok(())
    }

    /// Flat back at z=0 as a fan: center apex, one triangle per boundary
    /// edge segment.
    fn emit_back_fan<S: TriangleSink>(&self, out: &mut Emitter<'_, S>) -> Result<(), S::Error> {
        let apex = Point3::new(self.width_mm() / 2.0, self.height_mm() / 2.0, 0.0);
        let perimeter = self.perimeter();
        let n = perimeter.len();
        for k in 0..n {
            let (ai, aj) = perimeter[k];
            let (bi, bj) = perimeter[(k + 1) % n];
            // Perimeter runs CCW seen from above; swap to face downward.
            out.tri(apex, self.back(bi, bj), self.back(ai, aj))?;
        }
        Ok(())
    }

    /// Four vertical wall strips joining the relief boundary to the back.
    fn emit_side_walls<S: TriangleSink>(&self, out: &mut Emitter<'_, S>) -> Result<(), S::Error> {
        for edge in self.boundary_edges() {
            for pair in edge.samples.windows(2) {
                let (ai, aj) = pair[0];
                let (bi, bj) = pair[1];
                out.quad(
                    self.back(ai, aj),
                    self.back(bi, bj),
                    self.front(bi, bj),
                    self.front(ai, aj),
                )?;
            }
        }
        Ok(())
    }

    /// Front vertex for sample `(i, j)`.
    pub(crate) fn front(&self, i: usize, j: usize) -> Point3<f64> {
        self.grid_point(i, j, self.field.thickness(i, j))
    }

    /// Back vertex for sample `(i, j)`, at z=0.
    pub(crate) fn back(&self, i: usize, j: usize) -> Point3<f64> {
        self.grid_point(i, j, 0.0)
    }

    /// Vertex at sample `(i, j)` with an explicit z.
    ///
    /// All surfaces route through this one expression so shared vertices
    /// come out bit-identical.
    #[allow(clippy::cast_precision_loss)] // sample counts stay far below 2^52
    pub(crate) fn grid_point(&self, i: usize, j: usize, z: f64) -> Point3<f64> {
        let s = self.params.step_mm;
        Point3::new(i as f64 * s, j as f64 * s, z)
    }

    /// Physical plate width in mm.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn width_mm(&self) -> f64 {
        (self.field.width() - 1) as f64 * self.params.step_mm
    }

    /// Physical plate height in mm.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn height_mm(&self) -> f64 {
        (self.field.height() - 1) as f64 * self.params.step_mm
    }

    /// The four boundary edges, each traversed counter-clockwise as seen
    /// from above (+z), with its outward direction in the XY plane.
    pub(crate) fn boundary_edges(&self) -> [BoundaryEdge; 4] {
        let w = self.field.width();
        let h = self.field.height();
        [
            BoundaryEdge {
                samples: (0..w).map(|i| (i, 0)).collect(),
                outward: (0.0, -1.0),
            },
            BoundaryEdge {
                samples: (0..h).map(|j| (w - 1, j)).collect(),
                outward: (1.0, 0.0),
            },
            BoundaryEdge {
                samples: (0..w).rev().map(|i| (i, h - 1)).collect(),
                outward: (0.0, 1.0),
            },
            BoundaryEdge {
                samples: (0..h).rev().map(|j| (0, j)).collect(),
                outward: (-1.0, 0.0),
            },
        ]
    }

    /// The four footprint corners in CCW order. Each pairs the outward
    /// directions of the boundary edge starting there (`dir_a`) and the
    /// one ending there (`dir_b`).
    pub(crate) fn corners(&self) -> [Corner; 4] {
        let w = self.field.width();
        let h = self.field.height();
        [
            Corner {
                at: (0, 0),
                dir_a: (0.0, -1.0),
                dir_b: (-1.0, 0.0),
            },
            Corner {
                at: (w - 1, 0),
                dir_a: (1.0, 0.0),
                dir_b: (0.0, -1.0),
            },
            Corner {
                at: (w - 1, h - 1),
                dir_a: (0.0, 1.0),
                dir_b: (1.0, 0.0),
            },
            Corner {
                at: (0, h - 1),
                dir_a: (-1.0, 0.0),
                dir_b: (0.0, 1.0),
            },
        ]
    }

    /// Unique boundary samples of the footprint, CCW seen from above.
    fn perimeter(&self) -> Vec<(usize, usize)> {
        let mut loop_points = Vec::new();
        for edge in self.boundary_edges() {
            // Each edge ends where the next one starts.
            loop_points.extend_from_slice(&edge.samples[..edge.samples.len() - 1]);
        }
        loop_points
    }
}

/// One boundary edge of the sample grid.
pub(crate) struct BoundaryEdge {
    /// Boundary samples in traversal order, both corners included.
    pub(crate) samples: Vec<(usize, usize)>,
    /// Outward horizontal direction of this edge.
    pub(crate) outward: (f64, f64),
}

/// One footprint corner with the outward directions of its two edges.
pub(crate) struct Corner {
    pub(crate) at: (usize, usize),
    pub(crate) dir_a: (f64, f64),
    pub(crate) dir_b: (f64, f64),
}

/// Counting wrapper around a sink.
pub(crate) struct Emitter<'s, S: TriangleSink> {
    sink: &'s mut S,
    count: u64,
}

impl<S: TriangleSink> Emitter<'_, S> {
    pub(crate) fn tri(
        &mut self,
        v0: Point3<f64>,
        v1: Point3<f64>,
        v2: Point3<f64>,
    ) -> Result<(), S::Error> {
        self.count += 1;
        self.sink.emit(&Triangle::new(v0, v1, v2))
    }

    pub(crate) fn quad(
        &mut self,
        p1: Point3<f64>,
        p2: Point3<f64>,
        p3: Point3<f64>,
        p4: Point3<f64>,
    ) -> Result<(), S::Error> {
        self.tri(p1, p2, p4)?;
        self.tri(p2, p3, p4)
    }
}
