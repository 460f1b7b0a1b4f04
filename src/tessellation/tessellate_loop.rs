use std::collections::HashMap;

use spade::{ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};

use crate::error::{GeometryError, Result, TessellationError};
use crate::math::polygon_2d::{newell_normal, winding_number};
use crate::math::{Point3, Vector3};
use crate::operations::tagging::FaceTagOutline;

use super::{TessellationParams, TriangleMesh};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates a closed boundary loop with a constrained Delaunay
/// triangulation.
///
/// The loop is projected onto the plane of its Newell normal, every boundary
/// segment becomes a constraint, and only triangles inside the loop are kept.
/// Output vertices are the original (unprojected) loop points, and triangles
/// wind counter-clockwise about the normal.
pub struct TessellateLoop {
    points: Vec<Point3>,
    params: TessellationParams,
}

impl TessellateLoop {
    /// Creates a new `TessellateLoop` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self {
            points,
            params: TessellationParams::default(),
        }
    }

    /// Creates an operation over a resolved face-tag outline.
    #[must_use]
    pub fn from_outline(outline: &FaceTagOutline) -> Self {
        Self::new(outline.points.clone())
    }

    /// Sets custom tessellation parameters.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::Failed` if the loop has fewer than three
    /// points or crosses itself, or `GeometryError::ZeroVector` if it
    /// encloses no area.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        if self.points.len() < 3 {
            return Err(TessellationError::Failed(format!(
                "loop needs at least 3 points, got {}",
                self.points.len()
            ))
            .into());
        }

        let normal = newell_normal(&self.points);
        if normal.norm() < self.params.tolerance {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal.normalize();
        let (u_dir, v_dir) = plane_axes(&normal);
        let origin = self.points[0];
        let projected: Vec<SpadePoint2<f64>> = self
            .points
            .iter()
            .map(|p| {
                let d = p - origin;
                SpadePoint2::new(d.dot(&u_dir), d.dot(&v_dir))
            })
            .collect();

        let mut cdt = Cdt::new();
        let handle_to_point = insert_boundary(&mut cdt, &projected)?;

        let outline: Vec<(f64, f64)> = projected.iter().map(|p| (p.x, p.y)).collect();
        let mut mesh = TriangleMesh::default();
        let mut index_map: HashMap<usize, u32> = HashMap::new();
        let mut dropped = 0usize;

        for face in cdt.inner_faces() {
            let [a, b, c] = face.positions();
            let cx = (a.x + b.x + c.x) / 3.0;
            let cy = (a.y + b.y + c.y) / 3.0;
            if winding_number(cx, cy, &outline) == 0 {
                continue;
            }
            if face.area() < self.params.tolerance {
                dropped += 1;
                continue;
            }

            let mut tri = [0u32; 3];
            for (slot, vh) in tri.iter_mut().zip(face.vertices()) {
                let cdt_idx = vh.fix().index();
                *slot = *index_map.entry(cdt_idx).or_insert_with(|| {
                    let point_idx = handle_to_point.get(&cdt_idx).copied().unwrap_or(0);
                    mesh.vertices.push(self.points[point_idx]);
                    mesh.normals.push(normal);
                    (mesh.vertices.len() - 1) as u32
                });
            }
            mesh.indices.push(tri);
        }

        if dropped > 0 {
            tracing::debug!(dropped, "dropped sliver triangles from loop tessellation");
        }
        Ok(mesh)
    }
}

/// Orthonormal in-plane axes `(u, v)` with `u x v = normal`.
fn plane_axes(normal: &Vector3) -> (Vector3, Vector3) {
    let helper = if normal.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let u = helper.cross(normal).normalize();
    let v = normal.cross(&u);
    (u, v)
}

/// Inserts the loop's points and segments into the CDT.
///
/// Returns a map from CDT vertex index to the index of the first loop point
/// that landed on it.
fn insert_boundary(cdt: &mut Cdt, points: &[SpadePoint2<f64>]) -> Result<HashMap<usize, usize>> {
    let mut handles = Vec::with_capacity(points.len());
    let mut handle_to_point = HashMap::new();
    for (i, &pt) in points.iter().enumerate() {
        let h = cdt
            .insert(pt)
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        handle_to_point.entry(h.index()).or_insert(i);
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::Failed(format!(
                "boundary segment {i} crosses another segment"
            ))
            .into());
        }
        cdt.add_constraint(from, to);
    }

    Ok(handle_to_point)
}
