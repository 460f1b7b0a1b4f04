mod fan;
mod tessellate_loop;

pub use fan::fan_triangles;
pub use tessellate_loop::TessellateLoop;

use crate::math::{Point3, Vector3};

/// Parameters controlling tessellation.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Triangles with an area below this are dropped, and loops whose normal
    /// is shorter than this are rejected.
    pub tolerance: f64,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self { tolerance: 1e-9 }
    }
}

/// A triangle mesh approximation of a tagged face.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Total area of all triangles.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.indices
            .iter()
            .map(|&[a, b, c]| {
                let v0 = self.vertices[a as usize];
                let v1 = self.vertices[b as usize];
                let v2 = self.vertices[c as usize];
                (v1 - v0).cross(&(v2 - v0)).norm() * 0.5
            })
            .sum()
    }
}
