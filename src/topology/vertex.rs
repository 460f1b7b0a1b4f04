use std::fmt;

use crate::math::Point3;

/// Index of a vertex in the host mesh's vertex table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Data associated with a mesh vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 3D position of the vertex.
    pub point: Point3,
}

impl VertexData {
    /// Creates a new vertex at the given point.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }
}
