use std::fmt;

use crate::math::Point3;

use super::vertex::VertexId;

/// Index of an edge in the host mesh's edge table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Data associated with a mesh edge.
///
/// Edges are unordered: `v1` and `v2` carry no direction, they only record
/// which endpoint the host mesh happened to list first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeData {
    pub v1: VertexId,
    pub v2: VertexId,
}

impl EdgeData {
    /// Creates a new edge between two vertices.
    #[must_use]
    pub fn new(v1: VertexId, v2: VertexId) -> Self {
        Self { v1, v2 }
    }
}

/// An edge together with its identifier, as consumed by a boundary walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryEdge {
    pub id: EdgeId,
    pub v1: VertexId,
    pub v2: VertexId,
}

impl BoundaryEdge {
    /// Creates a boundary edge.
    #[must_use]
    pub fn new(id: EdgeId, v1: VertexId, v2: VertexId) -> Self {
        Self { id, v1, v2 }
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.v1 == vertex || self.v2 == vertex
    }

    /// Returns the endpoint opposite `vertex`, or `None` if the edge does not
    /// touch it.
    #[must_use]
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if self.v1 == vertex {
            Some(self.v2)
        } else if self.v2 == vertex {
            Some(self.v1)
        } else {
            None
        }
    }
}

/// Parameter along an edge where its tag label is placed.
pub const EDGE_LABEL_T: f64 = 0.6;

/// Point at parameter `t` along the segment `a -> b`.
///
/// Edge-tag labels sit at [`EDGE_LABEL_T`].
#[must_use]
pub fn point_along(a: &Point3, b: &Point3, t: f64) -> Point3 {
    a + (b - a) * t
}
