use crate::error::Result;
use crate::math::polygon_2d::polygon_centroid;
use crate::math::Point3;
use crate::topology::{MeshStore, OrderedLoop, VertexId};

/// Computes the centroid of a polygon given by mesh vertex IDs.
///
/// See [`polygon_centroid`] for how Z is approximated.
pub struct PolygonCentroid {
    vertices: Vec<VertexId>,
}

impl PolygonCentroid {
    /// Creates a new `PolygonCentroid` query over an ordered vertex sequence.
    #[must_use]
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }

    /// Creates a query over the vertices of a walked boundary.
    #[must_use]
    pub fn from_loop(boundary: &OrderedLoop) -> Self {
        Self::new(boundary.vertices.clone())
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex is not in the store, or
    /// `GeometryError::Degenerate` if the polygon has zero area.
    pub fn execute(&self, store: &MeshStore) -> Result<Point3> {
        let points = store.points(&self.vertices)?;
        polygon_centroid(&points)
    }
}
