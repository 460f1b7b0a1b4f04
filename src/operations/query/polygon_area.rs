use crate::error::Result;
use crate::math::polygon_2d::polygon_area;
use crate::topology::{MeshStore, OrderedLoop, VertexId};

/// Computes the signed XY area of a polygon given by mesh vertex IDs.
///
/// Positive for counter-clockwise order, negative for clockwise.
pub struct PolygonArea {
    vertices: Vec<VertexId>,
}

impl PolygonArea {
    /// Creates a new `PolygonArea` query over an ordered vertex sequence.
    #[must_use]
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }

    /// Creates a query over the vertices of a walked boundary.
    #[must_use]
    pub fn from_loop(boundary: &OrderedLoop) -> Self {
        Self::new(boundary.vertices.clone())
    }

    /// Executes the query, returning the signed area.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex is not in the store.
    pub fn execute(&self, store: &MeshStore) -> Result<f64> {
        let points = store.points(&self.vertices)?;
        Ok(polygon_area(&points))
    }
}
