pub mod boundary_loop;
pub mod edge;
pub mod vertex;

pub use boundary_loop::OrderedLoop;
pub use edge::{point_along, BoundaryEdge, EdgeData, EdgeId, EDGE_LABEL_T};
pub use vertex::{VertexData, VertexId};

use crate::error::{OperationError, TopologyError};
use crate::math::Point3;

/// Vertex and edge tables of a host mesh.
///
/// Entities are addressed by their position in the table, the way the host
/// editor numbers them. The store is append-only: identifiers handed out stay
/// valid for its whole lifetime.
#[derive(Debug, Default, Clone)]
pub struct MeshStore {
    vertices: Vec<VertexData>,
    edges: Vec<EdgeData>,
}

impl MeshStore {
    /// Creates a new, empty mesh store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from coordinates and vertex-index pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if any pair references a missing vertex or joins a
    /// vertex to itself.
    pub fn from_parts(points: &[Point3], edges: &[(usize, usize)]) -> crate::Result<Self> {
        let mut store = Self::new();
        for &point in points {
            store.add_vertex(VertexData::new(point));
        }
        for &(v1, v2) in edges {
            store.add_edge(VertexId(v1), VertexId(v2))?;
        }
        Ok(store)
    }

    /// Number of vertices in the store.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges in the store.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // --- Vertex operations ---

    /// Appends a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.push(data);
        VertexId(self.vertices.len() - 1)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id.0)
            .ok_or_else(|| TopologyError::EntityNotFound(format!("vertex {id}")))
    }

    /// Looks up the positions of a sequence of vertices, preserving order.
    ///
    /// # Errors
    ///
    /// Returns an error if any vertex is not in the store.
    pub fn points(&self, ids: &[VertexId]) -> crate::Result<Vec<Point3>> {
        ids.iter()
            .map(|&id| self.vertex(id).map(|v| v.point))
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    // --- Edge operations ---

    /// Appends an edge between two existing vertices and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` if either vertex is missing, or
    /// `OperationError::InvalidInput` if both endpoints are the same vertex.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId) -> crate::Result<EdgeId> {
        self.vertex(v1)?;
        self.vertex(v2)?;
        if v1 == v2 {
            return Err(OperationError::InvalidInput(format!(
                "edge endpoints must differ, got {v1} twice"
            ))
            .into());
        }
        self.edges.push(EdgeData::new(v1, v2));
        Ok(EdgeId(self.edges.len() - 1))
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id.0)
            .ok_or_else(|| TopologyError::EntityNotFound(format!("edge {id}")))
    }

    /// Resolves edge IDs into boundary edges, preserving order.
    ///
    /// # Errors
    ///
    /// Returns an error if any edge is not in the store.
    pub fn boundary_edges(&self, ids: &[EdgeId]) -> Result<Vec<BoundaryEdge>, TopologyError> {
        ids.iter()
            .map(|&id| {
                let edge = self.edge(id)?;
                Ok(BoundaryEdge {
                    id,
                    v1: edge.v1,
                    v2: edge.v2,
                })
            })
            .collect()
    }

    /// Position of the label for an edge tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or either endpoint is missing.
    pub fn edge_label_point(&self, id: EdgeId) -> Result<Point3, TopologyError> {
        let edge = self.edge(id)?;
        let a = self.vertex(edge.v1)?.point;
        let b = self.vertex(edge.v2)?.point;
        Ok(point_along(&a, &b, EDGE_LABEL_T))
    }
}
