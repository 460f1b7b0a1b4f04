use super::edge::EdgeId;
use super::vertex::VertexId;

/// Result of a boundary walk: parallel sequences of traversed edges and the
/// vertex reached by each.
///
/// `vertices[i]` is the endpoint arrived at after crossing `edges[i]`; the
/// start vertex itself is not repeated at the front. A closed walk therefore
/// ends with the start vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedLoop {
    pub edges: Vec<EdgeId>,
    pub vertices: Vec<VertexId>,
}

impl OrderedLoop {
    /// Number of edges walked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the walk crossed no edge.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The vertex the walk stopped at, if any edge was crossed.
    #[must_use]
    pub fn last_vertex(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Returns `true` if the walk is non-empty and ended back at `start`.
    #[must_use]
    pub fn closes_at(&self, start: VertexId) -> bool {
        self.last_vertex() == Some(start)
    }

    pub(crate) fn push(&mut self, edge: EdgeId, vertex: VertexId) {
        self.edges.push(edge);
        self.vertices.push(vertex);
    }
}
