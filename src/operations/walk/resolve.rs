use crate::topology::{BoundaryEdge, OrderedLoop, VertexId};

/// Walks the connected component of `edges` that contains `start`.
///
/// At each step the first remaining edge (in slice order) touching the
/// current vertex is crossed and dropped from the working set, so no edge is
/// crossed twice and the walk ends after at most `edges.len()` steps. The
/// walk stops when no remaining edge touches the current vertex; a closed
/// cycle ends back at `start` once all its edges are used up.
///
/// Edges not reachable from `start` are ignored. If `start` touches no edge,
/// or `edges` is empty, the result is empty. `edges` itself is never
/// modified.
///
/// ```text
///  2+         start = 0
///   |\        edges = [e0: 1-2, e1: 0-2, e2: 0-1]
/// e1| \e0
///   |  \      result.edges    = [e1, e0, e2]
///  0+---+1    result.vertices = [2, 1, 0]
///     e2
/// ```
#[must_use]
pub fn walk_boundary(edges: &[BoundaryEdge], start: VertexId) -> OrderedLoop {
    walk_component(edges, start).0
}

/// Like [`walk_boundary`], also returning the edges that were not reached,
/// in their original relative order.
pub(super) fn walk_component(
    edges: &[BoundaryEdge],
    start: VertexId,
) -> (OrderedLoop, Vec<BoundaryEdge>) {
    let mut remaining = edges.to_vec();
    let mut walked = OrderedLoop::default();
    let mut cursor = start;

    while let Some(pos) = remaining.iter().position(|e| e.touches(cursor)) {
        let edge = remaining.remove(pos);
        let Some(next) = edge.other(cursor) else {
            break;
        };
        walked.push(edge.id, next);
        cursor = next;
    }

    (walked, remaining)
}
