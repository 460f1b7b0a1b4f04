mod resolve;

pub use resolve::walk_boundary;

use crate::error::{Result, TopologyError};
use crate::topology::{BoundaryEdge, EdgeId, MeshStore, OrderedLoop, VertexId};

/// What to do when a boundary walk does not use every input edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopPolicy {
    /// Return whatever was walked. Branches and disconnected edges are
    /// silently dropped from the result.
    #[default]
    BestEffort,
    /// Fail with [`TopologyError::IncompleteLoop`] if any edge was not reached.
    RequireAllEdges,
    /// As `RequireAllEdges`, and a non-empty walk must also end at its start
    /// vertex. An empty edge set passes as an empty loop.
    RequireClosed,
}

impl LoopPolicy {
    /// Checks a finished walk against this policy.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::IncompleteLoop` or `TopologyError::OpenLoop`
    /// when the walk violates a strict policy.
    pub fn check(
        self,
        walked: OrderedLoop,
        remaining: &[BoundaryEdge],
        start: VertexId,
    ) -> Result<OrderedLoop> {
        if !remaining.is_empty() {
            if self == Self::BestEffort {
                tracing::debug!(
                    %start,
                    walked = walked.len(),
                    remaining = remaining.len(),
                    "boundary walk left edges unreached"
                );
            } else {
                return Err(TopologyError::IncompleteLoop {
                    walked: walked.len(),
                    remaining: remaining.len(),
                }
                .into());
            }
        }

        if self == Self::RequireClosed && !walked.is_empty() && !walked.closes_at(start) {
            let end = walked.last_vertex().unwrap_or(start);
            return Err(TopologyError::OpenLoop { start, end }.into());
        }

        Ok(walked)
    }
}

/// Parameters controlling boundary walks.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkParams {
    /// Policy applied to walks that leave edges behind.
    pub policy: LoopPolicy,
}

impl WalkParams {
    /// Parameters with the given loop policy.
    #[must_use]
    pub fn with_policy(policy: LoopPolicy) -> Self {
        Self { policy }
    }
}

/// Orders a set of mesh edges into a walk starting at a given vertex.
pub struct WalkBoundary {
    edges: Vec<EdgeId>,
    start: VertexId,
    params: WalkParams,
}

impl WalkBoundary {
    /// Creates a new `WalkBoundary` operation with default parameters.
    #[must_use]
    pub fn new(edges: Vec<EdgeId>, start: VertexId) -> Self {
        Self {
            edges,
            start,
            params: WalkParams::default(),
        }
    }

    /// Sets custom walk parameters.
    #[must_use]
    pub fn with_params(mut self, params: WalkParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the walk against the mesh's edge table.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EntityNotFound` if an edge is not in the store,
    /// or the policy's error if the walk violates it.
    pub fn execute(&self, store: &MeshStore) -> Result<OrderedLoop> {
        let edges = store.boundary_edges(&self.edges)?;
        let (walked, remaining) = resolve::walk_component(&edges, self.start);
        self.params.policy.check(walked, &remaining, self.start)
    }
}
