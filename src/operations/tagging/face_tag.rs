use std::fmt;
use std::str::FromStr;

use crate::error::{MeshTagError, OperationError, Result};
use crate::math::polygon_2d::{polygon_area, polygon_centroid, vertex_mean};
use crate::math::Point3;
use crate::operations::walk::{WalkBoundary, WalkParams};
use crate::topology::{EdgeId, MeshStore, OrderedLoop};

/// Identifies a tagged face by the mesh edges that bound it.
///
/// The textual form lists the edge IDs in selection order joined by `_`,
/// e.g. `3_5_7`. The first edge decides where the boundary walk starts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceTagKey(Vec<EdgeId>);

impl FaceTagKey {
    /// Creates a key from a non-empty edge selection.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidSelection` if `edges` is empty.
    pub fn new(edges: Vec<EdgeId>) -> Result<Self> {
        if edges.is_empty() {
            return Err(
                OperationError::InvalidSelection("a face tag needs at least one edge".to_owned())
                    .into(),
            );
        }
        Ok(Self(edges))
    }

    /// The bounding edges in selection order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.0
    }

    /// The edge the boundary walk starts from.
    #[must_use]
    pub fn first_edge(&self) -> EdgeId {
        self.0[0]
    }
}

impl fmt::Display for FaceTagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("_")?;
            }
            write!(f, "{edge}")?;
        }
        Ok(())
    }
}

impl FromStr for FaceTagKey {
    type Err = MeshTagError;

    fn from_str(s: &str) -> Result<Self> {
        let edges = s
            .split('_')
            .map(|part| {
                part.parse::<usize>().map(EdgeId).map_err(|e| {
                    OperationError::InvalidInput(format!("face tag key {s:?}: {part:?}: {e}"))
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::new(edges)
    }
}

/// A face tag's boundary resolved against the mesh, ready to draw.
#[derive(Debug, Clone)]
pub struct FaceTagOutline {
    /// The walked boundary.
    pub boundary: OrderedLoop,
    /// Positions of `boundary.vertices`, in walk order.
    pub points: Vec<Point3>,
    /// Mean of `points`; the hub of the fill fan and the label position.
    pub centre: Point3,
}

impl FaceTagOutline {
    /// Signed XY area of the outline.
    #[must_use]
    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }

    /// Area centroid of the outline.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the outline has zero area.
    pub fn centroid(&self) -> Result<Point3> {
        polygon_centroid(&self.points)
    }
}

/// Resolves a face tag key into a drawable outline.
///
/// The walk starts at `v1` of the key's first edge.
pub struct ResolveFaceTag {
    key: FaceTagKey,
    params: WalkParams,
}

impl ResolveFaceTag {
    /// Creates a new `ResolveFaceTag` operation with default parameters.
    #[must_use]
    pub fn new(key: FaceTagKey) -> Self {
        Self {
            key,
            params: WalkParams::default(),
        }
    }

    /// Sets custom walk parameters.
    #[must_use]
    pub fn with_params(mut self, params: WalkParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge or vertex is not in the store, or the walk
    /// violates the configured policy.
    pub fn execute(&self, store: &MeshStore) -> Result<FaceTagOutline> {
        let start = store.edge(self.key.first_edge())?.v1;
        let boundary = WalkBoundary::new(self.key.edges().to_vec(), start)
            .with_params(self.params)
            .execute(store)?;

        let points = store.points(&boundary.vertices)?;
        let centre = vertex_mean(&points)?;
        Ok(FaceTagOutline {
            boundary,
            points,
            centre,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TopologyError;
    use crate::operations::walk::LoopPolicy;
    use crate::topology::VertexId;
    use approx::assert_relative_eq;

    /// Two unit squares sharing the edge 1-4:
    ///
    /// ```text
    /// 3 +---+ 4 ---+ 5
    ///   |   |      |
    /// 0 +---+ 1 ---+ 2
    /// ```
    ///
    /// e0: 0-1, e1: 1-2, e2: 2-5, e3: 5-4, e4: 4-3, e5: 3-0, e6: 1-4
    fn two_squares() -> MeshStore {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
        ];
        MeshStore::from_parts(
            &points,
            &[(0, 1), (1, 2), (2, 5), (5, 4), (4, 3), (3, 0), (1, 4)],
        )
        .unwrap()
    }

    #[test]
    fn key_round_trips_through_text() {
        let key: FaceTagKey = "3_5_7".parse().unwrap();
        assert_eq!(key.edges(), &[EdgeId(3), EdgeId(5), EdgeId(7)]);
        assert_eq!(key.first_edge(), EdgeId(3));
        assert_eq!(key.to_string(), "3_5_7");
        assert_eq!("12".parse::<FaceTagKey>().unwrap().to_string(), "12");
    }

    #[test]
    fn key_rejects_garbage() {
        assert!("".parse::<FaceTagKey>().is_err());
        assert!("3__5".parse::<FaceTagKey>().is_err());
        assert!("3_x".parse::<FaceTagKey>().is_err());
        assert!("-1".parse::<FaceTagKey>().is_err());
        assert!(FaceTagKey::new(Vec::new()).is_err());
    }

    #[test]
    fn left_square_outline() {
        let store = two_squares();
        let key: FaceTagKey = "6_0_4_5".parse().unwrap();
        let outline = ResolveFaceTag::new(key).execute(&store).unwrap();
        // Starts at v1 of edge 6 (vertex 1) and walks 1-4-3-0-1.
        assert_eq!(
            outline.boundary.vertices,
            vec![VertexId(4), VertexId(3), VertexId(0), VertexId(1)]
        );
        assert_relative_eq!(outline.centre.x, 0.5);
        assert_relative_eq!(outline.centre.y, 0.5);
        assert_relative_eq!(outline.area().abs(), 1.0);
        let c = outline.centroid().unwrap();
        assert_relative_eq!(c.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn outer_boundary_outline() {
        let store = two_squares();
        let key: FaceTagKey = "3_0_1_2_4_5".parse().unwrap();
        let outline = ResolveFaceTag::new(key).execute(&store).unwrap();
        assert_eq!(outline.boundary.len(), 6);
        assert!(outline.boundary.closes_at(VertexId(5)));
        assert_relative_eq!(outline.area().abs(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(outline.centre.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn branching_selection_is_partial_by_default() {
        let store = two_squares();
        // All seven edges: vertex 1 and 4 are branch points.
        let key: FaceTagKey = "0_1_2_3_4_5_6".parse().unwrap();
        let outline = ResolveFaceTag::new(key.clone()).execute(&store).unwrap();
        assert!(outline.boundary.len() < 7);

        let err = ResolveFaceTag::new(key)
            .with_params(WalkParams::with_policy(LoopPolicy::RequireAllEdges))
            .execute(&store)
            .unwrap_err();
        assert!(matches!(
            err,
            MeshTagError::Topology(TopologyError::IncompleteLoop { .. })
        ));
    }

    #[test]
    fn outline_follows_boundary_walk() {
        let store = two_squares();
        let key: FaceTagKey = "1_2_3_6".parse().unwrap();
        let outline = ResolveFaceTag::new(key.clone())
            .with_params(WalkParams::with_policy(LoopPolicy::RequireClosed))
            .execute(&store)
            .unwrap();
        let walked = WalkBoundary::new(key.edges().to_vec(), VertexId(1))
            .execute(&store)
            .unwrap();
        assert_eq!(outline.boundary, walked);
        assert_eq!(outline.points, store.points(&walked.vertices).unwrap());
    }

    #[test]
    fn unknown_edge_in_key_fails() {
        let store = two_squares();
        let key: FaceTagKey = "0_99".parse().unwrap();
        assert!(ResolveFaceTag::new(key).execute(&store).is_err());
    }
}
