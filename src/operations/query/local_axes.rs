use crate::error::{OperationError, Result};
use crate::math::TOLERANCE;
use crate::topology::{EdgeId, MeshStore, VertexId};

/// A block's local coordinate frame expressed as mesh vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalFrame {
    /// Vertex shared by the X and Y axis edges.
    pub origin: VertexId,
    /// Far end of the X axis edge.
    pub x_plus: VertexId,
    /// Far end of the Y axis edge.
    pub y_plus: VertexId,
    /// Far end of the Z axis edge, if one was given and it starts at `origin`.
    pub z_plus: Option<VertexId>,
}

impl LocalFrame {
    /// Returns `true` if the X and Y edges turn counter-clockwise about the
    /// Z edge, or about +Z when the frame has no Z edge.
    ///
    /// # Errors
    ///
    /// Returns an error if a frame vertex is not in the store.
    pub fn is_right_handed(&self, store: &MeshStore) -> Result<bool> {
        let o = store.vertex(self.origin)?.point;
        let x = store.vertex(self.x_plus)?.point - o;
        let y = store.vertex(self.y_plus)?.point - o;
        let n = x.cross(&y);
        Ok(match self.z_plus {
            Some(id) => n.dot(&(store.vertex(id)?.point - o)) > TOLERANCE,
            None => n.z > TOLERANCE,
        })
    }
}

/// Derives a block's local frame from its chosen axis edges.
pub struct LocalAxes {
    x_edge: EdgeId,
    y_edge: EdgeId,
    z_edge: Option<EdgeId>,
}

impl LocalAxes {
    /// Creates a new `LocalAxes` query for a 2D block.
    #[must_use]
    pub fn new(x_edge: EdgeId, y_edge: EdgeId) -> Self {
        Self {
            x_edge,
            y_edge,
            z_edge: None,
        }
    }

    /// Adds a Z axis edge for a 3D block.
    #[must_use]
    pub fn with_z(mut self, z_edge: EdgeId) -> Self {
        self.z_edge = Some(z_edge);
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidSelection` if the X and Y edges are the
    /// same edge or share no vertex, or an error if an edge is not in the
    /// store.
    pub fn execute(&self, store: &MeshStore) -> Result<LocalFrame> {
        if self.x_edge == self.y_edge {
            return Err(OperationError::InvalidSelection(format!(
                "edge {} cannot be both the X and Y axis",
                self.x_edge
            ))
            .into());
        }
        let ex = store.edge(self.x_edge)?;
        let ey = store.edge(self.y_edge)?;

        let (origin, x_plus, y_plus) = if ex.v1 == ey.v1 {
            (ex.v1, ex.v2, ey.v2)
        } else if ex.v1 == ey.v2 {
            (ex.v1, ex.v2, ey.v1)
        } else if ex.v2 == ey.v1 {
            (ex.v2, ex.v1, ey.v2)
        } else if ex.v2 == ey.v2 {
            (ex.v2, ex.v1, ey.v1)
        } else {
            return Err(OperationError::InvalidSelection(format!(
                "axis edges {} and {} do not share a vertex",
                self.x_edge, self.y_edge
            ))
            .into());
        };

        let z_plus = match self.z_edge {
            Some(id) => {
                let ez = store.edge(id)?;
                if ez.v1 == origin {
                    Some(ez.v2)
                } else if ez.v2 == origin {
                    Some(ez.v1)
                } else {
                    tracing::debug!(edge = %id, %origin, "z axis edge does not start at the origin");
                    None
                }
            }
            None => None,
        };

        Ok(LocalFrame {
            origin,
            x_plus,
            y_plus,
            z_plus,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MeshTagError;
    use crate::math::Point3;

    /// Corner of a unit cube at vertex 0, with edges
    /// e0: 1-0 (x), e1: 0-2 (y), e2: 3-0 (z), e3: 1-2 (diagonal), e4: 1-4.
    fn corner() -> MeshStore {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
        ];
        MeshStore::from_parts(&points, &[(1, 0), (0, 2), (3, 0), (1, 2), (1, 4)]).unwrap()
    }

    #[test]
    fn frame_from_shared_vertex() {
        let frame = LocalAxes::new(EdgeId(0), EdgeId(1))
            .execute(&corner())
            .unwrap();
        assert_eq!(frame.origin, VertexId(0));
        assert_eq!(frame.x_plus, VertexId(1));
        assert_eq!(frame.y_plus, VertexId(2));
        assert_eq!(frame.z_plus, None);
    }

    #[test]
    fn z_edge_at_origin() {
        let frame = LocalAxes::new(EdgeId(0), EdgeId(1))
            .with_z(EdgeId(2))
            .execute(&corner())
            .unwrap();
        assert_eq!(frame.z_plus, Some(VertexId(3)));
    }

    #[test]
    fn z_edge_away_from_origin_is_ignored() {
        let frame = LocalAxes::new(EdgeId(0), EdgeId(1))
            .with_z(EdgeId(4))
            .execute(&corner())
            .unwrap();
        assert_eq!(frame.z_plus, None);
    }

    #[test]
    fn disjoint_axes_are_rejected() {
        let err = LocalAxes::new(EdgeId(1), EdgeId(4))
            .execute(&corner())
            .unwrap_err();
        assert!(matches!(
            err,
            MeshTagError::Operation(OperationError::InvalidSelection(_))
        ));
    }

    #[test]
    fn same_edge_for_x_and_y_is_rejected() {
        let err = LocalAxes::new(EdgeId(0), EdgeId(0))
            .execute(&corner())
            .unwrap_err();
        assert!(matches!(
            err,
            MeshTagError::Operation(OperationError::InvalidSelection(_))
        ));
    }

    #[test]
    fn handedness() {
        let store = corner();
        let xy = LocalAxes::new(EdgeId(0), EdgeId(1)).execute(&store).unwrap();
        assert!(xy.is_right_handed(&store).unwrap());
        let yx = LocalAxes::new(EdgeId(1), EdgeId(0)).execute(&store).unwrap();
        assert!(!yx.is_right_handed(&store).unwrap());
        let xyz = LocalAxes::new(EdgeId(0), EdgeId(1))
            .with_z(EdgeId(2))
            .execute(&store)
            .unwrap();
        assert!(xyz.is_right_handed(&store).unwrap());
    }
}
