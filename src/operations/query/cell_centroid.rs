use crate::error::{MeshTagError, OperationError, Result};
use crate::math::polygon_2d::vertex_mean;
use crate::math::Point3;
use crate::topology::{MeshStore, VertexId};

/// Finite-element cell shapes, numbered by their VTK cell-type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Triangle,
    Quad,
    Tetra,
    Hexahedron,
    QuadraticTriangle,
    QuadraticQuad,
    QuadraticTetra,
    QuadraticHexahedron,
}

impl CellKind {
    /// The VTK cell-type code.
    #[must_use]
    pub fn vtk_code(self) -> u8 {
        match self {
            Self::Triangle => 5,
            Self::Quad => 9,
            Self::Tetra => 10,
            Self::Hexahedron => 12,
            Self::QuadraticTriangle => 22,
            Self::QuadraticQuad => 23,
            Self::QuadraticTetra => 24,
            Self::QuadraticHexahedron => 25,
        }
    }

    /// Number of corner nodes. In VTK ordering these come first, before any
    /// mid-side nodes of quadratic cells.
    #[must_use]
    pub fn corner_count(self) -> usize {
        match self {
            Self::Triangle | Self::QuadraticTriangle => 3,
            Self::Quad | Self::QuadraticQuad | Self::Tetra | Self::QuadraticTetra => 4,
            Self::Hexahedron | Self::QuadraticHexahedron => 8,
        }
    }
}

impl TryFrom<u8> for CellKind {
    type Error = MeshTagError;

    fn try_from(code: u8) -> Result<Self> {
        Ok(match code {
            5 => Self::Triangle,
            9 => Self::Quad,
            10 => Self::Tetra,
            12 => Self::Hexahedron,
            22 => Self::QuadraticTriangle,
            23 => Self::QuadraticQuad,
            24 => Self::QuadraticTetra,
            25 => Self::QuadraticHexahedron,
            _ => {
                return Err(
                    OperationError::InvalidInput(format!("unsupported VTK cell type {code}")).into(),
                )
            }
        })
    }
}

/// Computes the label position of a finite-element cell.
///
/// Triangles and tetrahedra use the mean of their corners. Quads and
/// hexahedra use the midpoint of the main diagonal (nodes 0-2 and 0-6),
/// which is the centroid for parallelograms and parallelepipeds. Quadratic
/// cells use their corner nodes only.
pub struct CellCentroid {
    kind: CellKind,
    vertices: Vec<VertexId>,
}

impl CellCentroid {
    /// Creates a new `CellCentroid` query. `vertices` is the cell
    /// connectivity in VTK node order.
    #[must_use]
    pub fn new(kind: CellKind, vertices: Vec<VertexId>) -> Self {
        Self { kind, vertices }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the connectivity lists fewer
    /// nodes than the cell has corners, or an error if a vertex is not in
    /// the store.
    pub fn execute(&self, store: &MeshStore) -> Result<Point3> {
        let corners = self.kind.corner_count();
        if self.vertices.len() < corners {
            return Err(OperationError::InvalidInput(format!(
                "{:?} needs {corners} nodes, got {}",
                self.kind,
                self.vertices.len()
            ))
            .into());
        }

        let diagonal = match self.kind {
            CellKind::Quad | CellKind::QuadraticQuad => Some((0, 2)),
            CellKind::Hexahedron | CellKind::QuadraticHexahedron => Some((0, 6)),
            _ => None,
        };

        if let Some((a, b)) = diagonal {
            let pa = store.vertex(self.vertices[a])?.point;
            let pb = store.vertex(self.vertices[b])?.point;
            return Ok(nalgebra::center(&pa, &pb));
        }

        let points = store.points(&self.vertices[..corners])?;
        vertex_mean(&points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId).collect()
    }

    /// Unit cube corners in VTK hexahedron order, plus a few spare points.
    fn store() -> MeshStore {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        ];
        MeshStore::from_parts(&points, &[]).unwrap()
    }

    #[test]
    fn vtk_codes_round_trip() {
        for code in [5, 9, 10, 12, 22, 23, 24, 25] {
            assert_eq!(CellKind::try_from(code).unwrap().vtk_code(), code);
        }
        assert!(CellKind::try_from(7).is_err());
    }

    #[test]
    fn triangle_mean() {
        let c = CellCentroid::new(CellKind::Triangle, ids(&[0, 9, 10]))
            .execute(&store())
            .unwrap();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
    }

    #[test]
    fn quad_diagonal_midpoint() {
        let c = CellCentroid::new(CellKind::Quad, ids(&[0, 1, 2, 3]))
            .execute(&store())
            .unwrap();
        assert_relative_eq!(c.x, 0.5);
        assert_relative_eq!(c.y, 0.5);
        assert_relative_eq!(c.z, 0.0);
    }

    #[test]
    fn hexahedron_diagonal_midpoint() {
        let c = CellCentroid::new(CellKind::Hexahedron, ids(&[0, 1, 2, 3, 4, 5, 6, 7]))
            .execute(&store())
            .unwrap();
        assert_relative_eq!(c.x, 0.5);
        assert_relative_eq!(c.y, 0.5);
        assert_relative_eq!(c.z, 0.5);
    }

    #[test]
    fn tetra_mean() {
        let c = CellCentroid::new(CellKind::Tetra, ids(&[0, 1, 3, 4]))
            .execute(&store())
            .unwrap();
        assert_relative_eq!(c.x, 0.25);
        assert_relative_eq!(c.y, 0.25);
        assert_relative_eq!(c.z, 0.25);
    }

    #[test]
    fn quadratic_triangle_ignores_mid_side_nodes() {
        let c = CellCentroid::new(CellKind::QuadraticTriangle, ids(&[0, 9, 10, 8, 8, 8]))
            .execute(&store())
            .unwrap();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
    }

    #[test]
    fn short_connectivity_is_rejected() {
        let err = CellCentroid::new(CellKind::Hexahedron, ids(&[0, 1, 2, 3]))
            .execute(&store())
            .unwrap_err();
        assert!(matches!(
            err,
            MeshTagError::Operation(OperationError::InvalidInput(_))
        ));
    }
}
