use crate::error::{OperationError, Result};
use crate::math::colour::Colour;
use crate::math::Point3;
use crate::operations::query::LocalFrame;
use crate::topology::EdgeId;

use super::kinds::{Dof, ElementType, Model};

/// A meshing region, identified by a seed point inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub tag: i32,
    /// Largest triangle area the mesher may produce; `None` leaves it free.
    pub max_area: Option<f64>,
    pub point: Point3,
}

impl Region {
    /// A new untagged region seeded at `point`.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self {
            tag: -1,
            max_area: None,
            point,
        }
    }
}

/// A hole in the meshed domain, identified by a seed point inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    pub point: Point3,
}

/// Boundary condition applied to the mesh node nearest a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeBoundary {
    pub point: Point3,
    pub dof: Dof,
    pub value: f64,
}

impl NodeBoundary {
    /// A new zero-valued `ux` condition at `point`.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self {
            point,
            dof: Dof::default(),
            value: 0.0,
        }
    }
}

/// Boundary condition applied to every edge carrying `tag`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeBoundary {
    pub tag: i32,
    pub dof: Dof,
    pub value: f64,
}

impl Default for EdgeBoundary {
    fn default() -> Self {
        Self {
            tag: -10,
            dof: Dof::default(),
            value: 0.0,
        }
    }
}

/// Boundary condition applied to every face carrying `tag`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceBoundary {
    pub tag: i32,
    pub dof: Dof,
    pub value: f64,
    pub colour: Colour,
}

impl Default for FaceBoundary {
    fn default() -> Self {
        Self {
            tag: -100,
            dof: Dof::default(),
            value: 0.0,
            colour: Colour::default(),
        }
    }
}

/// Element formulation and material selection for cells carrying `tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementAttribute {
    pub tag: i32,
    pub element: ElementType,
    pub model: Model,
    pub material: Option<u32>,
    pub initial_state: Option<u32>,
}

impl Default for ElementAttribute {
    fn default() -> Self {
        Self {
            tag: -1,
            element: ElementType::default(),
            model: Model::default(),
            material: None,
            initial_state: None,
        }
    }
}

/// Local axis of a structured block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A structured meshing block bounded by a set of edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub tag: i32,
    edges: Vec<EdgeId>,
    /// Edges chosen as the local X, Y and Z axes.
    pub axes: [Option<EdgeId>; 3],
    /// Frame derived from `axes`, once X and Y are both set.
    pub frame: Option<LocalFrame>,
    /// Number of divisions along each local axis.
    pub divisions: [u32; 3],
    /// Grading coefficient along each local axis.
    pub coefficients: [f64; 3],
    /// Whether divisions along each axis are graded non-linearly.
    pub nonlinear: [bool; 3],
}

impl Block {
    /// Creates a block from its bounding edges.
    ///
    /// A 2D block needs 4 or 8 edges (linear or quadratic sides), a 3D block
    /// 12 or 24.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidSelection` for any other edge count.
    pub fn new(edges: Vec<EdgeId>, three_d: bool) -> Result<Self> {
        let n = edges.len();
        let valid = if three_d {
            n == 12 || n == 24
        } else {
            n == 4 || n == 8
        };
        if !valid {
            let (dim, expected) = if three_d { ("3D", "12 or 24") } else { ("2D", "4 or 8") };
            return Err(OperationError::InvalidSelection(format!(
                "a {dim} block needs {expected} edges, got {n}"
            ))
            .into());
        }
        Ok(Self {
            tag: -1,
            edges,
            axes: [None; 3],
            frame: None,
            divisions: [2; 3],
            coefficients: [0.0; 3],
            nonlinear: [false; 3],
        })
    }

    /// The block's bounding edges in selection order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns `true` for a 3D block.
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.edges.len() >= 12
    }

    /// Returns `true` if `edge` bounds this block.
    #[must_use]
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    /// Returns `true` if both blocks are bounded by the same edges, in any
    /// order.
    #[must_use]
    pub fn same_edges(&self, other: &Block) -> bool {
        let mut a = self.edges.clone();
        let mut b = other.edges.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    /// The edge assigned to `axis`, if any.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> Option<EdgeId> {
        self.axes[axis_index(axis)]
    }

    pub(crate) fn set_axis(&mut self, axis: Axis, edge: EdgeId) {
        self.axes[axis_index(axis)] = Some(edge);
    }
}

fn axis_index(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    }
}

/// Tag carried by a mesh edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeTag {
    pub tag: i32,
}

/// Tag and display colour carried by a face selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceTag {
    pub tag: i32,
    pub colour: Colour,
}
