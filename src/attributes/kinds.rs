use std::fmt;

use crate::operations::query::CellKind;

/// Degree-of-freedom key a boundary condition prescribes.
///
/// `U*` keys are essential (displacement) conditions, `F*` keys natural
/// (force) conditions; `U` and `Q` are the scalar pair for diffusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dof {
    #[default]
    Ux,
    Uy,
    Uz,
    Fx,
    Fy,
    Fz,
    U,
    Q,
}

impl Dof {
    /// Short name used by the FEM input files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ux => "ux",
            Self::Uy => "uy",
            Self::Uz => "uz",
            Self::Fx => "fx",
            Self::Fy => "fy",
            Self::Fz => "fz",
            Self::U => "u",
            Self::Q => "q",
        }
    }

    /// Returns `true` for essential (prescribed-value) keys.
    #[must_use]
    pub fn is_essential(self) -> bool {
        matches!(self, Self::Ux | Self::Uy | Self::Uz | Self::U)
    }
}

impl fmt::Display for Dof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Finite-element formulations an element attribute can select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ElementType {
    Hex8Equilib,
    Hex8Diffusion,
    #[default]
    Quad4PStrain,
    Quad4PStress,
    Quad4Diffusion,
    Tri3PStrain,
    Tri3PStress,
    Tri3Diffusion,
    Rod,
    Quad8PStrain,
    Quad8PStress,
    Quad8Diffusion,
    Tri6PStrain,
    Tri6PStress,
    Tri6Diffusion,
    Hex20Equilib,
    Hex20Diffusion,
    Tet4Equilib,
    Tet4Diffusion,
    Tet10Equilib,
    Tet10Diffusion,
}

impl ElementType {
    /// Default formulation for a mesh cell shape.
    #[must_use]
    pub fn for_cell(kind: CellKind) -> Self {
        match kind {
            CellKind::Triangle => Self::Tri3PStrain,
            CellKind::Quad => Self::Quad4PStrain,
            CellKind::Tetra => Self::Tet4Equilib,
            CellKind::Hexahedron => Self::Hex8Equilib,
            CellKind::QuadraticTriangle => Self::Tri6PStrain,
            CellKind::QuadraticQuad => Self::Quad8PStrain,
            CellKind::QuadraticTetra => Self::Tet10Equilib,
            CellKind::QuadraticHexahedron => Self::Hex20Equilib,
        }
    }

    /// Returns `true` for scalar diffusion formulations.
    #[must_use]
    pub fn is_diffusion(self) -> bool {
        matches!(
            self,
            Self::Hex8Diffusion
                | Self::Quad4Diffusion
                | Self::Tri3Diffusion
                | Self::Quad8Diffusion
                | Self::Tri6Diffusion
                | Self::Hex20Diffusion
                | Self::Tet4Diffusion
                | Self::Tet10Diffusion
        )
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Constitutive model attached to an element attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Model {
    #[default]
    LinElastic,
    LinDiffusion,
}

impl Model {
    /// Model matching an element formulation.
    #[must_use]
    pub fn for_element(element: ElementType) -> Self {
        if element.is_diffusion() {
            Self::LinDiffusion
        } else {
            Self::LinElastic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dof_names_and_kinds() {
        assert_eq!(Dof::default().to_string(), "ux");
        assert_eq!(Dof::Fz.name(), "fz");
        assert!(Dof::U.is_essential());
        assert!(!Dof::Q.is_essential());
    }

    #[test]
    fn cell_defaults() {
        assert_eq!(ElementType::for_cell(CellKind::Quad), ElementType::Quad4PStrain);
        assert_eq!(
            ElementType::for_cell(CellKind::QuadraticHexahedron),
            ElementType::Hex20Equilib
        );
        assert_eq!(ElementType::Tet10Diffusion.to_string(), "Tet10Diffusion");
    }

    #[test]
    fn model_follows_element() {
        assert_eq!(Model::for_element(ElementType::Tri3Diffusion), Model::LinDiffusion);
        assert_eq!(Model::for_element(ElementType::Rod), Model::LinElastic);
    }
}
