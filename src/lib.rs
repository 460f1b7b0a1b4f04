//! Boundary-loop resolution and face-tag geometry for tagged FEM meshes.
//!
//! A face tag is an unordered selection of mesh edges. [`operations::walk`]
//! orders such a selection into a loop, [`operations::query`] measures it,
//! and [`tessellation`] turns it into triangles for display. FEM attributes
//! (regions, boundary conditions, structured blocks) live in an
//! [`attributes::AttributeStore`] next to the [`topology::MeshStore`] they
//! refer to.

pub mod attributes;
pub mod error;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod topology;

pub use error::{MeshTagError, Result};
