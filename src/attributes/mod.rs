//! FEM attributes attached to a tagged mesh.
//!
//! Records are plain data owned by an [`AttributeStore`]; they refer to mesh
//! entities by [`EdgeId`] and never hold references into the mesh itself.

pub mod kinds;
pub mod records;

pub use kinds::{Dof, ElementType, Model};
pub use records::{
    Axis, Block, EdgeBoundary, EdgeTag, ElementAttribute, FaceBoundary, FaceTag, Hole,
    NodeBoundary, Region,
};

use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::error::{OperationError, Result, TopologyError};
use crate::math::colour::Colour;
use crate::math::Point3;
use crate::operations::query::LocalAxes;
use crate::operations::tagging::{FaceTagKey, FaceTagOutline, ResolveFaceTag};
use crate::operations::walk::WalkParams;
use crate::topology::{EdgeId, MeshStore};

slotmap::new_key_type! {
    /// Unique identifier for a region seed.
    pub struct RegionId;
    /// Unique identifier for a hole seed.
    pub struct HoleId;
    /// Unique identifier for a nodal boundary condition.
    pub struct NodeBoundaryId;
    /// Unique identifier for an edge boundary condition.
    pub struct EdgeBoundaryId;
    /// Unique identifier for a face boundary condition.
    pub struct FaceBoundaryId;
    /// Unique identifier for an element attribute.
    pub struct ElementAttributeId;
    /// Unique identifier for a structured block.
    pub struct BlockId;
}

/// Generates insert/lookup/remove methods for one record table.
macro_rules! record_table {
    ($field:ident, $id:ty, $record:ty, $name:literal, $add:ident, $get:ident, $get_mut:ident, $remove:ident, $iter:ident) => {
        #[doc = concat!("Inserts a ", $name, " and returns its ID.")]
        pub fn $add(&mut self, record: $record) -> $id {
            self.$field.insert(record)
        }

        #[doc = concat!("Returns a reference to the ", $name, ", or an error if not found.")]
        ///
        /// # Errors
        ///
        /// Returns an error if the entity is not found in the store.
        pub fn $get(&self, id: $id) -> std::result::Result<&$record, TopologyError> {
            self.$field
                .get(id)
                .ok_or_else(|| TopologyError::EntityNotFound($name.into()))
        }

        #[doc = concat!("Returns a mutable reference to the ", $name, ", or an error if not found.")]
        ///
        /// # Errors
        ///
        /// Returns an error if the entity is not found in the store.
        pub fn $get_mut(&mut self, id: $id) -> std::result::Result<&mut $record, TopologyError> {
            self.$field
                .get_mut(id)
                .ok_or_else(|| TopologyError::EntityNotFound($name.into()))
        }

        #[doc = concat!("Removes a ", $name, ", returning it if it was present.")]
        pub fn $remove(&mut self, id: $id) -> Option<$record> {
            self.$field.remove(id)
        }

        #[doc = concat!("Iterates over every ", $name, ".")]
        pub fn $iter(&self) -> impl Iterator<Item = ($id, &$record)> {
            self.$field.iter()
        }
    };
}

/// Owns every FEM attribute of one mesh object.
#[derive(Debug, Default, Clone)]
pub struct AttributeStore {
    regions: SlotMap<RegionId, Region>,
    holes: SlotMap<HoleId, Hole>,
    node_boundaries: SlotMap<NodeBoundaryId, NodeBoundary>,
    edge_boundaries: SlotMap<EdgeBoundaryId, EdgeBoundary>,
    face_boundaries: SlotMap<FaceBoundaryId, FaceBoundary>,
    element_attributes: SlotMap<ElementAttributeId, ElementAttribute>,
    blocks: SlotMap<BlockId, Block>,
    edge_tags: BTreeMap<EdgeId, EdgeTag>,
    face_tags: BTreeMap<FaceTagKey, FaceTag>,
}

impl AttributeStore {
    /// Creates a new, empty attribute store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Record tables ---

    record_table!(regions, RegionId, Region, "region", add_region, region, region_mut, remove_region, regions);
    record_table!(holes, HoleId, Hole, "hole", add_hole, hole, hole_mut, remove_hole, holes);
    record_table!(
        node_boundaries,
        NodeBoundaryId,
        NodeBoundary,
        "node boundary",
        add_node_boundary,
        node_boundary,
        node_boundary_mut,
        remove_node_boundary,
        node_boundaries
    );
    record_table!(
        edge_boundaries,
        EdgeBoundaryId,
        EdgeBoundary,
        "edge boundary",
        add_edge_boundary,
        edge_boundary,
        edge_boundary_mut,
        remove_edge_boundary,
        edge_boundaries
    );
    record_table!(
        face_boundaries,
        FaceBoundaryId,
        FaceBoundary,
        "face boundary",
        add_face_boundary,
        face_boundary,
        face_boundary_mut,
        remove_face_boundary,
        face_boundaries
    );
    record_table!(
        element_attributes,
        ElementAttributeId,
        ElementAttribute,
        "element attribute",
        add_element_attribute,
        element_attribute,
        element_attribute_mut,
        remove_element_attribute,
        element_attributes
    );

    // --- Block operations ---

    /// Inserts a block and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Duplicate` if another block is bounded by the
    /// same edges.
    pub fn add_block(&mut self, block: Block) -> Result<BlockId> {
        if self.blocks.values().any(|b| b.same_edges(&block)) {
            return Err(OperationError::Duplicate("block with these edges".to_owned()).into());
        }
        Ok(self.blocks.insert(block))
    }

    /// Returns a reference to the block, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn block(&self, id: BlockId) -> std::result::Result<&Block, TopologyError> {
        self.blocks
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("block".into()))
    }

    /// Returns a mutable reference to the block, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn block_mut(&mut self, id: BlockId) -> std::result::Result<&mut Block, TopologyError> {
        self.blocks
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("block".into()))
    }

    /// Removes a block, returning it if it was present.
    pub fn remove_block(&mut self, id: BlockId) -> Option<Block> {
        self.blocks.remove(id)
    }

    /// Iterates over every block.
    pub fn blocks(&self) -> impl Iterator<Item = (BlockId, &Block)> {
        self.blocks.iter()
    }

    /// Assigns the single selected edge as one of the block's local axes.
    ///
    /// Once both X and Y are set the block's local frame is recomputed from
    /// the mesh, including the Z edge when one is set. The block is left
    /// untouched if any step fails.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidSelection` if `selection` is not
    /// exactly one edge, the edge does not bound the block, `axis` is Z on a
    /// 2D block, or the X and Y edges are the same or share no vertex.
    pub fn set_block_axis(
        &mut self,
        id: BlockId,
        axis: Axis,
        selection: &[EdgeId],
        mesh: &MeshStore,
    ) -> Result<()> {
        let block = self.block(id)?;
        let &[edge] = selection else {
            return Err(OperationError::InvalidSelection(format!(
                "select exactly one edge for the {axis:?} axis, got {}",
                selection.len()
            ))
            .into());
        };
        if axis == Axis::Z && !block.is_3d() {
            return Err(OperationError::InvalidSelection(
                "a 2D block has no Z axis".to_owned(),
            )
            .into());
        }
        if !block.contains(edge) {
            return Err(OperationError::InvalidSelection(format!(
                "edge {edge} does not bound the block"
            ))
            .into());
        }

        let mut updated = block.clone();
        updated.set_axis(axis, edge);
        updated.frame = match (updated.axis(Axis::X), updated.axis(Axis::Y)) {
            (Some(x), Some(y)) => {
                let mut query = LocalAxes::new(x, y);
                if let Some(z) = updated.axis(Axis::Z) {
                    query = query.with_z(z);
                }
                Some(query.execute(mesh)?)
            }
            _ => None,
        };

        *self.block_mut(id)? = updated;
        Ok(())
    }

    // --- Edge tags ---

    /// Tags an edge. Tag `0` clears the edge's tag.
    ///
    /// Returns the previous tag, if any.
    pub fn set_edge_tag(&mut self, edge: EdgeId, tag: i32) -> Option<EdgeTag> {
        if tag == 0 {
            self.edge_tags.remove(&edge)
        } else {
            self.edge_tags.insert(edge, EdgeTag { tag })
        }
    }

    /// The tag carried by `edge`, if any.
    #[must_use]
    pub fn edge_tag(&self, edge: EdgeId) -> Option<EdgeTag> {
        self.edge_tags.get(&edge).copied()
    }

    /// Every tagged edge, ordered by edge ID.
    pub fn edge_tags(&self) -> impl Iterator<Item = (EdgeId, EdgeTag)> + '_ {
        self.edge_tags.iter().map(|(&id, &tag)| (id, tag))
    }

    /// Edges carrying `tag`, ordered by edge ID.
    #[must_use]
    pub fn edges_with_tag(&self, tag: i32) -> Vec<EdgeId> {
        self.edge_tags
            .iter()
            .filter(|(_, t)| t.tag == tag)
            .map(|(&id, _)| id)
            .collect()
    }

    /// Label positions for every tagged edge.
    ///
    /// # Errors
    ///
    /// Returns an error if a tagged edge is not in the mesh.
    pub fn edge_tag_labels(&self, mesh: &MeshStore) -> Result<Vec<(EdgeId, i32, Point3)>> {
        self.edge_tags
            .iter()
            .map(|(&id, t)| -> Result<(EdgeId, i32, Point3)> {
                Ok((id, t.tag, mesh.edge_label_point(id)?))
            })
            .collect()
    }

    // --- Face tags ---

    /// Tags a face selection. Tag `0` clears it.
    ///
    /// Returns the previous tag, if any.
    pub fn set_face_tag(&mut self, key: FaceTagKey, tag: i32, colour: Colour) -> Option<FaceTag> {
        if tag == 0 {
            self.face_tags.remove(&key)
        } else {
            self.face_tags.insert(key, FaceTag { tag, colour })
        }
    }

    /// The tag carried by a face selection, if any.
    #[must_use]
    pub fn face_tag(&self, key: &FaceTagKey) -> Option<FaceTag> {
        self.face_tags.get(key).copied()
    }

    /// Every tagged face, ordered by key.
    pub fn face_tags(&self) -> impl Iterator<Item = (&FaceTagKey, &FaceTag)> {
        self.face_tags.iter()
    }

    /// Repaints every face tagged `tag`. Returns how many were changed.
    pub fn recolour_face_tags(&mut self, tag: i32, colour: Colour) -> usize {
        let mut count = 0;
        for face in self.face_tags.values_mut().filter(|f| f.tag == tag) {
            face.colour = colour;
            count += 1;
        }
        count
    }

    /// Resolves every face tag against the mesh.
    ///
    /// Tags whose edges no longer resolve, or whose walk `params.policy`
    /// rejects, are skipped with a warning.
    #[must_use]
    pub fn face_tag_outlines(
        &self,
        mesh: &MeshStore,
        params: WalkParams,
    ) -> Vec<(&FaceTagKey, FaceTag, FaceTagOutline)> {
        let mut out = Vec::with_capacity(self.face_tags.len());
        for (key, face) in &self.face_tags {
            match ResolveFaceTag::new(key.clone())
                .with_params(params)
                .execute(mesh)
            {
                Ok(outline) => out.push((key, *face, outline)),
                Err(e) => tracing::warn!(%key, tag = face.tag, error = %e, "skipping face tag"),
            }
        }
        out
    }
}
