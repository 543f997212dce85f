use crate::jww::entity::{BlockDef, Entity};
use crate::jww::reader;
use crate::JwwResult;

/// A complete decoded JWW drawing.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Document {
    /// The file format version, e.g. `600` for Ver.6.00 or `351` for
    /// Ver.3.51.  The version decides the width of every entity header.
    pub version: u32,
    /// The file memo stored in the header.
    pub memo: String,
    /// The paper size code: 0-4 for A0-A4, 8 for 2A, 9 for 3A, etc.
    pub paper_size: u32,
    /// The layer group that is currently active for writing (0-15).
    pub write_layer_group: u32,
    /// The 16 layer groups of 16 layers each; 256 layers total.
    pub layer_groups: [LayerGroup; 16],
    /// Every drawing entity, in file order.
    pub entities: Vec<Entity>,
    /// The block definitions referenced by block-insert entities.
    pub block_defs: Vec<BlockDef>,
}

impl Document {
    /// Parses a JWW byte buffer.
    ///
    /// Fails on a bad signature, a truncated stream, or an entity record
    /// that cannot be decoded; a missing or implausible block-definition
    /// section is not an error.
    pub fn parse(data: &[u8]) -> JwwResult<Document> {
        reader::parse(data)
    }
}

/// A layer group.  Jw_cad organizes layers into 16 groups of 16, each group
/// with its own display state, drawing scale, and protection.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct LayerGroup {
    /// 0: hidden, 1: display only, 2: editable, 3: write mode.
    pub state: u32,
    /// The active layer for writing within this group (0-15).
    pub write_layer: u32,
    /// The scale denominator, e.g. `100.0` for 1:100.
    pub scale: f64,
    /// Non-zero when the group is protected against modification.
    pub protect: u32,
    pub layers: [Layer; 16],
    /// The user-assigned group name, when one was recovered.
    pub name: Option<String>,
}

/// A single layer within a layer group.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Layer {
    /// 0: hidden, 1: display only, 2: editable, 3: write mode.
    pub state: u32,
    /// Non-zero when the layer is protected against modification.
    pub protect: u32,
    /// The user-assigned layer name, when one was recovered.
    pub name: Option<String>,
}
