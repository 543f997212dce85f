use crate::dxf::entity::Entity;

/// A DXF block definition: a named, reusable collection of entities
/// inserted by [`Insert`](crate::dxf::Insert) references.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Block {
    /// The block name.
    pub name: String,
    /// The block's base insertion point.
    pub base_x: f64,
    pub base_y: f64,
    /// The entities contained by the block.
    pub entities: Vec<Entity>,
}
