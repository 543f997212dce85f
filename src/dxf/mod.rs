//! The DXF side: the target document model and the ASCII writer.

mod block;
pub use self::block::Block;

mod drawing;
pub use self::drawing::Drawing;

mod entity;
pub use self::entity::{
    Arc, Circle, Ellipse, Entity, EntityCommon, EntityType, Insert, Line, ModelPoint, Solid, Text,
};

mod geometry;
pub use self::geometry::Bounds;

mod table;
pub use self::table::Layer;

mod transform;
