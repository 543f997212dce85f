//! The JWW side: the binary decoder and the source document model.

pub(crate) mod byte_reader;
pub(crate) mod class_registry;

mod document;
pub use self::document::{Document, Layer, LayerGroup};

mod entity;
pub use self::entity::{
    Arc, BlockDef, BlockRef, Entity, EntityBase, EntityType, Line, PenStyle, Point, Solid, Text,
};

mod reader;
