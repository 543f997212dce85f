//! Lowers a decoded JWW document into a DXF drawing: entity-by-entity
//! geometry classification, pen-to-ACI color mapping, the 16x16 layer
//! matrix flattened to a layer table, and block references resolved to
//! block names.

use std::f64::consts::PI;

use itertools::Itertools;

use crate::dxf;
use crate::dxf::Drawing;
use crate::jww;

/// Substituted for text whose stored height is zero or negative.
const DEFAULT_TEXT_HEIGHT: f64 = 2.5;

/// Converts a JWW document to a DXF drawing.
///
/// The conversion is total: every entity either maps to exactly one DXF
/// entity or is intentionally dropped (temporary construction points).
pub fn convert_document(document: &jww::Document) -> Drawing {
    Drawing {
        layers: convert_layers(document),
        entities: convert_entities(&document.entities, document),
        blocks: convert_blocks(document),
    }
}

/// Flattens the 16x16 layer matrix into 256 DXF layers, in group-major
/// order.  An unnamed layer gets the hex composite "G-L" name that entity
/// lookups synthesize too.
fn convert_layers(document: &jww::Document) -> Vec<dxf::Layer> {
    (0..16usize)
        .cartesian_product(0..16usize)
        .map(|(group, layer)| {
            let source = &document.layer_groups[group].layers[layer];
            dxf::Layer {
                name: match source.name {
                    Some(ref name) if !name.is_empty() => name.clone(),
                    _ => composite_layer_name(group as u16, layer as u16),
                },
                color: ((group * 16 + layer) % 255 + 1) as i16,
                line_type: String::from("CONTINUOUS"),
                frozen: source.state == 0,
                locked: source.protect != 0,
            }
        })
        .collect()
}

fn convert_entities(entities: &[jww::Entity], document: &jww::Document) -> Vec<dxf::Entity> {
    entities
        .iter()
        .filter_map(|entity| convert_entity(entity, document))
        .collect()
}

fn convert_blocks(document: &jww::Document) -> Vec<dxf::Block> {
    document
        .block_defs
        .iter()
        .map(|def| dxf::Block {
            name: def.name.clone(),
            base_x: 0.0,
            base_y: 0.0,
            entities: convert_entities(&def.entities, document),
        })
        .collect()
}

/// Converts one entity, or drops it.  Temporary points are the only
/// entities without a DXF counterpart.
fn convert_entity(entity: &jww::Entity, document: &jww::Document) -> Option<dxf::Entity> {
    let common = dxf::EntityCommon {
        layer: layer_name(document, entity.common.layer_group, entity.common.layer),
        color: map_color(entity.common.pen_color),
        line_type: String::from(jww::PenStyle::from_raw(entity.common.pen_style).line_type_name()),
    };
    let specific = match entity.specific {
        jww::EntityType::Line(ref line) => dxf::EntityType::Line(dxf::Line {
            x1: line.start_x,
            y1: line.start_y,
            x2: line.end_x,
            y2: line.end_y,
        }),
        jww::EntityType::Arc(ref arc) => classify_arc(arc),
        jww::EntityType::Point(ref point) => {
            if point.is_temporary {
                return None;
            }
            dxf::EntityType::ModelPoint(dxf::ModelPoint {
                x: point.x,
                y: point.y,
            })
        }
        jww::EntityType::Text(ref text) => dxf::EntityType::Text(dxf::Text {
            x: text.start_x,
            y: text.start_y,
            height: if text.size_y <= 0.0 {
                DEFAULT_TEXT_HEIGHT
            } else {
                text.size_y
            },
            // JWW stores text angles in degrees already
            rotation: text.angle,
            content: text.content.clone(),
            style: String::from("STANDARD"),
        }),
        jww::EntityType::Solid(ref solid) => dxf::EntityType::Solid(dxf::Solid {
            x1: solid.x1,
            y1: solid.y1,
            x2: solid.x2,
            y2: solid.y2,
            x3: solid.x3,
            y3: solid.y3,
            x4: solid.x4,
            y4: solid.y4,
        }),
        jww::EntityType::BlockRef(ref block_ref) => dxf::EntityType::Insert(dxf::Insert {
            block_name: block_name(document, block_ref.def_number),
            x: block_ref.x,
            y: block_ref.y,
            scale_x: block_ref.scale_x,
            scale_y: block_ref.scale_y,
            rotation: radians_to_degrees(block_ref.rotation),
        }),
    };
    Some(dxf::Entity { common, specific })
}

/// One JWW arc record covers three DXF shapes.  A closed curve with no
/// flattening is a circle; any flattened curve is an ellipse; the rest are
/// circular arcs.
fn classify_arc(arc: &jww::Arc) -> dxf::EntityType {
    if arc.is_full_circle && arc.flatness == 1.0 {
        return dxf::EntityType::Circle(dxf::Circle {
            center_x: arc.center_x,
            center_y: arc.center_y,
            radius: arc.radius,
        });
    }
    if arc.flatness != 1.0 {
        // DXF wants the minor/major ratio <= 1; a flatness above 1 means
        // the stored radius is the minor axis, so swap axes and rotate the
        // tilt a quarter turn
        let mut major_radius = arc.radius;
        let mut minor_ratio = arc.flatness;
        let mut tilt_angle = arc.tilt_angle;
        if minor_ratio > 1.0 {
            major_radius = arc.radius * arc.flatness;
            minor_ratio = 1.0 / arc.flatness;
            tilt_angle += PI / 2.0;
        }
        let (start_param, end_param) = if arc.is_full_circle {
            (0.0, 2.0 * PI)
        } else {
            (arc.start_angle, arc.start_angle + arc.arc_angle)
        };
        return dxf::EntityType::Ellipse(dxf::Ellipse {
            center_x: arc.center_x,
            center_y: arc.center_y,
            major_axis_x: major_radius * tilt_angle.cos(),
            major_axis_y: major_radius * tilt_angle.sin(),
            minor_ratio,
            start_param,
            end_param,
        });
    }
    dxf::EntityType::Arc(dxf::Arc {
        center_x: arc.center_x,
        center_y: arc.center_y,
        radius: arc.radius,
        start_angle: radians_to_degrees(arc.start_angle),
        end_angle: radians_to_degrees(arc.start_angle + arc.arc_angle),
    })
}

/// The DXF layer name for a (group, layer) pair: the layer's own name when
/// it has one, else the hex composite, e.g. "0-0" or "F-A".  Out-of-range
/// indices always take the composite.
fn layer_name(document: &jww::Document, layer_group: u16, layer: u16) -> String {
    if usize::from(layer_group) < 16 && usize::from(layer) < 16 {
        let source = &document.layer_groups[usize::from(layer_group)].layers[usize::from(layer)];
        if let Some(ref name) = source.name {
            if !name.is_empty() {
                return name.clone();
            }
        }
    }
    composite_layer_name(layer_group, layer)
}

fn composite_layer_name(layer_group: u16, layer: u16) -> String {
    format!("{:X}-{:X}", layer_group, layer)
}

/// The block name a definition number resolves to.  Definitions that are
/// missing or unnamed fall back to a synthesized "BLOCK_<n>" name.
fn block_name(document: &jww::Document, def_number: u32) -> String {
    for def in &document.block_defs {
        if def.number == def_number {
            if !def.name.is_empty() {
                return def.name.clone();
            }
            break;
        }
    }
    format!("BLOCK_{}", def_number)
}

/// Maps a JWW pen color to an ACI color index.
///
/// The basic pens 1-9 go through the Jw_cad palette (1 is light blue, 2 is
/// white, 8 is red, ...); SXF extended colors from 100 up land at index 10
/// and beyond.  Zero inherits the layer color.
pub(crate) fn map_color(pen_color: u16) -> i16 {
    match pen_color {
        0 => 0,
        1 => 4,
        2 => 7,
        3 => 3,
        4 => 2,
        5 => 6,
        6 => 5,
        7 => 7,
        8 => 1,
        9 => 8,
        color if color >= 100 => (color - 100 + 10) as i16,
        color => color as i16,
    }
}

fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}
