use crate::{CodePair, CodePairValue};

/// The properties every DXF entity carries: its layer, color, and line type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EntityCommon {
    /// The name of the layer the entity lives on.
    pub layer: String,
    /// The ACI color number; 0 inherits the layer color.
    pub color: i16,
    /// The line type name, e.g. `CONTINUOUS`.
    pub line_type: String,
}

impl Default for EntityCommon {
    fn default() -> Self {
        EntityCommon {
            layer: String::from("0"),
            color: 0,
            line_type: String::from("CONTINUOUS"),
        }
    }
}

/// A single DXF entity: shared properties plus the variant-specific
/// geometry.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Entity {
    pub common: EntityCommon,
    pub specific: EntityType,
}

/// The geometry half of an [`Entity`].  The set is closed; the writer
/// matches it exhaustively.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum EntityType {
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Ellipse(Ellipse),
    ModelPoint(ModelPoint),
    Text(Text),
    Solid(Solid),
    Insert(Insert),
}

/// A `LINE` entity.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A `CIRCLE` entity.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Circle {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

/// An `ARC` entity.  Angles are in degrees, counter-clockwise from the
/// positive X axis.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Arc {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// An `ELLIPSE` entity.  The major axis is an endpoint vector relative to
/// the center; the parameters are in radians.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Ellipse {
    pub center_x: f64,
    pub center_y: f64,
    pub major_axis_x: f64,
    pub major_axis_y: f64,
    /// The minor/major axis ratio, in (0, 1].
    pub minor_ratio: f64,
    pub start_param: f64,
    pub end_param: f64,
}

/// A `POINT` entity.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ModelPoint {
    pub x: f64,
    pub y: f64,
}

/// A `TEXT` entity.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub height: f64,
    /// Rotation in degrees; only written when non-zero.
    pub rotation: f64,
    pub content: String,
    /// The text style name; only written when non-empty.
    pub style: String,
}

/// A `SOLID` entity: a filled triangle or quadrilateral.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Solid {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub x3: f64,
    pub y3: f64,
    pub x4: f64,
    pub y4: f64,
}

/// An `INSERT` entity: a block reference with position, scale, and
/// rotation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Insert {
    pub block_name: String,
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl Default for Insert {
    fn default() -> Self {
        Insert {
            block_name: String::new(),
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
        }
    }
}

impl Entity {
    /// Creates a new entity with default common values.
    pub fn new(specific: EntityType) -> Self {
        Entity {
            common: Default::default(),
            specific,
        }
    }

    /// The DXF type name of this entity, e.g. `"LINE"`.
    pub fn type_name(&self) -> &'static str {
        match self.specific {
            EntityType::Line(_) => "LINE",
            EntityType::Circle(_) => "CIRCLE",
            EntityType::Arc(_) => "ARC",
            EntityType::Ellipse(_) => "ELLIPSE",
            EntityType::ModelPoint(_) => "POINT",
            EntityType::Text(_) => "TEXT",
            EntityType::Solid(_) => "SOLID",
            EntityType::Insert(_) => "INSERT",
        }
    }

    /// The fixed, ordered code pair sequence this entity serializes to.
    pub(crate) fn code_pairs(&self) -> Vec<CodePair> {
        let mut pairs = vec![CodePair::new_str(0, self.type_name())];
        match self.specific {
            EntityType::Line(ref line) => {
                self.add_common_pairs(&mut pairs);
                pairs.push(CodePair::new_f64(10, line.x1));
                pairs.push(CodePair::new_f64(20, line.y1));
                pairs.push(CodePair::new_f64(30, 0.0));
                pairs.push(CodePair::new_f64(11, line.x2));
                pairs.push(CodePair::new_f64(21, line.y2));
                pairs.push(CodePair::new_f64(31, 0.0));
            }
            EntityType::Circle(ref circle) => {
                self.add_common_pairs(&mut pairs);
                pairs.push(CodePair::new_f64(10, circle.center_x));
                pairs.push(CodePair::new_f64(20, circle.center_y));
                pairs.push(CodePair::new_f64(30, 0.0));
                pairs.push(CodePair::new_f64(40, circle.radius));
            }
            EntityType::Arc(ref arc) => {
                self.add_common_pairs(&mut pairs);
                pairs.push(CodePair::new_f64(10, arc.center_x));
                pairs.push(CodePair::new_f64(20, arc.center_y));
                pairs.push(CodePair::new_f64(30, 0.0));
                pairs.push(CodePair::new_f64(40, arc.radius));
                pairs.push(CodePair::new_f64(50, arc.start_angle));
                pairs.push(CodePair::new_f64(51, arc.end_angle));
            }
            EntityType::Ellipse(ref ellipse) => {
                self.add_common_pairs(&mut pairs);
                pairs.push(CodePair::new_f64(10, ellipse.center_x));
                pairs.push(CodePair::new_f64(20, ellipse.center_y));
                pairs.push(CodePair::new_f64(30, 0.0));
                pairs.push(CodePair::new_f64(11, ellipse.major_axis_x));
                pairs.push(CodePair::new_f64(21, ellipse.major_axis_y));
                pairs.push(CodePair::new_f64(31, 0.0));
                pairs.push(CodePair::new_f64(40, ellipse.minor_ratio));
                pairs.push(CodePair::new_f64(41, ellipse.start_param));
                pairs.push(CodePair::new_f64(42, ellipse.end_param));
            }
            EntityType::ModelPoint(ref point) => {
                self.add_common_pairs(&mut pairs);
                pairs.push(CodePair::new_f64(10, point.x));
                pairs.push(CodePair::new_f64(20, point.y));
                pairs.push(CodePair::new_f64(30, 0.0));
            }
            EntityType::Text(ref text) => {
                // text reaches readers that choke on raw non-ASCII, so both
                // the content and the layer reference get the escape pass
                pairs.push(CodePair::new_str(
                    8,
                    &CodePairValue::escape_unicode(&self.common.layer),
                ));
                pairs.push(CodePair::new_i16(62, self.common.color));
                pairs.push(CodePair::new_str(6, &self.common.line_type));
                pairs.push(CodePair::new_f64(10, text.x));
                pairs.push(CodePair::new_f64(20, text.y));
                pairs.push(CodePair::new_f64(30, 0.0));
                pairs.push(CodePair::new_f64(40, text.height));
                pairs.push(CodePair::new_str(
                    1,
                    &CodePairValue::escape_unicode(&text.content),
                ));
                if text.rotation != 0.0 {
                    pairs.push(CodePair::new_f64(50, text.rotation));
                }
                if !text.style.is_empty() {
                    pairs.push(CodePair::new_str(7, &text.style));
                }
            }
            EntityType::Solid(ref solid) => {
                self.add_common_pairs(&mut pairs);
                pairs.push(CodePair::new_f64(10, solid.x1));
                pairs.push(CodePair::new_f64(20, solid.y1));
                pairs.push(CodePair::new_f64(30, 0.0));
                pairs.push(CodePair::new_f64(11, solid.x2));
                pairs.push(CodePair::new_f64(21, solid.y2));
                pairs.push(CodePair::new_f64(31, 0.0));
                pairs.push(CodePair::new_f64(12, solid.x3));
                pairs.push(CodePair::new_f64(22, solid.y3));
                pairs.push(CodePair::new_f64(32, 0.0));
                pairs.push(CodePair::new_f64(13, solid.x4));
                pairs.push(CodePair::new_f64(23, solid.y4));
                pairs.push(CodePair::new_f64(33, 0.0));
            }
            EntityType::Insert(ref insert) => {
                self.add_common_pairs(&mut pairs);
                pairs.push(CodePair::new_str(2, &insert.block_name));
                pairs.push(CodePair::new_f64(10, insert.x));
                pairs.push(CodePair::new_f64(20, insert.y));
                pairs.push(CodePair::new_f64(30, 0.0));
                pairs.push(CodePair::new_f64(41, insert.scale_x));
                pairs.push(CodePair::new_f64(42, insert.scale_y));
                pairs.push(CodePair::new_f64(43, 1.0));
                pairs.push(CodePair::new_f64(50, insert.rotation));
            }
        }
        pairs
    }

    fn add_common_pairs(&self, pairs: &mut Vec<CodePair>) {
        pairs.push(CodePair::new_str(8, &self.common.layer));
        pairs.push(CodePair::new_i16(62, self.common.color));
        pairs.push(CodePair::new_str(6, &self.common.line_type));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes_of(entity: &Entity) -> Vec<i32> {
        entity.code_pairs().iter().map(|pair| pair.code).collect()
    }

    #[test]
    fn line_pair_sequence() {
        let entity = Entity::new(EntityType::Line(Line::default()));
        assert_eq!(vec![0, 8, 62, 6, 10, 20, 30, 11, 21, 31], codes_of(&entity));
    }

    #[test]
    fn arc_pair_sequence() {
        let entity = Entity::new(EntityType::Arc(Arc::default()));
        assert_eq!(vec![0, 8, 62, 6, 10, 20, 30, 40, 50, 51], codes_of(&entity));
    }

    #[test]
    fn ellipse_pair_sequence() {
        let entity = Entity::new(EntityType::Ellipse(Ellipse::default()));
        assert_eq!(
            vec![0, 8, 62, 6, 10, 20, 30, 11, 21, 31, 40, 41, 42],
            codes_of(&entity)
        );
    }

    #[test]
    fn solid_emits_all_four_corners() {
        let entity = Entity::new(EntityType::Solid(Solid::default()));
        assert_eq!(
            vec![0, 8, 62, 6, 10, 20, 30, 11, 21, 31, 12, 22, 32, 13, 23, 33],
            codes_of(&entity)
        );
    }

    #[test]
    fn text_rotation_and_style_are_conditional() {
        let mut text = Text {
            content: String::from("hi"),
            height: 2.5,
            ..Default::default()
        };
        let entity = Entity::new(EntityType::Text(text.clone()));
        assert_eq!(vec![0, 8, 62, 6, 10, 20, 30, 40, 1], codes_of(&entity));

        text.rotation = 45.0;
        text.style = String::from("STANDARD");
        let entity = Entity::new(EntityType::Text(text));
        assert_eq!(
            vec![0, 8, 62, 6, 10, 20, 30, 40, 1, 50, 7],
            codes_of(&entity)
        );
    }

    #[test]
    fn insert_carries_unit_z_scale() {
        let entity = Entity::new(EntityType::Insert(Insert::default()));
        let pairs = entity.code_pairs();
        assert_eq!(
            vec![0, 8, 62, 6, 2, 10, 20, 30, 41, 42, 43, 50],
            codes_of(&entity)
        );
        assert_eq!(CodePair::new_f64(43, 1.0), pairs[10]);
    }

    #[test]
    fn text_escapes_content_and_layer() {
        let mut entity = Entity::new(EntityType::Text(Text {
            content: String::from("寸法"),
            ..Default::default()
        }));
        entity.common.layer = String::from("図面");
        let pairs = entity.code_pairs();
        assert_eq!(
            CodePair::new_str(8, "\\U+56F3\\U+9762"),
            pairs[1]
        );
        assert!(pairs
            .iter()
            .any(|pair| *pair == CodePair::new_str(1, "\\U+5BF8\\U+6CD5")));
    }
}
