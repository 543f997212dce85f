use enum_primitive::FromPrimitive;

/// The attribute header shared by every JWW entity record.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EntityBase {
    /// The curve attribute group number.
    pub group: u32,
    /// The line type number; see [`PenStyle`].
    pub pen_style: u8,
    /// The line color number: 1-9 for the basic pens, 100+ for SXF colors.
    pub pen_color: u16,
    /// The line width in internal units.  Only present in the stream for
    /// Ver.3.51 and later; zero otherwise.
    pub pen_width: u16,
    /// The layer number within the layer group (0-15).
    pub layer: u16,
    /// The layer group number (0-15).
    pub layer_group: u16,
    /// Miscellaneous attribute flags.
    pub flags: u16,
}

/// A single decoded drawing entity: the shared attribute header plus the
/// class-specific fields.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Entity {
    pub common: EntityBase,
    pub specific: EntityType,
}

/// The class-specific half of an [`Entity`].  One variant per JWW data
/// class; the set is closed, so both the decoder dispatch and the converter
/// match exhaustively.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum EntityType {
    Line(Line),
    Arc(Arc),
    Point(Point),
    Text(Text),
    Solid(Solid),
    BlockRef(BlockRef),
}

/// A straight line segment (JWW class `CDataSen`).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Line {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

/// An arc, circle, or ellipse (JWW class `CDataEnko`).
///
/// The one record covers all three shapes: `is_full_circle` with a flatness
/// of 1.0 is a circle, any other flatness is an ellipse or elliptical arc,
/// and the rest are circular arcs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Arc {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    /// Starting angle in radians.
    pub start_angle: f64,
    /// Angular extent in radians.
    pub arc_angle: f64,
    /// Rotation of the major axis in radians; zero for circles.
    pub tilt_angle: f64,
    /// Minor/major axis ratio; 1.0 for circles.
    pub flatness: f64,
    pub is_full_circle: bool,
}

/// A point marker or temporary construction point (JWW class `CDataTen`).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Temporary construction points are dropped on conversion.
    pub is_temporary: bool,
    /// The marker glyph code; only meaningful when the pen style marks the
    /// point as a symbol.
    pub code: u32,
    /// Rotation of directional markers.
    pub angle: f64,
    /// Size scale of the marker.
    pub scale: f64,
}

/// A text string (JWW class `CDataMoji`).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Text {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    /// Style flags: +10000 italic, +20000 bold.
    pub text_type: u32,
    pub size_x: f64,
    pub size_y: f64,
    pub spacing: f64,
    /// Rotation in degrees (unlike the radian angles everywhere else).
    pub angle: f64,
    pub font_name: String,
    pub content: String,
}

/// A filled quadrilateral or triangle (JWW class `CDataSolid`).
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
    /// Packed RGB, present when the pen color selects a direct color.
    pub color: u32,
}

/// A block insert (JWW class `CDataBlock`): a reference to a [`BlockDef`]
/// with its own position, scale, and rotation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BlockRef {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Rotation in radians.
    pub rotation: f64,
    /// The number of the referenced block definition.
    pub def_number: u32,
}

/// A block definition (JWW class `CDataList`): a named, reusable collection
/// of entities.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BlockDef {
    pub common: EntityBase,
    pub number: u32,
    pub is_referenced: bool,
    pub name: String,
    pub entities: Vec<Entity>,
}

enum_from_primitive! {
/// The JWW pen styles that select a line pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PenStyle {
    Default = 0,
    Solid = 1,
    Dashed = 2,
    DashDot = 3,
    Center = 4,
    Dot = 5,
    DashedWide = 6,
    DashDotWide = 7,
    CenterWide = 8,
    DotWide = 9,
}
}

impl PenStyle {
    /// Interprets a raw pen style byte.  Styles this crate has no pattern
    /// for (point-marker styles, private extensions) draw as solid lines.
    pub fn from_raw(pen_style: u8) -> PenStyle {
        PenStyle::from_u8(pen_style).unwrap_or(PenStyle::Solid)
    }
    /// The DXF line type name this pen style maps to.
    pub fn line_type_name(self) -> &'static str {
        match self {
            PenStyle::Default | PenStyle::Solid => "CONTINUOUS",
            PenStyle::Dashed => "DASHED",
            PenStyle::DashDot => "DASHDOT",
            PenStyle::Center => "CENTER",
            PenStyle::Dot => "DOT",
            PenStyle::DashedWide => "DASHEDX2",
            PenStyle::DashDotWide => "DASHDOTX2",
            PenStyle::CenterWide => "CENTERX2",
            PenStyle::DotWide => "DOTX2",
        }
    }
}
