use crate::jww::byte_reader::ByteReader;
use crate::jww::class_registry::ClassRegistry;
use crate::jww::document::{Document, LayerGroup};
use crate::jww::entity::*;
use crate::{JwwError, JwwResult};

/// The first eight bytes of every JWW file.
const SIGNATURE: &[u8] = b"JwwData.";

/// Every serialized entity class name starts with this.
const CLASS_NAME_PREFIX: &[u8] = b"CData";

/// Record tag announcing a new class definition.
const NEW_CLASS_TAG: u16 = 0xFFFF;

/// Record tag for a null object.
const NULL_OBJECT_TAG: u16 = 0x8000;

/// Ver.3.51 added the pen width to the entity header.
const PEN_WIDTH_MIN_VERSION: u32 = 351;

/// Ver.4.20 appended SXF data to dimension records.
const DIMENSION_SXF_MIN_VERSION: u32 = 420;

/// A block-definition count beyond this is garbage, not a count.
const MAX_BLOCK_DEFS: u32 = 10_000;

pub(crate) fn parse(data: &[u8]) -> JwwResult<Document> {
    if data.len() < SIGNATURE.len() || &data[..SIGNATURE.len()] != SIGNATURE {
        return Err(JwwError::InvalidSignature);
    }

    let mut reader = ByteReader::new(data);
    reader.skip(SIGNATURE.len(), "signature")?;

    let mut document = Document {
        version: reader.read_u32("version")?,
        memo: reader.read_c_string("memo")?,
        paper_size: reader.read_u32("paper size")?,
        write_layer_group: reader.read_u32("active layer group")?,
        ..Default::default()
    };
    read_layer_groups(&mut reader, &mut document.layer_groups)?;

    // The settings between the layer matrix and the entity list vary in
    // width by version and content; the entity list is located by scanning
    // for its first class definition instead of walking them.
    let offset = find_entity_list_offset(data, document.version)
        .ok_or(JwwError::EntityListNotFound)?;

    let mut decoder = EntityDecoder {
        reader: ByteReader::starting_at(data, offset),
        version: document.version,
    };
    document.entities = decoder.read_entity_list()?;
    document.block_defs = decoder.read_block_def_list();

    Ok(document)
}

fn read_layer_groups(
    reader: &mut ByteReader,
    layer_groups: &mut [LayerGroup; 16],
) -> JwwResult<()> {
    for group in layer_groups.iter_mut() {
        group.state = reader.read_u32("layer group state")?;
        group.write_layer = reader.read_u32("active layer")?;
        group.scale = reader.read_f64("layer group scale")?;
        group.protect = reader.read_u32("layer group protect")?;
        for layer in group.layers.iter_mut() {
            layer.state = reader.read_u32("layer state")?;
            layer.protect = reader.read_u32("layer protect")?;
        }
    }
    Ok(())
}

/// Scans for the entity list: a 16-bit count, then `0xFF 0xFF`, the file
/// version as the class schema, a class name length in [8, 20], and a class
/// name starting with `CData`.  Returns the offset of the count word.
///
/// The scan starts past the fixed prefix (offset 100 is safely inside it)
/// and stops 20 bytes short of the end, the smallest width the pattern
/// itself needs.
fn find_entity_list_offset(data: &[u8], version: u32) -> Option<usize> {
    let schema = (version as u16).to_le_bytes();
    for i in 100..data.len().saturating_sub(20) {
        if data[i] != 0xFF || data[i + 1] != 0xFF {
            continue;
        }
        if data[i + 2] != schema[0] || data[i + 3] != schema[1] {
            continue;
        }
        let name_len = usize::from(data[i + 4]) + usize::from(data[i + 5]) * 256;
        if (8..=20).contains(&name_len)
            && i + 6 + name_len <= data.len()
            && data[i + 6..].starts_with(CLASS_NAME_PREFIX)
        {
            return Some(i - 2);
        }
    }
    None
}

struct EntityDecoder<'a> {
    reader: ByteReader<'a>,
    version: u32,
}

impl<'a> EntityDecoder<'a> {
    /// Reads one entity list: a 16-bit count followed by that many records
    /// under a fresh class registry.  Null records contribute nothing.
    fn read_entity_list(&mut self) -> JwwResult<Vec<Entity>> {
        let count = self.reader.read_u16("entity count")?;
        let mut registry = ClassRegistry::new();
        let mut entities = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            if let Some(entity) = self.read_entity_record(&mut registry)? {
                entities.push(entity);
            }
        }
        Ok(entities)
    }

    fn read_entity_record(&mut self, registry: &mut ClassRegistry) -> JwwResult<Option<Entity>> {
        let tag = self.reader.read_u16("record tag")?;
        let class_name = match tag {
            NEW_CLASS_TAG => {
                let name = self.read_class_definition()?;
                registry.define_class(name.clone());
                name
            }
            NULL_OBJECT_TAG => return Ok(None),
            _ => registry.resolve(tag)?.to_string(),
        };
        let entity = self.read_entity_of_class(&class_name)?;
        registry.note_instance();
        Ok(Some(entity))
    }

    fn read_class_definition(&mut self) -> JwwResult<String> {
        self.reader.read_u16("class schema")?;
        let name_len = self.reader.read_u16("class name length")?;
        let name_bytes = self.reader.read_bytes(usize::from(name_len), "class name")?;
        Ok(String::from_utf8_lossy(name_bytes).into_owned())
    }

    fn read_entity_of_class(&mut self, class_name: &str) -> JwwResult<Entity> {
        match class_name {
            "CDataSen" => self.read_line(),
            "CDataEnko" => self.read_arc(),
            "CDataTen" => self.read_point(),
            "CDataMoji" => self.read_text(),
            "CDataSolid" => self.read_solid(),
            "CDataBlock" => self.read_block_ref(),
            "CDataSunpou" => self.read_dimension(),
            _ => Err(JwwError::UnknownEntityClass(class_name.to_string())),
        }
    }

    /// The attribute header every record starts with.  The pen width only
    /// exists in the stream from Ver.3.51 on; this is the one place that
    /// branches on the version.
    fn read_entity_base(&mut self) -> JwwResult<EntityBase> {
        Ok(EntityBase {
            group: self.reader.read_u32("attribute group")?,
            pen_style: self.reader.read_u8("pen style")?,
            pen_color: self.reader.read_u16("pen color")?,
            pen_width: if self.version >= PEN_WIDTH_MIN_VERSION {
                self.reader.read_u16("pen width")?
            } else {
                0
            },
            layer: self.reader.read_u16("layer")?,
            layer_group: self.reader.read_u16("layer group")?,
            flags: self.reader.read_u16("attribute flags")?,
        })
    }

    fn read_line(&mut self) -> JwwResult<Entity> {
        let common = self.read_entity_base()?;
        let line = Line {
            start_x: self.reader.read_f64("line start x")?,
            start_y: self.reader.read_f64("line start y")?,
            end_x: self.reader.read_f64("line end x")?,
            end_y: self.reader.read_f64("line end y")?,
        };
        Ok(Entity {
            common,
            specific: EntityType::Line(line),
        })
    }

    fn read_arc(&mut self) -> JwwResult<Entity> {
        let common = self.read_entity_base()?;
        let arc = Arc {
            center_x: self.reader.read_f64("arc center x")?,
            center_y: self.reader.read_f64("arc center y")?,
            radius: self.reader.read_f64("arc radius")?,
            start_angle: self.reader.read_f64("arc start angle")?,
            arc_angle: self.reader.read_f64("arc angle")?,
            tilt_angle: self.reader.read_f64("arc tilt angle")?,
            flatness: self.reader.read_f64("arc flatness")?,
            is_full_circle: self.reader.read_u32("arc full circle flag")? != 0,
        };
        Ok(Entity {
            common,
            specific: EntityType::Arc(arc),
        })
    }

    fn read_point(&mut self) -> JwwResult<Entity> {
        let common = self.read_entity_base()?;
        let mut point = Point {
            x: self.reader.read_f64("point x")?,
            y: self.reader.read_f64("point y")?,
            is_temporary: self.reader.read_u32("point temporary flag")? != 0,
            ..Default::default()
        };
        // pen style 100 marks a symbol point with glyph data appended
        if common.pen_style == 100 {
            point.code = self.reader.read_u32("point marker code")?;
            point.angle = self.reader.read_f64("point marker angle")?;
            point.scale = self.reader.read_f64("point marker scale")?;
        }
        Ok(Entity {
            common,
            specific: EntityType::Point(point),
        })
    }

    fn read_text(&mut self) -> JwwResult<Entity> {
        let common = self.read_entity_base()?;
        let text = Text {
            start_x: self.reader.read_f64("text start x")?,
            start_y: self.reader.read_f64("text start y")?,
            end_x: self.reader.read_f64("text end x")?,
            end_y: self.reader.read_f64("text end y")?,
            text_type: self.reader.read_u32("text style flags")?,
            size_x: self.reader.read_f64("text size x")?,
            size_y: self.reader.read_f64("text size y")?,
            spacing: self.reader.read_f64("text spacing")?,
            angle: self.reader.read_f64("text angle")?,
            font_name: self.reader.read_c_string("text font name")?,
            content: self.reader.read_c_string("text content")?,
        };
        Ok(Entity {
            common,
            specific: EntityType::Text(text),
        })
    }

    fn read_solid(&mut self) -> JwwResult<Entity> {
        let common = self.read_entity_base()?;
        // corners are stored in the order 1, 4, 2, 3
        let mut solid = Solid::default();
        solid.x1 = self.reader.read_f64("solid corner 1 x")?;
        solid.y1 = self.reader.read_f64("solid corner 1 y")?;
        solid.x4 = self.reader.read_f64("solid corner 4 x")?;
        solid.y4 = self.reader.read_f64("solid corner 4 y")?;
        solid.x2 = self.reader.read_f64("solid corner 2 x")?;
        solid.y2 = self.reader.read_f64("solid corner 2 y")?;
        solid.x3 = self.reader.read_f64("solid corner 3 x")?;
        solid.y3 = self.reader.read_f64("solid corner 3 y")?;
        // pen color 10 selects a direct RGB color
        if common.pen_color == 10 {
            solid.color = self.reader.read_u32("solid color")?;
        }
        Ok(Entity {
            common,
            specific: EntityType::Solid(solid),
        })
    }

    fn read_block_ref(&mut self) -> JwwResult<Entity> {
        let common = self.read_entity_base()?;
        let block_ref = BlockRef {
            x: self.reader.read_f64("block insert x")?,
            y: self.reader.read_f64("block insert y")?,
            scale_x: self.reader.read_f64("block scale x")?,
            scale_y: self.reader.read_f64("block scale y")?,
            rotation: self.reader.read_f64("block rotation")?,
            def_number: self.reader.read_u32("block definition number")?,
        };
        Ok(Entity {
            common,
            specific: EntityType::BlockRef(block_ref),
        })
    }

    /// A dimension is a compound record: its own header, an embedded line,
    /// an embedded text, and (Ver.4.20+) trailing SXF data.  Only the line
    /// survives decoding; a truncated trailing block leaves it intact.
    fn read_dimension(&mut self) -> JwwResult<Entity> {
        self.read_entity_base()?;
        let line = self.read_line()?;
        self.read_text()?;
        if self.version >= DIMENSION_SXF_MIN_VERSION {
            let _ = self.read_dimension_sxf_block();
        }
        Ok(line)
    }

    fn read_dimension_sxf_block(&mut self) -> JwwResult<()> {
        self.reader.read_u16("dimension sxf mode")?;
        for _ in 0..2 {
            self.read_line()?;
        }
        for _ in 0..4 {
            self.read_point()?;
        }
        Ok(())
    }

    /// Reads the block-definition list that follows the entity list.  The
    /// section is optional in practice: an implausible count means it is
    /// absent, and any failure mid-list degrades to the definitions
    /// collected so far.
    fn read_block_def_list(&mut self) -> Vec<BlockDef> {
        let count = match self.reader.read_u32("block definition count") {
            Ok(count) => count,
            Err(_) => return Vec::new(),
        };
        if count > MAX_BLOCK_DEFS {
            return Vec::new();
        }
        let mut registry = ClassRegistry::new();
        let mut defs = Vec::new();
        for _ in 0..count {
            match self.read_block_def_record(&mut registry) {
                Ok(Some(def)) => defs.push(def),
                Ok(None) => (),
                Err(_) => break,
            }
        }
        defs
    }

    fn read_block_def_record(
        &mut self,
        registry: &mut ClassRegistry,
    ) -> JwwResult<Option<BlockDef>> {
        let tag = self.reader.read_u16("record tag")?;
        match tag {
            NEW_CLASS_TAG => {
                let name = self.read_class_definition()?;
                registry.define_class(name);
            }
            NULL_OBJECT_TAG => return Ok(None),
            _ => {
                registry.resolve(tag)?;
            }
        }
        let common = self.read_entity_base()?;
        let number = self.reader.read_u32("block definition number")?;
        let is_referenced = self.reader.read_u32("block referenced flag")? != 0;
        self.reader.skip(4, "block timestamp")?;
        let name = self.reader.read_c_string("block name")?;
        // a failure inside the nested list keeps the definition, without
        // its entities
        let entities = self.read_entity_list().unwrap_or_default();
        registry.note_instance();
        Ok(Some(BlockDef {
            common,
            number,
            is_referenced,
            name,
            entities,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_at(prefix_len: usize, version: u32, class_name: &str) -> Vec<u8> {
        let mut data = vec![0u8; prefix_len];
        data.extend_from_slice(&1u16.to_le_bytes()); // count
        data.extend_from_slice(&[0xFF, 0xFF]);
        data.extend_from_slice(&(version as u16).to_le_bytes());
        data.extend_from_slice(&(class_name.len() as u16).to_le_bytes());
        data.extend_from_slice(class_name.as_bytes());
        data.extend_from_slice(&[0u8; 64]);
        data
    }

    #[test]
    fn scan_finds_the_count_before_the_class_marker() {
        let data = pattern_at(200, 600, "CDataSen");
        assert_eq!(Some(200), find_entity_list_offset(&data, 600));
    }

    #[test]
    fn scan_skips_the_fixed_prefix_region() {
        // a pattern entirely inside the first 100 bytes is never matched
        let data = pattern_at(50, 600, "CDataSen");
        assert_eq!(None, find_entity_list_offset(&data, 600));
    }

    #[test]
    fn scan_rejects_schema_mismatches() {
        let data = pattern_at(200, 600, "CDataSen");
        assert_eq!(None, find_entity_list_offset(&data, 420));
    }

    #[test]
    fn scan_rejects_foreign_class_names() {
        let data = pattern_at(200, 600, "CObjOwner");
        assert_eq!(None, find_entity_list_offset(&data, 600));
    }

    #[test]
    fn scan_rejects_implausible_name_lengths() {
        let data = pattern_at(200, 600, "CData"); // length 5 < 8
        assert_eq!(None, find_entity_list_offset(&data, 600));
    }
}
