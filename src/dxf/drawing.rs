use std::collections::HashMap;
use std::io::Write;

use crate::code_pair_writer::CodePairWriter;
use crate::dxf::block::Block;
use crate::dxf::entity::Entity;
use crate::dxf::table::Layer;
use crate::handle_tracker::HandleTracker;
use crate::{CodePair, CodePairValue, JwwResult};

/// A DXF drawing: layers, entities, and block definitions, all in emission
/// order.
///
/// `save` writes the drawing as ASCII DXF.  The output is deterministic:
/// for the same drawing the byte stream is always identical.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Drawing {
    pub layers: Vec<Layer>,
    pub entities: Vec<Entity>,
    pub blocks: Vec<Block>,
}

// public implementation
impl Drawing {
    pub fn new() -> Self {
        Default::default()
    }
    /// Writes the drawing to anything that implements the `Write` trait.
    pub fn save<T>(&self, writer: &mut T) -> JwwResult<()>
    where
        T: Write + ?Sized,
    {
        let mut writer = CodePairWriter::new(writer);
        let mut handles = HandleTracker::new();
        self.write_header(&mut writer)?;
        self.write_tables(&mut writer, &mut handles)?;
        self.write_blocks(&mut writer)?;
        self.write_entities(&mut writer)?;
        writer.write_code_pair(&CodePair::new_str(0, "EOF"))
    }
    /// Serializes the drawing and returns it as a string.
    pub fn to_dxf_string(&self) -> JwwResult<String> {
        let mut buf = vec![];
        self.save(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }
    pub fn get_layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }
    pub fn has_layer(&self, name: &str) -> bool {
        self.get_layer(name).is_some()
    }
    pub fn get_block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.name == name)
    }
    pub fn has_block(&self, name: &str) -> bool {
        self.get_block(name).is_some()
    }
    /// All entities on the named layer.
    pub fn filter_by_layer(&self, name: &str) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|entity| entity.common.layer == name)
            .collect()
    }
    /// Counts entities by their DXF type name, e.g. `{"LINE": 10}`.
    pub fn count_by_type(&self) -> HashMap<&'static str, usize> {
        let mut counts = HashMap::new();
        for entity in &self.entities {
            *counts.entry(entity.type_name()).or_insert(0) += 1;
        }
        counts
    }
}

// output implementation
impl Drawing {
    fn write_header<T>(&self, writer: &mut CodePairWriter<T>) -> JwwResult<()>
    where
        T: Write,
    {
        write_section(writer, "HEADER")?;
        writer.write_code_pair(&CodePair::new_str(9, "$ACADVER"))?;
        writer.write_code_pair(&CodePair::new_str(1, "AC1015"))?;
        writer.write_code_pair(&CodePair::new_str(9, "$MEASUREMENT"))?;
        writer.write_code_pair(&CodePair::new_i16(70, 1))?; // metric
        write_end_section(writer)
    }
    fn write_tables<T>(
        &self,
        writer: &mut CodePairWriter<T>,
        handles: &mut HandleTracker,
    ) -> JwwResult<()>
    where
        T: Write,
    {
        write_section(writer, "TABLES")?;
        self.write_line_type_table(writer, handles)?;
        self.write_layer_table(writer, handles)?;
        self.write_style_table(writer, handles)?;
        write_end_section(writer)
    }
    fn write_line_type_table<T>(
        &self,
        writer: &mut CodePairWriter<T>,
        handles: &mut HandleTracker,
    ) -> JwwResult<()>
    where
        T: Write,
    {
        writer.write_code_pair(&CodePair::new_str(0, "TABLE"))?;
        writer.write_code_pair(&CodePair::new_str(2, "LTYPE"))?;
        writer.write_code_pair(&CodePair::new_str(5, &handles.next_handle()))?;
        writer.write_code_pair(&CodePair::new_i16(70, 3))?;
        write_line_type_record(writer, handles, "BYLAYER", "")?;
        write_line_type_record(writer, handles, "BYBLOCK", "")?;
        write_line_type_record(writer, handles, "CONTINUOUS", "Solid line")?;
        writer.write_code_pair(&CodePair::new_str(0, "ENDTAB"))
    }
    fn write_layer_table<T>(
        &self,
        writer: &mut CodePairWriter<T>,
        handles: &mut HandleTracker,
    ) -> JwwResult<()>
    where
        T: Write,
    {
        writer.write_code_pair(&CodePair::new_str(0, "TABLE"))?;
        writer.write_code_pair(&CodePair::new_str(2, "LAYER"))?;
        writer.write_code_pair(&CodePair::new_str(5, &handles.next_handle()))?;
        writer.write_code_pair(&CodePair::new_i16(70, self.layers.len() as i16 + 1))?;

        // layer 0 is mandatory and always first
        writer.write_code_pair(&CodePair::new_str(0, "LAYER"))?;
        writer.write_code_pair(&CodePair::new_str(5, &handles.next_handle()))?;
        writer.write_code_pair(&CodePair::new_str(2, "0"))?;
        writer.write_code_pair(&CodePair::new_i16(70, 0))?;
        writer.write_code_pair(&CodePair::new_i16(62, 7))?;
        writer.write_code_pair(&CodePair::new_str(6, "CONTINUOUS"))?;

        for layer in &self.layers {
            writer.write_code_pair(&CodePair::new_str(0, "LAYER"))?;
            writer.write_code_pair(&CodePair::new_str(5, &handles.next_handle()))?;
            writer.write_code_pair(&CodePair::new_str(
                2,
                &CodePairValue::escape_unicode(&layer.name),
            ))?;
            writer.write_code_pair(&CodePair::new_i16(70, layer.standard_flags()))?;
            writer.write_code_pair(&CodePair::new_i16(62, layer.color))?;
            writer.write_code_pair(&CodePair::new_str(6, &layer.line_type))?;
        }
        writer.write_code_pair(&CodePair::new_str(0, "ENDTAB"))
    }
    fn write_style_table<T>(
        &self,
        writer: &mut CodePairWriter<T>,
        handles: &mut HandleTracker,
    ) -> JwwResult<()>
    where
        T: Write,
    {
        writer.write_code_pair(&CodePair::new_str(0, "TABLE"))?;
        writer.write_code_pair(&CodePair::new_str(2, "STYLE"))?;
        writer.write_code_pair(&CodePair::new_str(5, &handles.next_handle()))?;
        writer.write_code_pair(&CodePair::new_i16(70, 1))?;

        writer.write_code_pair(&CodePair::new_str(0, "STYLE"))?;
        writer.write_code_pair(&CodePair::new_str(5, &handles.next_handle()))?;
        writer.write_code_pair(&CodePair::new_str(2, "STANDARD"))?;
        writer.write_code_pair(&CodePair::new_i16(70, 0))?;
        writer.write_code_pair(&CodePair::new_f64(40, 0.0))?;
        writer.write_code_pair(&CodePair::new_f64(41, 1.0))?;
        writer.write_code_pair(&CodePair::new_f64(50, 0.0))?;
        writer.write_code_pair(&CodePair::new_i16(71, 0))?;
        writer.write_code_pair(&CodePair::new_f64(42, 2.5))?;
        writer.write_code_pair(&CodePair::new_str(3, "txt"))?;
        writer.write_code_pair(&CodePair::new_str(4, ""))?;
        writer.write_code_pair(&CodePair::new_str(0, "ENDTAB"))
    }
    fn write_blocks<T>(&self, writer: &mut CodePairWriter<T>) -> JwwResult<()>
    where
        T: Write,
    {
        write_section(writer, "BLOCKS")?;
        for block in &self.blocks {
            writer.write_code_pair(&CodePair::new_str(0, "BLOCK"))?;
            writer.write_code_pair(&CodePair::new_str(8, "0"))?;
            writer.write_code_pair(&CodePair::new_str(2, &block.name))?;
            writer.write_code_pair(&CodePair::new_i16(70, 0))?;
            writer.write_code_pair(&CodePair::new_f64(10, block.base_x))?;
            writer.write_code_pair(&CodePair::new_f64(20, block.base_y))?;
            writer.write_code_pair(&CodePair::new_f64(30, 0.0))?;
            writer.write_code_pair(&CodePair::new_str(3, &block.name))?;
            for entity in &block.entities {
                write_entity(writer, entity)?;
            }
            writer.write_code_pair(&CodePair::new_str(0, "ENDBLK"))?;
            writer.write_code_pair(&CodePair::new_str(8, "0"))?;
        }
        write_end_section(writer)
    }
    fn write_entities<T>(&self, writer: &mut CodePairWriter<T>) -> JwwResult<()>
    where
        T: Write,
    {
        write_section(writer, "ENTITIES")?;
        for entity in &self.entities {
            write_entity(writer, entity)?;
        }
        write_end_section(writer)
    }
}

fn write_entity<T>(writer: &mut CodePairWriter<T>, entity: &Entity) -> JwwResult<()>
where
    T: Write,
{
    for pair in entity.code_pairs() {
        writer.write_code_pair(&pair)?;
    }
    Ok(())
}

fn write_line_type_record<T>(
    writer: &mut CodePairWriter<T>,
    handles: &mut HandleTracker,
    name: &str,
    description: &str,
) -> JwwResult<()>
where
    T: Write,
{
    writer.write_code_pair(&CodePair::new_str(0, "LTYPE"))?;
    writer.write_code_pair(&CodePair::new_str(5, &handles.next_handle()))?;
    writer.write_code_pair(&CodePair::new_str(2, name))?;
    writer.write_code_pair(&CodePair::new_i16(70, 0))?;
    writer.write_code_pair(&CodePair::new_str(3, description))?;
    writer.write_code_pair(&CodePair::new_i16(72, 65))?; // alignment code 'A'
    writer.write_code_pair(&CodePair::new_i16(73, 0))?; // no dash elements
    writer.write_code_pair(&CodePair::new_f64(40, 0.0)) // zero pattern length
}

fn write_section<T>(writer: &mut CodePairWriter<T>, name: &str) -> JwwResult<()>
where
    T: Write,
{
    writer.write_code_pair(&CodePair::new_str(0, "SECTION"))?;
    writer.write_code_pair(&CodePair::new_str(2, name))
}

fn write_end_section<T>(writer: &mut CodePairWriter<T>) -> JwwResult<()>
where
    T: Write,
{
    writer.write_code_pair(&CodePair::new_str(0, "ENDSEC"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dxf::entity::{EntityType, Line};

    fn line_on_layer(layer: &str) -> Entity {
        let mut entity = Entity::new(EntityType::Line(Line::default()));
        entity.common.layer = layer.to_string();
        entity
    }

    #[test]
    fn get_layer_finds_by_name() {
        let mut drawing = Drawing::new();
        drawing.add_layer(Layer {
            name: String::from("WALLS"),
            color: 1,
            ..Default::default()
        });
        assert!(drawing.has_layer("WALLS"));
        assert!(!drawing.has_layer("DOORS"));
        assert_eq!(1, drawing.get_layer("WALLS").unwrap().color);
    }

    #[test]
    fn filter_by_layer_matches_entity_layers() {
        let mut drawing = Drawing::new();
        drawing.add_entity(line_on_layer("A"));
        drawing.add_entity(line_on_layer("B"));
        drawing.add_entity(line_on_layer("A"));
        assert_eq!(2, drawing.filter_by_layer("A").len());
        assert_eq!(1, drawing.filter_by_layer("B").len());
        assert!(drawing.filter_by_layer("C").is_empty());
    }

    #[test]
    fn count_by_type_counts_variants() {
        let mut drawing = Drawing::new();
        drawing.add_entity(line_on_layer("A"));
        drawing.add_entity(line_on_layer("A"));
        let counts = drawing.count_by_type();
        assert_eq!(Some(&2), counts.get("LINE"));
        assert_eq!(None, counts.get("CIRCLE"));
    }
}
