extern crate jww2dxf;

use jww2dxf::{convert_document, jww, jww_to_dxf};

mod test_helpers;
use test_helpers::helpers::*;

/// The full pipeline over a hand-assembled buffer: signature, version 600,
/// a one-byte memo, zeroed prefix fields, and one line from (0,0) to (1,1).
fn minimal_line_file() -> Vec<u8> {
    let mut buffer = JwwBuffer::with_memo(600, "X");
    buffer.entity_count(1);
    buffer.class_def("CDataSen");
    buffer.entity_base(1, 1, 0, 0);
    buffer.line_body(0.0, 0.0, 1.0, 1.0);
    buffer.build()
}

#[test]
fn converts_a_minimal_file_end_to_end() {
    let text = jww_to_dxf(&minimal_line_file()).unwrap();

    assert!(text.starts_with("  0\nSECTION\n  2\nHEADER\n"));
    assert!(text.ends_with("  0\nEOF\n"));

    // exactly one LINE entity, inside the ENTITIES section
    assert_eq!(1, text.matches("  0\nLINE\n").count());
    assert_ordered(&text, "  2\nENTITIES\n", "  0\nLINE\n");
    assert_ordered(&text, "  0\nLINE\n", "  0\nENDSEC\n  0\nEOF\n");
    assert_contains(&text, " 11\n1.000000\n 21\n1.000000\n");
    assert_contains(&text, " 10\n0.000000\n 20\n0.000000\n");
}

#[test]
fn the_section_skeleton_is_complete_and_ordered() {
    let text = jww_to_dxf(&minimal_line_file()).unwrap();
    let mut position = 0;
    for fragment in [
        "SECTION", "HEADER", "ENDSEC", "TABLES", "LAYER", "ENTITIES", "EOF",
    ]
    .iter()
    {
        match text[position..].find(fragment) {
            Some(found) => position += found + fragment.len(),
            None => panic!("missing {:?} after position {}:\n{}", fragment, position, text),
        }
    }
}

#[test]
fn the_layer_table_covers_the_whole_matrix() {
    let data = minimal_line_file();
    let document = jww::Document::parse(&data).unwrap();
    assert_eq!("X", document.memo);

    let drawing = convert_document(&document);
    assert_eq!(256, drawing.layers.len());

    // 256 layers plus the mandatory layer 0
    let text = drawing.to_dxf_string().unwrap();
    assert_contains(&text, " 70\n257\n");
    assert_eq!(257, text.matches("  0\nLAYER\n").count());
}

#[test]
fn the_converted_line_lands_on_the_default_composite_layer() {
    let data = minimal_line_file();
    let document = jww::Document::parse(&data).unwrap();
    let drawing = convert_document(&document);
    assert_eq!(1, drawing.entities.len());
    assert_eq!("0-0", drawing.entities[0].common.layer);
    // pen 1 maps into the cyan slot of the palette
    assert_eq!(4, drawing.entities[0].common.color);
}

#[test]
fn decoded_documents_survive_in_memory_inspection() {
    // parse-then-convert without serializing, for callers that only want
    // the decoded model
    let data = minimal_line_file();
    let document = jww::Document::parse(&data).unwrap();
    assert_eq!(600, document.version);
    assert_eq!(1, document.entities.len());
    assert!(document.block_defs.is_empty());

    let drawing = convert_document(&document);
    let counts = drawing.count_by_type();
    assert_eq!(Some(&1), counts.get("LINE"));
}
