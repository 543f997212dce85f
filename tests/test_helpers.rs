extern crate jww2dxf;

#[allow(dead_code)]
pub mod helpers {
    /// Builds synthetic JWW byte buffers for the reader tests: the fixed
    /// header prefix plus whatever records the test appends.
    pub struct JwwBuffer {
        data: Vec<u8>,
        version: u32,
    }

    impl JwwBuffer {
        /// A buffer with the full fixed prefix: signature, version, memo,
        /// paper size, active group, and 16 zeroed layer groups.
        pub fn new(version: u32) -> Self {
            JwwBuffer::with_memo(version, "")
        }
        pub fn with_memo(version: u32, memo: &str) -> Self {
            let mut buffer = JwwBuffer {
                data: vec![],
                version,
            };
            buffer.data.extend_from_slice(b"JwwData.");
            buffer.u32(version);
            buffer.c_string(memo);
            buffer.u32(0); // paper size
            buffer.u32(0); // active layer group
            for _ in 0..16 {
                buffer.u32(0); // group state
                buffer.u32(0); // active layer
                buffer.f64(0.0); // scale
                buffer.u32(0); // group protect
                for _ in 0..16 {
                    buffer.u32(0); // layer state
                    buffer.u32(0); // layer protect
                }
            }
            buffer
        }
        pub fn u8(&mut self, value: u8) {
            self.data.push(value);
        }
        pub fn u16(&mut self, value: u16) {
            self.data.extend_from_slice(&value.to_le_bytes());
        }
        pub fn u32(&mut self, value: u32) {
            self.data.extend_from_slice(&value.to_le_bytes());
        }
        pub fn f64(&mut self, value: f64) {
            self.data.extend_from_slice(&value.to_le_bytes());
        }
        /// A short length-prefixed string; the tests only need the
        /// single-byte prefix form.
        pub fn c_string(&mut self, value: &str) {
            self.u8(value.len() as u8);
            self.data.extend_from_slice(value.as_bytes());
        }
        /// A length-prefixed string with raw payload bytes, for non-UTF-8
        /// encodings.
        pub fn c_string_raw(&mut self, raw: &[u8]) {
            self.u8(raw.len() as u8);
            self.data.extend_from_slice(raw);
        }
        /// The 16-bit record count that opens an entity list.
        pub fn entity_count(&mut self, count: u16) {
            self.u16(count);
        }
        /// A new-class record: the 0xFFFF tag, the schema word (the file
        /// version), and the class name.
        pub fn class_def(&mut self, name: &str) {
            self.u16(0xFFFF);
            self.u16(self.version as u16);
            self.u16(name.len() as u16);
            self.data.extend_from_slice(name.as_bytes());
        }
        /// A class-reference tag for the given PID.
        pub fn class_ref(&mut self, pid: u16) {
            self.u16(0x8000 | pid);
        }
        /// A null-object record.
        pub fn null_record(&mut self) {
            self.u16(0x8000);
        }
        /// The shared attribute header.  The pen width is only written for
        /// versions that carry it.
        pub fn entity_base(&mut self, pen_style: u8, pen_color: u16, layer: u16, layer_group: u16) {
            self.u32(0); // attribute group
            self.u8(pen_style);
            self.u16(pen_color);
            if self.version >= 351 {
                self.u16(0); // pen width
            }
            self.u16(layer);
            self.u16(layer_group);
            self.u16(0); // flags
        }
        /// The body of a `CDataSen` record (after the base).
        pub fn line_body(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
            self.f64(x1);
            self.f64(y1);
            self.f64(x2);
            self.f64(y2);
        }
        /// The body of a `CDataEnko` record describing a plain circle.
        pub fn full_circle_body(&mut self, center_x: f64, center_y: f64, radius: f64) {
            self.f64(center_x);
            self.f64(center_y);
            self.f64(radius);
            self.f64(0.0); // start angle
            self.f64(0.0); // arc angle
            self.f64(0.0); // tilt
            self.f64(1.0); // flatness
            self.u32(1); // full circle
        }
        /// The body of a `CDataMoji` record.
        pub fn text_body(&mut self, x: f64, y: f64, content: &str) {
            self.f64(x);
            self.f64(y);
            self.f64(x + 10.0);
            self.f64(y);
            self.u32(0); // style flags
            self.f64(3.0); // size x
            self.f64(3.0); // size y
            self.f64(0.0); // spacing
            self.f64(0.0); // angle
            self.c_string(""); // font
            self.c_string(content);
        }
        /// The body of a `CDataTen` record without marker data.
        pub fn point_body(&mut self, x: f64, y: f64, is_temporary: bool) {
            self.f64(x);
            self.f64(y);
            self.u32(if is_temporary { 1 } else { 0 });
        }
        pub fn build(&self) -> Vec<u8> {
            self.data.clone()
        }
    }

    /// Asserts that the serialized drawing contains the given fragment and
    /// prints the output when it does not (only shown on failure).
    pub fn assert_contains(text: &str, fragment: &str) {
        assert!(
            text.contains(fragment),
            "expected output to contain {:?}:\n{}",
            fragment,
            text
        );
    }

    /// Asserts that `earlier` occurs before `later` in the output.
    pub fn assert_ordered(text: &str, earlier: &str, later: &str) {
        let earlier_at = text.find(earlier);
        let later_at = text.find(later);
        assert!(earlier_at.is_some(), "missing {:?}", earlier);
        assert!(later_at.is_some(), "missing {:?}", later);
        assert!(
            earlier_at.unwrap() < later_at.unwrap(),
            "expected {:?} before {:?}:\n{}",
            earlier,
            later,
            text
        );
    }
}
