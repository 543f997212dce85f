use byteorder::{ByteOrder, LittleEndian};

use crate::{JwwError, JwwResult};

/// Reads JWW primitives from a byte slice.
///
/// All multi-byte values are little-endian; doubles are a bitwise
/// reinterpretation of the underlying `u64`.  Strings are length-prefixed in
/// the MFC `CString` style and encoded as Shift_JIS.  The reader keeps a
/// running offset so that truncation errors can say where the input ended.
pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteReader { data, offset: 0 }
    }
    pub fn starting_at(data: &'a [u8], offset: usize) -> Self {
        ByteReader { data, offset }
    }
    fn take(&mut self, count: usize, field: &'static str) -> JwwResult<&'a [u8]> {
        if self.offset + count > self.data.len() {
            return Err(JwwError::UnexpectedEndOfInput {
                field,
                offset: self.offset,
            });
        }
        let bytes = &self.data[self.offset..self.offset + count];
        self.offset += count;
        Ok(bytes)
    }
    pub fn read_u8(&mut self, field: &'static str) -> JwwResult<u8> {
        Ok(self.take(1, field)?[0])
    }
    pub fn read_u16(&mut self, field: &'static str) -> JwwResult<u16> {
        Ok(LittleEndian::read_u16(self.take(2, field)?))
    }
    pub fn read_u32(&mut self, field: &'static str) -> JwwResult<u32> {
        Ok(LittleEndian::read_u32(self.take(4, field)?))
    }
    pub fn read_f64(&mut self, field: &'static str) -> JwwResult<f64> {
        Ok(LittleEndian::read_f64(self.take(8, field)?))
    }
    pub fn read_bytes(&mut self, count: usize, field: &'static str) -> JwwResult<&'a [u8]> {
        self.take(count, field)
    }
    pub fn skip(&mut self, count: usize, field: &'static str) -> JwwResult<()> {
        self.take(count, field)?;
        Ok(())
    }
    /// Reads a length-prefixed string in MFC `CString` format.
    ///
    /// The length prefix is one byte; `0xFF` escalates to a two-byte length
    /// and `0xFFFF` there escalates to a four-byte length.  The payload is
    /// Shift_JIS and is transcoded to UTF-8.
    pub fn read_c_string(&mut self, field: &'static str) -> JwwResult<String> {
        let length = match self.read_u8(field)? {
            len if len < 0xFF => u32::from(len),
            _ => match self.read_u16(field)? {
                len if len < 0xFFFF => u32::from(len),
                _ => self.read_u32(field)?,
            },
        };
        if length == 0 {
            return Ok(String::new());
        }
        let raw = self.read_bytes(length as usize, field)?;
        Ok(decode_shift_jis(raw))
    }
}

/// Transcodes Shift_JIS bytes to a `String`, trimming trailing NULs.  A
/// malformed payload falls back to the single-byte reading of each byte
/// rather than failing the parse.
fn decode_shift_jis(raw: &[u8]) -> String {
    let (text, _, had_errors) = encoding_rs::SHIFT_JIS.decode(raw);
    let text = if had_errors {
        raw.iter().map(|&b| char::from(b)).collect()
    } else {
        text.into_owned()
    };
    text.trim_end_matches('\0').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_are_little_endian() {
        let data = [0x01u8, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut reader = ByteReader::new(&data);
        assert_eq!(0x01, reader.read_u8("a").unwrap());
        assert_eq!(0x1234, reader.read_u16("b").unwrap());
        assert_eq!(0x12345678, reader.read_u32("c").unwrap());
    }

    #[test]
    fn doubles_are_bit_reinterpretations() {
        let data = 1.5f64.to_le_bytes();
        let mut reader = ByteReader::new(&data);
        assert_eq!(1.5, reader.read_f64("value").unwrap());
    }

    #[test]
    fn short_reads_report_field_and_offset() {
        let data = [0x00u8, 0x01];
        let mut reader = ByteReader::new(&data);
        reader.read_u8("first").unwrap();
        match reader.read_u32("second") {
            Err(JwwError::UnexpectedEndOfInput { field, offset }) => {
                assert_eq!("second", field);
                assert_eq!(1, offset);
            }
            other => panic!("expected truncation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn c_string_single_byte_length() {
        let data = [3u8, b'a', b'b', b'c'];
        let mut reader = ByteReader::new(&data);
        assert_eq!("abc", reader.read_c_string("s").unwrap());
    }

    #[test]
    fn c_string_two_byte_length() {
        let mut data = vec![0xFFu8, 0x00, 0x01]; // 0xFF marker, then 256
        data.extend(std::iter::repeat(b'x').take(256));
        let mut reader = ByteReader::new(&data);
        assert_eq!(256, reader.read_c_string("s").unwrap().len());
    }

    #[test]
    fn c_string_empty() {
        let data = [0u8];
        let mut reader = ByteReader::new(&data);
        assert_eq!("", reader.read_c_string("s").unwrap());
    }

    #[test]
    fn c_string_transcodes_shift_jis() {
        // 日本 in Shift_JIS
        let data = [4u8, 0x93, 0xFA, 0x96, 0x7B];
        let mut reader = ByteReader::new(&data);
        assert_eq!("日本", reader.read_c_string("s").unwrap());
    }

    #[test]
    fn c_string_trims_trailing_nulls() {
        let data = [4u8, b'a', b'b', 0, 0];
        let mut reader = ByteReader::new(&data);
        assert_eq!("ab", reader.read_c_string("s").unwrap());
    }

    #[test]
    fn malformed_shift_jis_falls_back_to_raw_bytes() {
        // a lone lead byte is not valid Shift_JIS
        let data = [2u8, b'a', 0x81];
        let mut reader = ByteReader::new(&data);
        assert_eq!("a\u{81}", reader.read_c_string("s").unwrap());
    }
}
