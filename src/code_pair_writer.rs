use std::io::Write;

use crate::{CodePair, JwwResult};

/// Writes code pairs as ASCII text: the code right-aligned in a
/// three-character field, then the value, each on its own line.
pub(crate) struct CodePairWriter<T>
where
    T: Write,
{
    writer: T,
}

impl<T: Write> CodePairWriter<T> {
    pub fn new(writer: T) -> Self {
        CodePairWriter { writer }
    }
    pub fn write_code_pair(&mut self, pair: &CodePair) -> JwwResult<()> {
        self.writer
            .write_fmt(format_args!("{: >3}\n{:?}\n", pair.code, &pair.value))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(pairs: &[CodePair]) -> String {
        let mut buf = vec![];
        {
            let mut writer = CodePairWriter::new(&mut buf);
            for pair in pairs {
                writer.write_code_pair(pair).unwrap();
            }
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn codes_are_right_aligned_in_three_characters() {
        assert_eq!("  0\nSECTION\n", written(&[CodePair::new_str(0, "SECTION")]));
        assert_eq!(" 70\n3\n", written(&[CodePair::new_i16(70, 3)]));
        assert_eq!("100\nAcDbEntity\n", written(&[CodePair::new_str(100, "AcDbEntity")]));
    }

    #[test]
    fn values_follow_on_the_next_line() {
        assert_eq!(
            " 10\n1.000000\n 20\n2.500000\n",
            written(&[CodePair::new_f64(10, 1.0), CodePair::new_f64(20, 2.5)])
        );
    }
}
