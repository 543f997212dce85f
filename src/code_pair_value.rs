use std::fmt;
use std::fmt::{Debug, Formatter};

/// The value half of a [`CodePair`](crate::CodePair).
///
/// The `Debug` representation of a value is exactly the text that the ASCII
/// writer emits for it, so changing it changes the output format.
#[derive(Clone, PartialEq)]
pub enum CodePairValue {
    Short(i16),
    Double(f64),
    Str(String),
}

impl CodePairValue {
    /// Rewrites every character outside printable ASCII as a `\U+XXXX`
    /// escape with an upper-case four-hex-digit code point.
    ///
    /// e.g. `"日本語"` becomes `"\U+65E5\U+672C\U+8A9E"`.
    pub fn escape_unicode(value: &str) -> String {
        let mut result = String::with_capacity(value.len());
        for c in value.chars() {
            if c as u32 > 127 || c.is_ascii_control() {
                result.push_str(&format!("\\U+{:04X}", c as u32));
            } else {
                result.push(c);
            }
        }
        result
    }
}

impl Debug for CodePairValue {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            CodePairValue::Short(s) => write!(formatter, "{}", s),
            CodePairValue::Double(d) => write!(formatter, "{}", format_f64(*d)),
            CodePairValue::Str(ref s) => write!(formatter, "{}", s),
        }
    }
}

/// Formats an `f64` value with exactly six fractional digits.  This is part
/// of the output contract; tests pin it.
fn format_f64(val: f64) -> String {
    format!("{:.6}", val)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_carry_six_fractional_digits() {
        assert_eq!("0.000000", format!("{:?}", CodePairValue::Double(0.0)));
        assert_eq!("1.500000", format!("{:?}", CodePairValue::Double(1.5)));
        assert_eq!("-2.000000", format!("{:?}", CodePairValue::Double(-2.0)));
        assert_eq!("25.000000", format!("{:?}", CodePairValue::Double(25.0)));
    }

    #[test]
    fn shorts_are_unpadded_decimal() {
        assert_eq!("7", format!("{:?}", CodePairValue::Short(7)));
        assert_eq!("257", format!("{:?}", CodePairValue::Short(257)));
    }

    #[test]
    fn ascii_text_is_not_escaped() {
        assert_eq!("plain", CodePairValue::escape_unicode("plain"));
        assert_eq!("a b!", CodePairValue::escape_unicode("a b!"));
    }

    #[test]
    fn non_ascii_text_is_escaped() {
        assert_eq!(
            "\\U+65E5\\U+672C\\U+8A9E",
            CodePairValue::escape_unicode("日本語")
        );
        assert_eq!("\\U+00E8", CodePairValue::escape_unicode("è"));
        assert_eq!("A\\U+0009B", CodePairValue::escape_unicode("A\tB"));
    }
}
