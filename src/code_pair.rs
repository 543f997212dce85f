use std::fmt;
use std::fmt::{Debug, Formatter};

use crate::CodePairValue;

/// The basic primitive of a DXF file; a code indicating the type of the data
/// contained, and the data itself.
#[derive(Clone, PartialEq)]
pub struct CodePair {
    pub code: i32,
    pub value: CodePairValue,
}

impl CodePair {
    pub fn new(code: i32, val: CodePairValue) -> Self {
        CodePair { code, value: val }
    }
    pub fn new_str(code: i32, val: &str) -> Self {
        CodePair::new(code, CodePairValue::Str(val.to_string()))
    }
    pub fn new_i16(code: i32, val: i16) -> Self {
        CodePair::new(code, CodePairValue::Short(val))
    }
    pub fn new_f64(code: i32, val: f64) -> Self {
        CodePair::new(code, CodePairValue::Double(val))
    }
}

impl Debug for CodePair {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}/{:?}", self.code, &self.value)
    }
}
