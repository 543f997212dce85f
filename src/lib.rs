//! This crate reads binary Jw_cad (JWW) drawings and writes them back out as
//! ASCII DXF.
//!
//! JWW is the native file format of Jw_cad, a 2D CAD application that is
//! widely used in Japan.  The format is a little-endian re-serialization of
//! an MFC object graph with Shift_JIS text; see [`jww`] for the decoder.  The
//! DXF side ([`dxf`]) is a deliberately small, deterministic writer that
//! produces an R2000-flavored ASCII stream.
//!
//! # Usage
//!
//! Put this in your `Cargo.toml`:
//!
//! ``` toml
//! [dependencies]
//! jww2dxf = "0.1.0"
//! ```
//!
//! Convert a drawing in one step:
//!
//! ``` rust
//! # fn main() { }
//! # fn ex(bytes: &[u8]) -> jww2dxf::JwwResult<()> {
//! let dxf_text = jww2dxf::jww_to_dxf(bytes)?;
//! # Ok(())
//! # }
//! ```
//!
//! Or keep the intermediate documents around for inspection:
//!
//! ``` rust
//! # fn main() { }
//! # fn ex(bytes: &[u8]) -> jww2dxf::JwwResult<()> {
//! use jww2dxf::jww;
//!
//! let document = jww::Document::parse(bytes)?;
//! for entity in &document.entities {
//!     match entity.specific {
//!         jww::EntityType::Line(ref line) => {
//!             // do something with the line
//!         }
//!         _ => (),
//!     }
//! }
//!
//! let drawing = jww2dxf::convert_document(&document);
//! let text = drawing.to_dxf_string()?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate enum_primitive;

#[cfg(feature = "serialize")]
#[macro_use]
extern crate serde_derive;
#[cfg(feature = "serialize")]
extern crate serde;

mod code_pair;
pub use crate::code_pair::CodePair;

mod code_pair_value;
pub use crate::code_pair_value::CodePairValue;

mod code_pair_writer;

mod handle_tracker;

mod jww_error;
pub use crate::jww_error::JwwError;

mod jww_result;
pub use crate::jww_result::JwwResult;

pub mod jww;

pub mod dxf;
pub use crate::dxf::Drawing;

mod converter;
pub use crate::converter::convert_document;

/// Parses a JWW byte buffer and returns the equivalent ASCII DXF text.
///
/// This is `jww::Document::parse` + [`convert_document`] +
/// `Drawing::to_dxf_string` composed for the common case.
pub fn jww_to_dxf(data: &[u8]) -> JwwResult<String> {
    let document = jww::Document::parse(data)?;
    let drawing = convert_document(&document);
    drawing.to_dxf_string()
}
