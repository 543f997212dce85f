use std::error;
use std::fmt;
use std::io;

/// All the ways reading a JWW file or writing the DXF stream can fail.
///
/// Decoding errors carry enough context to locate the problem in the input:
/// a field name and byte offset for truncated streams, the offending class
/// name for unknown records, and the registry contents for dangling class
/// references.
#[derive(Debug)]
pub enum JwwError {
    IoError(io::Error),
    InvalidSignature,
    UnexpectedEndOfInput { field: &'static str, offset: usize },
    UnknownEntityClass(String),
    UnknownClassPid { pid: u16, known: Vec<u16> },
    EntityListNotFound,
}

impl From<io::Error> for JwwError {
    fn from(ioe: io::Error) -> JwwError {
        JwwError::IoError(ioe)
    }
}

impl fmt::Display for JwwError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JwwError::IoError(ref e) => write!(formatter, "{}", e),
            JwwError::InvalidSignature => {
                write!(formatter, "invalid JWW signature: expected 'JwwData.'")
            }
            JwwError::UnexpectedEndOfInput { field, offset } => write!(
                formatter,
                "the input unexpectedly ended while reading {} at offset {}",
                field, offset
            ),
            JwwError::UnknownEntityClass(ref name) => {
                write!(formatter, "unknown entity class: {}", name)
            }
            JwwError::UnknownClassPid { pid, ref known } => {
                write!(formatter, "unknown class PID: {} (have PIDs: {:?})", pid, known)
            }
            JwwError::EntityListNotFound => {
                write!(formatter, "could not find the entity list in the file")
            }
        }
    }
}

impl error::Error for JwwError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            JwwError::IoError(ref e) => Some(e),
            _ => None,
        }
    }
}
