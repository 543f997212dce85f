use crate::JwwError;

/// The result type used by everything in this crate.
pub type JwwResult<T> = Result<T, JwwError>;
