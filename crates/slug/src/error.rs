//! Error surface.
//!
//! The engine itself is total: `slug()` never fails for any input string,
//! unit sequence, or unrecognized locale/mode value. The only fallible
//! operation is building options with a `remove` pattern that does not
//! compile, which is a caller error surfaced at construction time.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    /// The `remove` pattern failed to compile.
    #[error("invalid remove pattern: {0}")]
    InvalidRemovePattern(#[from] regex::Error),
}
