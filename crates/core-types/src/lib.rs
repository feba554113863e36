//! Layer 0 types shared by every crate in the workspace.
//!
//! Nothing here knows about files, configuration or presentation. It defines
//! the shape of one input record and the single numeric-field rule that all
//! three columns and the equilibrium check are evaluated against.

pub mod enums;
pub mod error;
pub mod numeric;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::Column;
pub use error::CoreError;
pub use numeric::{canonical_digits, is_numeric_field, parse_numeric};
pub use structs::Record;
