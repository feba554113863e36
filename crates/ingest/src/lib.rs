//! # Schedule Ingest
//!
//! Everything that happens before a record reaches the aggregation engine.
//!
//! - `gate`: decides whether a file is acceptable delimited text at all. When
//!   it rejects a file the engine must not run.
//! - `source`: reads records in input order, with no header skipping and no
//!   quote processing.
//! - `normalizer`: trims incidental whitespace from every field.

pub mod error;
pub mod gate;
pub mod normalizer;
pub mod source;

pub use error::IngestError;
pub use gate::validate_input;
pub use normalizer::normalize_row;
pub use source::CsvRecordSource;
