//! # Schedule Aggregation Engine
//!
//! This crate turns a stream of normalized schedule records into descriptive
//! statistics and the market equilibrium point.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   configuration or presentation. It depends only on `core-types` (Layer 0).
//! - **Single Run State:** An `AggregationEngine` lives for exactly one run. It moves
//!   from `Empty` to `Accumulating` on the first record and to `Finalized` on
//!   `finalize`, after which it accepts no more records.
//! - **Order Matters Once:** Extrema do not depend on record order; the equilibrium
//!   point does, because the first qualifying record wins.
//!
//! ## Public API
//!
//! - `AggregationEngine`: consumes records one at a time and finalizes the result.
//! - `AggregateResult`: the finished bundle handed to the presentation layer.
//! - `AnalyticsError`: the usage errors that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AggregationEngine, EngineState};
pub use error::AnalyticsError;
pub use report::{AggregateResult, EquilibriumPoint, SeriesStats};
