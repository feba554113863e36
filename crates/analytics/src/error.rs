use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// A record was offered after the run was finalized. This is a caller bug,
    /// not a data-quality problem.
    #[error("Aggregation engine is finalized and cannot accept more records")]
    AlreadyFinalized,
}
