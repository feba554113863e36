use crate::error::AnalyticsError;
use crate::report::{AggregateResult, EquilibriumPoint};
use core_types::{Column, CoreError, Record, canonical_digits, parse_numeric};

/// Lifecycle of a single aggregation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No record has been offered yet.
    Empty,
    /// At least one record has been processed.
    Accumulating,
    /// `finalize` has been called. Terminal.
    Finalized,
}

/// Accumulates schedule records and produces an `AggregateResult`.
///
/// Records must be offered in input order: the equilibrium point is the first
/// qualifying record, not the best one.
#[derive(Debug)]
pub struct AggregationEngine {
    state: EngineState,
    result: AggregateResult,
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregationEngine {
    pub fn new() -> Self {
        Self {
            state: EngineState::Empty,
            result: AggregateResult::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Runs a fresh engine over `records` and finalizes it.
    pub fn aggregate<I>(records: I) -> Result<AggregateResult, AnalyticsError>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut engine = Self::new();
        for record in records {
            engine.process(&record)?;
        }
        Ok(engine.finalize())
    }

    /// Folds one normalized record into the running state.
    ///
    /// Data-quality problems never fail: a record with fewer than three fields
    /// is counted and skipped, and a non-numeric field is skipped for its own
    /// column only. The only error is calling this after `finalize`.
    pub fn process(&mut self, record: &Record) -> Result<(), AnalyticsError> {
        if self.state == EngineState::Finalized {
            return Err(AnalyticsError::AlreadyFinalized);
        }
        self.state = EngineState::Accumulating;
        self.result.records_processed += 1;
        let row = self.result.records_processed;

        let (Some(price), Some(demanded), Some(supplied)) = (
            record.field(Column::Price),
            record.field(Column::QuantityDemanded),
            record.field(Column::QuantitySupplied),
        ) else {
            self.result.records_malformed += 1;
            tracing::warn!(row, fields = record.len(), "skipping record with fewer than 3 fields");
            return Ok(());
        };

        for (column, field) in [
            (Column::Price, price),
            (Column::QuantityDemanded, demanded),
            (Column::QuantitySupplied, supplied),
        ] {
            self.capture(column, field, row);
        }

        self.try_record_equilibrium(price, demanded, supplied, row);

        Ok(())
    }

    /// Computes the extrema of every series and freezes the run.
    ///
    /// Safe to call more than once; each call returns an identical result.
    pub fn finalize(&mut self) -> AggregateResult {
        for column in Column::ALL {
            self.result.series_mut(column).compute_extrema();
        }
        if self.state != EngineState::Finalized {
            tracing::debug!(
                records = self.result.records_processed,
                malformed = self.result.records_malformed,
                equilibrium = self.result.equilibrium.is_some(),
                "aggregation finalized"
            );
        }
        self.state = EngineState::Finalized;
        self.result.clone()
    }

    fn capture(&mut self, column: Column, field: &str, row: usize) {
        match parse_numeric(field) {
            Ok(value) => self.result.series_mut(column).push(value),
            Err(CoreError::Overflow(_)) => {
                tracing::warn!(row, %column, field, "value too large, skipping field");
            }
            Err(_) => {
                tracing::debug!(row, %column, field, "non-numeric field skipped");
            }
        }
    }

    /// Records the equilibrium point if none is set yet and this row qualifies.
    ///
    /// The check validates all three fields itself and does not depend on
    /// whether they were captured into their series.
    fn try_record_equilibrium(&mut self, price: &str, demanded: &str, supplied: &str, row: usize) {
        if self.result.equilibrium.is_some() {
            return;
        }
        if canonical_digits(price).is_none() {
            return;
        }
        let (Some(demanded_value), Some(supplied_value)) =
            (canonical_digits(demanded), canonical_digits(supplied))
        else {
            return;
        };

        if demanded_value == supplied_value {
            tracing::info!(row, price, quantity = demanded, "equilibrium point found");
            self.result.equilibrium = Some(EquilibriumPoint::new(price, demanded, row));
        }
    }
}
