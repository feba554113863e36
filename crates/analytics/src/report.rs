use core_types::Column;
use serde::Serialize;

/// The observations captured for one column, plus their extrema.
///
/// `lowest` and `highest` are only meaningful once the owning result has been
/// finalized. They are both `None` for an empty series, which keeps "no data"
/// distinct from a minimum of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeriesStats {
    values: Vec<u64>,
    lowest: Option<u64>,
    highest: Option<u64>,
}

impl SeriesStats {
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn lowest(&self) -> Option<u64> {
        self.lowest
    }

    pub fn highest(&self) -> Option<u64> {
        self.highest
    }

    /// `(lowest, highest)`, or `None` when the series holds no data.
    pub fn range(&self) -> Option<(u64, u64)> {
        self.lowest.zip(self.highest)
    }

    pub(crate) fn push(&mut self, value: u64) {
        self.values.push(value);
    }

    pub(crate) fn compute_extrema(&mut self) {
        self.lowest = self.values.iter().min().copied();
        self.highest = self.values.iter().max().copied();
    }
}

/// The first record whose demanded and supplied quantities match.
///
/// Price and quantity keep the record's original field text, so `"010"` is
/// reported as `"010"` rather than `10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquilibriumPoint {
    price: String,
    quantity: String,
    /// 1-based position of the record in the input.
    row: usize,
}

impl EquilibriumPoint {
    pub(crate) fn new(price: &str, quantity: &str, row: usize) -> Self {
        Self {
            price: price.to_string(),
            quantity: quantity.to_string(),
            row,
        }
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn row(&self) -> usize {
        self.row
    }
}

/// The finished result of one aggregation run.
///
/// This struct is the final output of the `AggregationEngine` and the only
/// thing the presentation layer receives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    pub(crate) price: SeriesStats,
    pub(crate) quantity_demanded: SeriesStats,
    pub(crate) quantity_supplied: SeriesStats,
    pub(crate) equilibrium: Option<EquilibriumPoint>,
    pub(crate) records_processed: usize,
    pub(crate) records_malformed: usize,
}

impl AggregateResult {
    pub fn series(&self, column: Column) -> &SeriesStats {
        match column {
            Column::Price => &self.price,
            Column::QuantityDemanded => &self.quantity_demanded,
            Column::QuantitySupplied => &self.quantity_supplied,
        }
    }

    pub(crate) fn series_mut(&mut self, column: Column) -> &mut SeriesStats {
        match column {
            Column::Price => &mut self.price,
            Column::QuantityDemanded => &mut self.quantity_demanded,
            Column::QuantitySupplied => &mut self.quantity_supplied,
        }
    }

    pub fn price(&self) -> &SeriesStats {
        &self.price
    }

    pub fn quantity_demanded(&self) -> &SeriesStats {
        &self.quantity_demanded
    }

    pub fn quantity_supplied(&self) -> &SeriesStats {
        &self.quantity_supplied
    }

    pub fn equilibrium(&self) -> Option<&EquilibriumPoint> {
        self.equilibrium.as_ref()
    }

    /// Number of records offered to the engine, malformed ones included.
    pub fn records_processed(&self) -> usize {
        self.records_processed
    }

    /// Records skipped entirely because they had fewer than three fields.
    pub fn records_malformed(&self) -> usize {
        self.records_malformed
    }
}
