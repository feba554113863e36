use std::fmt;

/// The three tracked columns of a schedule record, in their fixed input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Price,
    QuantityDemanded,
    QuantitySupplied,
}

impl Column {
    /// Every column, ordered by position in the record.
    pub const ALL: [Column; 3] = [
        Column::Price,
        Column::QuantityDemanded,
        Column::QuantitySupplied,
    ];

    /// Positional index of the column inside a record.
    pub fn index(&self) -> usize {
        match self {
            Column::Price => 0,
            Column::QuantityDemanded => 1,
            Column::QuantitySupplied => 2,
        }
    }

    /// Human-readable name used in reports and log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Price => "price",
            Column::QuantityDemanded => "quantity demanded",
            Column::QuantitySupplied => "quantity supplied",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_record_order() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }
}
