use crate::enums::Column;

/// One normalized input row: an ordered sequence of text fields.
///
/// The record does not enforce arity. A row with fewer than three fields is a
/// valid `Record` and it is up to the consumer to treat it as malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field for `column`, or `None` when the record is too short.
    pub fn field(&self, column: Column) -> Option<&str> {
        self.fields.get(column.index()).map(String::as_str)
    }
}
