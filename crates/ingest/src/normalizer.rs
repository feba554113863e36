use core_types::Record;

/// Trims leading and trailing whitespace from every field of a raw row.
///
/// Field count and order are preserved. Case, inner whitespace and empty
/// fields are left alone.
pub fn normalize_row<I, S>(fields: I) -> Record
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Record::new(
        fields
            .into_iter()
            .map(|field| field.as_ref().trim().to_string())
            .collect(),
    )
}
