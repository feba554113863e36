use crate::error::IngestError;
use crate::normalizer::normalize_row;
use configuration::InputSettings;
use core_types::Record;
use std::fs::File;
use std::io;
use std::path::Path;

/// Reads raw records from delimited text, strictly in input order.
///
/// Every line is data: there is no header row and quote characters are kept
/// as ordinary field content. Rows may have any number of fields. Bytes that
/// are not valid UTF-8 are replaced with U+FFFD, so such a field simply fails
/// the numeric rule downstream instead of ending the run.
pub struct CsvRecordSource<R: io::Read> {
    records: csv::ByteRecordsIntoIter<R>,
}

impl CsvRecordSource<File> {
    pub fn open(path: &Path, settings: &InputSettings) -> Result<Self, IngestError> {
        let file = File::open(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, settings)
    }
}

impl<R: io::Read> CsvRecordSource<R> {
    pub fn from_reader(reader: R, settings: &InputSettings) -> Result<Self, IngestError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::None)
            .delimiter(settings.delimiter_byte()?)
            .from_reader(reader);

        Ok(Self {
            records: reader.into_byte_records(),
        })
    }

    /// Raw records passed through the normalizer.
    pub fn normalized(self) -> impl Iterator<Item = Result<Record, IngestError>> {
        self.map(|raw| raw.map(normalize_row))
    }
}

impl<R: io::Read> Iterator for CsvRecordSource<R> {
    type Item = Result<Vec<String>, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map(|r| {
                    r.iter()
                        .map(|field| String::from_utf8_lossy(field).into_owned())
                        .collect()
                })
                .map_err(IngestError::from),
        )
    }
}
