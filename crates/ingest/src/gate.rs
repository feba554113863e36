use crate::error::IngestError;
use configuration::InputSettings;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Accepts or rejects an input file before any record is read from it.
///
/// The checks run in order: the `.csv` extension (when required by the
/// settings), readability, then a sniff of the first `sniff_bytes` bytes. The
/// sniff wants UTF-8 text whose first line contains the delimiter, and every
/// other complete non-blank line in the sample must contain it too.
pub fn validate_input(path: &Path, settings: &InputSettings) -> Result<(), IngestError> {
    if settings.require_csv_extension && !path.to_string_lossy().ends_with(".csv") {
        return Err(IngestError::NotCsv(path.to_path_buf()));
    }

    let delimiter = settings.delimiter_byte()? as char;
    let sample = read_sample(path, settings.sniff_bytes)?;
    let reached_eof = sample.len() < settings.sniff_bytes;

    sniff(&sample, delimiter, reached_eof).map_err(|reason| IngestError::SniffFailed {
        path: path.to_path_buf(),
        reason,
    })?;

    tracing::debug!(path = %path.display(), bytes = sample.len(), "input accepted by gate");
    Ok(())
}

fn read_sample(path: &Path, limit: usize) -> Result<Vec<u8>, IngestError> {
    let io_err = |source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let mut sample = Vec::with_capacity(limit);
    file.take(limit as u64)
        .read_to_end(&mut sample)
        .map_err(io_err)?;
    Ok(sample)
}

fn sniff(sample: &[u8], delimiter: char, reached_eof: bool) -> Result<(), String> {
    let text = match std::str::from_utf8(sample) {
        Ok(text) => text,
        // The sample may end in the middle of a multi-byte character.
        Err(e) if e.error_len().is_none() && !reached_eof => {
            std::str::from_utf8(&sample[..e.valid_up_to()]).map_err(|e| e.to_string())?
        }
        Err(e) => return Err(format!("not UTF-8 text ({e})")),
    };

    if text.trim().is_empty() {
        return Err("file is empty".to_string());
    }

    let mut lines: Vec<&str> = text.split('\n').collect();
    if !reached_eof && lines.len() > 1 {
        // Last line was cut by the sample limit.
        lines.pop();
    }

    let mut complete = lines
        .into_iter()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty());

    match complete.next() {
        Some(first) if first.contains(delimiter) => {}
        Some(_) => return Err(format!("first line has no {delimiter:?} delimiter")),
        None => return Err("no complete line in sample".to_string()),
    }

    if let Some(line) = complete.find(|line| !line.contains(delimiter)) {
        return Err(format!("line {line:?} has no {delimiter:?} delimiter"));
    }
    Ok(())
}
