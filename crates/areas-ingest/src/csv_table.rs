//! CSV decoding into raw row tables.

use std::path::Path;

use csv::ReaderBuilder;

use areas_model::RawTable;

use crate::error::{IngestError, Result};

/// Decode bytes as UTF-8, dropping invalid sequences and a leading BOM.
pub fn decode_utf8_ignoring_errors(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Parse CSV text; the first line becomes the header and is kept apart
/// from the data rows.
///
/// Records may have differing lengths. Cell values are kept verbatim; the
/// hierarchy builder trims the fields it reads. A blank line is an empty row,
/// so it fails the column checks like any other short row. Every row keeps
/// the 1-based source line it starts on.
pub fn parse_csv_table(text: &str, source_name: &str) -> Result<RawTable> {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true);

    let mut records: Vec<(usize, Vec<String>)> = Vec::new();
    let mut pending: Option<(usize, String)> = None;
    let mut in_quotes = false;
    for (index, line) in text.lines().enumerate() {
        let (start, buffer) = match pending.take() {
            Some((start, mut buffer)) => {
                buffer.push('\n');
                buffer.push_str(line);
                (start, buffer)
            }
            None => (index + 1, line.to_string()),
        };
        // Quoted fields may span lines; `""` escapes keep the parity.
        in_quotes ^= line.matches('"').count() % 2 == 1;
        if in_quotes {
            pending = Some((start, buffer));
            continue;
        }
        records.push((start, split_record(&builder, &buffer, source_name)?));
    }
    if let Some((start, buffer)) = pending {
        records.push((start, split_record(&builder, &buffer, source_name)?));
    }

    let mut records = records.into_iter();
    let headers: Vec<String> = match records.next() {
        Some((_, cells)) => cells.iter().map(|value| value.trim().to_string()).collect(),
        None => return Ok(RawTable::default()),
    };
    let (lines, rows): (Vec<usize>, Vec<Vec<String>>) = records.unzip();
    Ok(RawTable::new(headers, rows).with_lines(lines))
}

fn split_record(builder: &ReaderBuilder, record: &str, source_name: &str) -> Result<Vec<String>> {
    let mut reader = builder.from_reader(record.as_bytes());
    match reader.records().next() {
        Some(fields) => Ok(fields
            .map_err(|source| csv_error(source_name, source))?
            .iter()
            .map(str::to_string)
            .collect()),
        None => Ok(Vec::new()),
    }
}

/// Read and parse a CSV file from disk.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::file_read(path, source))?;
    parse_csv_table(&decode_utf8_ignoring_errors(&bytes), &path.display().to_string())
}

fn csv_error(source_name: &str, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        source_name: source_name.to_string(),
        source,
    }
}
