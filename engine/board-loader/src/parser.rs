//! Header-row CSV parsing into prospect records

use std::io::Read;
use tracing::{debug, warn};

use crate::error::{LoaderError, Result};
use crate::types::ProspectRecord;

/// Parsed rows plus the header they were keyed by
#[derive(Debug, Clone, Default)]
pub struct ParsedBoard {
    pub headers: Vec<String>,
    pub records: Vec<ProspectRecord>,
}

/// Parse CSV text whose first row names the fields
///
/// Short rows are accepted: trailing fields they do not carry are left out
/// of the record. Cells beyond the header width are dropped.
pub fn parse_board<R: Read>(source_name: &str, rdr: R) -> Result<ParsedBoard> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(rdr);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoaderError::Csv { source_name: source_name.to_string(), source: e })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(LoaderError::MissingHeader(source_name.to_string()));
    }

    let mut records = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("skipping malformed row {} in {}: {}", row_index + 1, source_name, e);
                continue;
            }
        };

        if row.len() > headers.len() {
            debug!(
                "row {} in {} has {} cells for {} headers, dropping the extra cells",
                row_index + 1,
                source_name,
                row.len(),
                headers.len()
            );
        }

        let fields = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.clone(), value.trim().to_string()))
            .collect();

        records.push(ProspectRecord::new(fields));
    }

    Ok(ParsedBoard { headers, records })
}

/// Parse CSV held in memory
pub fn parse_board_str(source_name: &str, text: &str) -> Result<ParsedBoard> {
    parse_board(source_name, text.as_bytes())
}
