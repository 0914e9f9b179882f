use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::warn;
use url::Url;

use crate::error::ScrapeError;

/// One row of the input list, immutable once parsed.
#[derive(Debug, Clone)]
pub struct InputRecord {
    pub name: String,
    pub url: Url,
}

/// Load input rows from a CSV file with a header row.
///
/// Header names are matched case/spacing-insensitively ("Company Name",
/// "companyName" and "company_name" all map to the same column); columns
/// other than the company name and profile URL are ignored. Malformed rows
/// are logged and skipped. A missing file or missing required columns is
/// fatal.
pub fn load_records(path: &Path) -> Result<Vec<InputRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open input file {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read CSV header from {}", path.display()))?
        .clone();
    let name_idx = find_column(&headers, "companyname");
    let url_idx = find_column(&headers, "ycurl");
    let (Some(name_idx), Some(url_idx)) = (name_idx, url_idx) else {
        bail!(
            "input file {} is missing the companyName/ycUrl columns (found: {:?})",
            path.display(),
            headers.iter().collect::<Vec<_>>()
        );
    };

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        // 1-based row number counting the header line
        match parse_row(row, name_idx, url_idx, i + 2) {
            Ok(record) => records.push(record),
            Err(e) => warn!("skipping {e}"),
        }
    }
    Ok(records)
}

fn parse_row(
    row: csv::Result<csv::StringRecord>,
    name_idx: usize,
    url_idx: usize,
    row_no: usize,
) -> Result<InputRecord, ScrapeError> {
    let parse_err = |reason: String| ScrapeError::InputParse {
        row: row_no,
        reason,
    };

    let row = row.map_err(|e| parse_err(e.to_string()))?;
    let name = row.get(name_idx).map(str::trim).unwrap_or_default();
    let raw_url = row.get(url_idx).map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(parse_err("empty company name".into()));
    }
    if raw_url.is_empty() {
        return Err(parse_err("empty profile URL".into()));
    }
    let url =
        Url::parse(raw_url).map_err(|e| parse_err(format!("bad profile URL {raw_url:?}: {e}")))?;

    Ok(InputRecord {
        name: name.to_string(),
        url,
    })
}

fn find_column(headers: &csv::StringRecord, canonical: &str) -> Option<usize> {
    headers.iter().position(|h| canonical_key(h) == canonical)
}

/// "Company Name" → "companyname", "YC_URL" → "ycurl".
fn canonical_key(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

// ── Tests ──
