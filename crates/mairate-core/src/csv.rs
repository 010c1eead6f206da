//! Minimal CSV reading for master data and score exports.
//!
//! The upstream files are spreadsheet-flavored CSV: UTF-8 with a BOM (or
//! Shift-JIS from older exports), a header row, and quoted fields with `""`
//! escapes. The inputs are machine-generated and narrow, so this is a small
//! hand-rolled reader rather than a full CSV dependency.

use tracing::warn;

/// A parsed CSV table: one header row plus data rows.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse CSV text. The first record is taken as the header row; fully
    /// blank lines are ignored.
    pub fn parse(text: &str) -> Self {
        let mut records = split_records(text);
        if records.is_empty() {
            return Self::default();
        }
        let headers = records
            .remove(0)
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect();
        Self {
            headers,
            rows: records,
        }
    }

    /// Find the index of a column matching any of the given header names.
    pub fn column(&self, names: &[&str]) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| names.iter().any(|name| name.eq_ignore_ascii_case(header)))
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// Field accessor tolerant of short rows.
pub fn field(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Decode raw file bytes to text.
///
/// Strips a UTF-8 BOM if present; bytes that are not valid UTF-8 are
/// decoded as Shift-JIS, which older spreadsheet exports still use.
pub fn decode(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (decoded, _, had_errors) = encoding_rs::SHIFT_JIS.decode(bytes);
            if had_errors {
                warn!(
                    "Shift-JIS decoding had errors for bytes: {:?}",
                    &bytes[..bytes.len().min(20)]
                );
            }
            decoded.into_owned()
        }
    }
}

/// Split CSV text into records, honoring quoted fields (embedded commas,
/// `""` escapes, and quoted newlines).
fn split_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut buf = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    buf.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                buf.push(c);
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut buf)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut buf));
                records.push(std::mem::take(&mut record));
            }
            _ => buf.push(c),
        }
    }

    if !buf.is_empty() || !record.is_empty() {
        record.push(buf);
        records.push(record);
    }

    // Blank lines parse as a single empty field
    records.retain(|r| r.len() > 1 || !r[0].is_empty());
    records
}
