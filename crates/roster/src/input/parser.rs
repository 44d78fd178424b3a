//! CSV/TSV parser with delimiter detection.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::source::{DataTable, SourceMetadata};
use crate::error::{Result, RosterError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            quote: b'"',
        }
    }
}

/// Parses delimited files with a header row.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| RosterError::io(path, e))?;
        let size_bytes = contents.len() as u64;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let data_table = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let source_metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            data_table.row_count(),
            data_table.column_count(),
        );

        Ok((data_table, source_metadata))
    }

    /// Parse in-memory text, detecting the delimiter unless one is configured.
    pub fn parse_str(&self, text: &str) -> Result<DataTable> {
        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(text.as_bytes())?,
        };
        self.parse_bytes(text.as_bytes(), delimiter)
    }

    /// Parse bytes with a known delimiter.
    fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|s| s.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(RosterError::EmptyData("No columns found".to_string()));
        }

        let expected_cols = headers.len();
        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result?;
            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();

            // Pad short rows, drop trailing extras
            row.resize(expected_cols, String::new());

            rows.push(row);
        }

        Ok(DataTable::new(headers, rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(RosterError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts
                .iter()
                .map(|&c| (c as f64 - mean).powi(2))
                .sum::<f64>()
                / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tab gets a small bonus
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
