//! CSV file reading and pre-load validation.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, parse_csv_line};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Options controlling how a delimited file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field separator byte.
    pub separator: u8,
    /// Largest accepted file size in bytes.
    pub max_file_size: u64,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: b',',
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }
}

impl CsvOptions {
    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Check file size against a limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects UTF-16 encoded files. A UTF-8 BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open_file(path)?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads the header line of a delimited file.
pub fn read_csv_schema(path: &Path, separator: u8) -> Result<CsvHeaders> {
    let reader = BufReader::new(open_file(path)?);
    let Some(first) = reader.lines().next() else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    let line = first.map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let line = line.strip_prefix('\u{feff}').unwrap_or(&line);

    let columns = parse_csv_line(line, char::from(separator));
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    if columns.iter().any(String::is_empty) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }
    Ok(CsvHeaders::new(columns))
}

/// Reads a delimited file into a Polars DataFrame.
///
/// Column types are inferred from the whole file; empty fields become nulls.
pub fn read_csv_frame(path: &Path, options: &CsvOptions) -> Result<DataFrame> {
    check_file_size(path, options.max_file_size)?;
    validate_encoding(path)?;
    read_csv_schema(path, options.separator)?;

    let separator = options.separator;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(move |parse: CsvParseOptions| parse.with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() > 500 {
        tracing::warn!(
            path = %path.display(),
            columns = df.width(),
            "Dataset has more than 500 columns - may impact performance"
        );
    }

    Ok(df)
}
