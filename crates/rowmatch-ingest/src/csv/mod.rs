//! CSV reading with header validation.

mod header;
mod reader;

pub use header::{CsvHeaders, normalize_header, parse_csv_line};
pub use reader::{
    CsvOptions, MAX_CSV_FILE_SIZE, check_file_size, read_csv_frame, read_csv_schema,
    validate_encoding,
};
