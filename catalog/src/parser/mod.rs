//! CSV loader.
//!
//! Reads a delimited file into raw rows: one `Vec<String>` per record, the
//! header included as row 0. No catalog logic here; widths are left as found
//! so the row transformer can judge them.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};

/// A row as read from the file.
pub type RawRow = Vec<String>;

/// Parser options for the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Field delimiter. `None` means detect from the first line.
    pub delimiter: Option<u8>,
    /// Quote character.
    pub quote: u8,
    /// Honour quoting. When off, quote characters are ordinary data.
    pub quoting: bool,
    /// Trim surrounding whitespace from every cell.
    pub trim: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            delimiter: Some(b','),
            quote: b'"',
            quoting: true,
            trim: false,
        }
    }
}

impl LoaderOptions {
    /// Options that detect the delimiter from the content.
    pub fn auto_detect() -> Self {
        Self {
            delimiter: None,
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_quoting(mut self, quoting: bool) -> Self {
        self.quoting = quoting;
        self
    }
}

/// Detect the delimiter by counting occurrences in the first line
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [b',', b';', b'\t', b'|'];
    let mut best_sep = b',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep as char).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Read every row of the CSV file at `path`.
///
/// Errors are propagated: a missing or unreadable file is [`CsvError::Read`],
/// undecodable content is [`CsvError::Parse`].
pub fn read_csv<P: AsRef<Path>>(path: P, options: &LoaderOptions) -> CsvResult<Vec<RawRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CsvError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(file, options, path)
}

/// Parse delimited text from a reader. `source` names the input in errors.
///
/// A blank line comes back as an empty row rather than being dropped, so the
/// row transformer can reject it with its position intact.
pub fn parse_csv<R: Read>(
    mut reader: R,
    options: &LoaderOptions,
    source: &Path,
) -> CsvResult<Vec<RawRow>> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content).map_err(|e| CsvError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let delimiter = match options.delimiter {
        Some(d) => d,
        None => detect_delimiter(&String::from_utf8_lossy(&content)),
    };

    let mut rows = Vec::new();
    for line in split_records(&content, delimiter, options) {
        if is_blank(line.bytes) {
            rows.push(RawRow::new());
            continue;
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .quote(options.quote)
            .quoting(options.quoting)
            .trim(if options.trim { csv::Trim::All } else { csv::Trim::None })
            .from_reader(line.bytes);

        for result in csv_reader.records() {
            let record = result.map_err(|e| CsvError::Parse {
                path: source.to_path_buf(),
                line: line.number + e.position().map(|p| p.line()).unwrap_or(1) - 1,
                message: e.to_string(),
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }
    }

    Ok(rows)
}

/// One logical record of the input and the line it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RecordLine<'a> {
    number: u64,
    bytes: &'a [u8],
}

/// Field-level position while scanning for record boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Split `content` into logical records, one per unquoted `\n`.
///
/// Newlines inside a quoted field stay in their record. A quote only opens a
/// quoted field at the start of the field, matching how the `csv` reader
/// treats it. The empty tail after a final newline is not a record.
fn split_records<'a>(
    content: &'a [u8],
    delimiter: u8,
    options: &LoaderOptions,
) -> Vec<RecordLine<'a>> {
    let mut records = Vec::new();
    let mut state = ScanState::FieldStart;
    let mut start = 0;
    let mut start_line = 1;
    let mut line = 1;

    for (pos, &byte) in content.iter().enumerate() {
        let quote = options.quoting && byte == options.quote;
        state = match state {
            ScanState::Quoted if quote => ScanState::QuoteInQuoted,
            ScanState::Quoted => ScanState::Quoted,
            ScanState::QuoteInQuoted if quote => ScanState::Quoted,
            ScanState::FieldStart if quote => ScanState::Quoted,
            _ if byte == delimiter => ScanState::FieldStart,
            _ if byte == b'\n' => ScanState::FieldStart,
            _ => ScanState::Unquoted,
        };

        if byte == b'\n' {
            line += 1;
            if state == ScanState::FieldStart {
                records.push(RecordLine {
                    number: start_line,
                    bytes: &content[start..pos],
                });
                start = pos + 1;
                start_line = line;
            }
        }
    }

    if start < content.len() {
        records.push(RecordLine {
            number: start_line,
            bytes: &content[start..],
        });
    }

    records
}

fn is_blank(line: &[u8]) -> bool {
    line.is_empty() || line == b"\r"
}

/// Parse CSV text held in memory. Used by tests and callers that already
/// have the content.
pub fn parse_str(content: &str, options: &LoaderOptions) -> CsvResult<Vec<RawRow>> {
    parse_csv(content.as_bytes(), options, Path::new("<memory>"))
}
