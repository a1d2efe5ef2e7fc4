use crate::csv_processor::table::{LineEnding, Row, Table, TextLayout};
use crate::utils::{CsvTranslatorError, Result};
use csv::StringRecord;
use std::path::{Path, PathBuf};

pub struct CsvTableReader {
    path: PathBuf,
    has_header: bool,
}

impl CsvTableReader {
    pub fn new(path: impl Into<PathBuf>, has_header: bool) -> Self {
        Self {
            path: path.into(),
            has_header,
        }
    }

    pub fn read(&self) -> Result<Table> {
        if !file_exists(&self.path) {
            return Err(CsvTranslatorError::FileNotFound(
                self.path.display().to_string(),
            ));
        }

        let file = std::fs::File::open(&self.path)?;
        read_from(file, self.has_header)
    }
}

pub fn read_table(path: impl AsRef<Path>, has_header: bool) -> Result<Table> {
    CsvTableReader::new(path.as_ref(), has_header).read()
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// Header handling is done here rather than by `csv` so an empty input never
// produces a phantom header record.
pub fn read_from<R: std::io::Read>(mut source: R, has_header: bool) -> Result<Table> {
    let mut data = Vec::new();
    source.read_to_end(&mut data)?;

    let bom = data.starts_with(UTF8_BOM);
    let body = if bom { &data[UTF8_BOM.len()..] } else { &data[..] };
    let mut layout = scan_layout(body)?;
    layout.bom = bom;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body);

    let mut records = reader.records();

    let headers = if has_header {
        match records.next() {
            Some(record) => Some(record_to_row(&record?)),
            None => None,
        }
    } else {
        None
    };

    let mut rows = Vec::new();
    for result in records {
        let record = result?;
        rows.push(record_to_row(&record));
    }

    tracing::debug!(
        rows = rows.len(),
        has_header = headers.is_some(),
        bom = layout.bom,
        crlf = layout.line_ending == LineEnding::CrLf,
        "CSV table loaded"
    );

    Ok(Table::new(headers, rows).with_layout(layout))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

// `csv` silently closes a quoted field at end of input, so the quote state
// is tracked here too. The first record terminator outside quotes decides
// the line ending.
fn scan_layout(data: &[u8]) -> Result<TextLayout> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1usize;
    let mut opened_on = 0usize;
    let mut line_ending = None;
    let mut prev = 0u8;

    for &b in data {
        if b == b'\n' && state != QuoteState::Quoted && line_ending.is_none() {
            line_ending = Some(if prev == b'\r' {
                LineEnding::CrLf
            } else {
                LineEnding::Lf
            });
        }

        state = match (state, b) {
            (QuoteState::FieldStart, b'"') => {
                opened_on = line;
                QuoteState::Quoted
            }
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (_, b',' | b'\n' | b'\r') => QuoteState::FieldStart,
            _ => QuoteState::Unquoted,
        };
        if b == b'\n' {
            line += 1;
        }
        prev = b;
    }

    if state == QuoteState::Quoted {
        return Err(CsvTranslatorError::MalformedCsv(format!(
            "unterminated quoted field starting on line {}",
            opened_on
        )));
    }

    Ok(TextLayout {
        bom: false,
        line_ending: line_ending.unwrap_or_default(),
        final_newline: data.is_empty() || data.ends_with(b"\n"),
    })
}

pub fn record_to_row(record: &StringRecord) -> Row {
    record.iter().map(|s| s.to_string()).collect()
}

pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn header_is_split_from_data_rows() {
        let table = read_from("id,text\n1,hello\n2,\n".as_bytes(), true).unwrap();
        assert_eq!(
            table.headers,
            Some(vec!["id".to_string(), "text".to_string()])
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["2".to_string(), String::new()]);
    }

    #[test]
    fn without_header_every_line_is_data() {
        let table = read_from("id,text\n1,hello\n".as_bytes(), false).unwrap();
        assert!(table.headers.is_none());
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn quoted_fields_keep_commas_quotes_and_newlines() {
        let input = "a,b\n\"x, y\",\"say \"\"hi\"\"\nthere\"\n";
        let table = read_from(input.as_bytes(), true).unwrap();
        assert_eq!(table.rows[0][0], "x, y");
        assert_eq!(table.rows[0][1], "say \"hi\"\nthere");
    }

    #[test]
    fn empty_input_is_an_empty_table() {
        let table = read_from("".as_bytes(), true).unwrap();
        assert!(table.headers.is_none());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        let table = read_from("1,2,3\n4\n".as_bytes(), false).unwrap();
        assert_eq!(table.rows[0].len(), 3);
        assert_eq!(table.rows[1].len(), 1);
    }

    #[test]
    fn invalid_utf8_is_a_csv_error() {
        let bytes: &[u8] = b"a,b\n\xff\xfe,ok\n";
        let err = read_from(bytes, true).unwrap_err();
        assert!(matches!(err, CsvTranslatorError::CsvError(_)));
    }

    #[test]
    fn unterminated_quote_is_malformed() {
        let err = read_from("id,text\n1,\"never closed\n".as_bytes(), true).unwrap_err();
        assert!(matches!(err, CsvTranslatorError::MalformedCsv(ref m) if m.contains("line 2")));
    }

    #[test]
    fn stray_quotes_in_unquoted_fields_are_literal() {
        let table = read_from("size,label\n5\",screen 5\" wide\n".as_bytes(), true).unwrap();
        assert_eq!(table.rows[0][0], "5\"");
        assert_eq!(table.rows[0][1], "screen 5\" wide");
    }

    #[test]
    fn missing_file_is_reported_by_path() {
        let err = read_table("/definitely/not/here.csv", true).unwrap_err();
        assert!(matches!(err, CsvTranslatorError::FileNotFound(ref p) if p.contains("here.csv")));
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name,notes\nalpha,first\n").unwrap();

        let table = read_table(file.path(), true).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0][1], "first");
    }

    #[test]
    fn crlf_terminators_are_detected() {
        let table = read_from("id,text\r\n1,hello\r\n".as_bytes(), true).unwrap();
        assert_eq!(table.layout.line_ending, LineEnding::CrLf);
        assert!(table.layout.final_newline);
        assert_eq!(table.rows[0], vec!["1".to_string(), "hello".to_string()]);
    }

    #[test]
    fn newline_inside_quotes_does_not_decide_line_ending() {
        let table = read_from("a,\"x\r\ny\"\n1,2\n".as_bytes(), false).unwrap();
        assert_eq!(table.layout.line_ending, LineEnding::Lf);
        assert_eq!(table.rows[0][1], "x\r\ny");
    }

    #[test]
    fn missing_final_newline_is_recorded() {
        let table = read_from("id,text\n1,hello".as_bytes(), true).unwrap();
        assert!(!table.layout.final_newline);
        assert_eq!(table.rows[0][1], "hello");
    }

    #[test]
    fn bom_is_stripped_from_first_header_and_recorded() {
        let table = read_from("\u{feff}id,text\n1,hello\n".as_bytes(), true).unwrap();
        assert!(table.layout.bom);
        assert_eq!(
            table.headers,
            Some(vec!["id".to_string(), "text".to_string()])
        );
    }
}
