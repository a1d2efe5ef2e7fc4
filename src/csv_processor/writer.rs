use crate::csv_processor::table::{LineEnding, Row, Table, TextLayout};
use crate::utils::{CsvTranslatorError, Result};
use csv::{Terminator, Writer};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct CsvStreamWriter {
    path: PathBuf,
    headers: Option<Row>,
    layout: TextLayout,
    writer: Option<Writer<File>>,
    rows_written: usize,
}

impl CsvStreamWriter {
    pub fn new(path: impl Into<PathBuf>, headers: Option<Row>) -> Self {
        Self {
            path: path.into(),
            headers,
            layout: TextLayout::default(),
            writer: None,
            rows_written: 0,
        }
    }

    pub fn with_layout(mut self, layout: TextLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn initialize(&mut self) -> Result<()> {
        let mut file = File::create(&self.path)?;
        if self.layout.bom {
            file.write_all(UTF8_BOM)?;
        }

        let terminator = match self.layout.line_ending {
            LineEnding::Lf => Terminator::Any(b'\n'),
            LineEnding::CrLf => Terminator::CRLF,
        };
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(terminator)
            .from_writer(file);
        if let Some(headers) = &self.headers {
            writer.write_record(headers)?;
        }
        self.writer = Some(writer);
        Ok(())
    }

    pub fn write_row(&mut self, row: &[String]) -> Result<()> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            CsvTranslatorError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "Writer not initialized",
            ))
        })?;

        writer.write_record(row)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn write_rows(&mut self, rows: &[Row]) -> Result<()> {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<usize> {
        let Some(mut writer) = self.writer.take() else {
            return Ok(self.rows_written);
        };
        writer.flush()?;

        let wrote_any = self.headers.is_some() || self.rows_written > 0;
        if !self.layout.final_newline && wrote_any {
            let file = writer
                .into_inner()
                .map_err(|e| CsvTranslatorError::IoError(e.into_error()))?;
            let len = file.metadata()?.len();
            let terminator = self.layout.line_ending.as_bytes().len() as u64;
            file.set_len(len.saturating_sub(terminator))?;
        }
        Ok(self.rows_written)
    }
}

pub fn write_table(path: impl AsRef<Path>, table: &Table) -> Result<usize> {
    let mut writer =
        CsvStreamWriter::new(path.as_ref(), table.headers.clone()).with_layout(table.layout);
    writer.initialize()?;
    writer.write_rows(&table.rows)?;
    let written = writer.finish()?;

    tracing::debug!(path = %path.as_ref().display(), rows = written, "CSV table written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_processor::reader::read_table;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn header_is_written_before_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::new(
            Some(row(&["id", "text"])),
            vec![row(&["1", "bonjour"]), row(&["2", ""])],
        );

        let written = write_table(&path, &table).unwrap();
        assert_eq!(written, 2);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "id,text\n1,bonjour\n2,\n"
        );
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale,content\nmore,lines\nand,more\n").unwrap();

        write_table(&path, &Table::new(None, vec![row(&["fresh"])])).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn formula_like_cells_are_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::new(None, vec![row(&["=SUM(A1)", "-3", "a, b"])]);

        write_table(&path, &table).unwrap();
        let back = read_table(&path, false).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn unwritable_destination_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = write_table(&path, &Table::default()).unwrap_err();
        assert!(matches!(err, CsvTranslatorError::IoError(_)));
    }

    #[test]
    fn writing_before_initialize_fails() {
        let mut writer = CsvStreamWriter::new("unused.csv", None);
        let err = writer.write_row(&row(&["x"])).unwrap_err();
        assert!(matches!(err, CsvTranslatorError::IoError(_)));
        assert_eq!(writer.finish().unwrap(), 0);
    }

    #[test]
    fn layout_is_replayed_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let layout = TextLayout {
            bom: true,
            line_ending: LineEnding::CrLf,
            final_newline: false,
        };
        let table = Table::new(Some(row(&["id", "text"])), vec![row(&["1", "hello"])])
            .with_layout(layout);

        write_table(&path, &table).unwrap();
        assert_eq!(
            std::fs::read(&path).unwrap(),
            b"\xEF\xBB\xBFid,text\r\n1,hello".to_vec()
        );
    }
}
