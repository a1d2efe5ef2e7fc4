pub type Row = Vec<String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayout {
    pub bom: bool,
    pub line_ending: LineEnding,
    pub final_newline: bool,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            bom: false,
            line_ending: LineEnding::Lf,
            final_newline: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Option<Row>,
    pub rows: Vec<Row>,
    pub layout: TextLayout,
}

impl Table {
    pub fn new(headers: Option<Row>, rows: Vec<Row>) -> Self {
        Self {
            headers,
            rows,
            layout: TextLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: TextLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    // first data row wins; the header only counts for header-only files
    pub fn width(&self) -> usize {
        self.rows
            .first()
            .or(self.headers.as_ref())
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn width_prefers_first_data_row() {
        let table = Table::new(Some(row(&["a", "b", "c"])), vec![row(&["1", "2"])]);
        assert_eq!(table.width(), 2);
    }

    #[test]
    fn width_falls_back_to_header() {
        let table = Table::new(Some(row(&["a", "b", "c"])), Vec::new());
        assert_eq!(table.width(), 3);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn empty_table_has_zero_width() {
        assert_eq!(Table::default().width(), 0);
    }

    #[test]
    fn default_layout_is_plain_lf_with_final_newline() {
        let layout = Table::default().layout;
        assert!(!layout.bom);
        assert!(layout.final_newline);
        assert_eq!(layout.line_ending.as_bytes(), b"\n");
        assert_eq!(LineEnding::CrLf.as_bytes(), b"\r\n");
    }
}
