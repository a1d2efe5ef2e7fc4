use crate::csv_processor::table::Table;
use crate::utils::{CsvTranslatorError, Result};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    ByName(String),
    ByIndex(usize),
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::ByName(name) => write!(f, "column '{}'", name),
            ColumnSelector::ByIndex(index) => write!(f, "column #{}", index),
        }
    }
}

// Duplicate header names are rejected rather than picking one.
pub fn resolve_column(table: &Table, selector: &ColumnSelector) -> Result<usize> {
    match selector {
        ColumnSelector::ByName(name) => {
            let headers = table.headers.as_ref().ok_or_else(|| {
                let reason = if table.rows.is_empty() {
                    "the file is empty"
                } else {
                    "the file was read without a header row"
                };
                CsvTranslatorError::ColumnNotFound(format!("'{}' ({})", name, reason))
            })?;

            let matches: Vec<usize> = headers
                .iter()
                .enumerate()
                .filter(|(_, h)| h.as_str() == name)
                .map(|(i, _)| i)
                .collect();

            match matches.as_slice() {
                [] => Err(CsvTranslatorError::ColumnNotFound(format!("'{}'", name))),
                [index] => Ok(*index),
                _ => Err(CsvTranslatorError::AmbiguousColumn {
                    name: name.clone(),
                    count: matches.len(),
                }),
            }
        }
        ColumnSelector::ByIndex(index) => {
            let width = table.width();
            if *index < width {
                Ok(*index)
            } else {
                Err(CsvTranslatorError::ColumnIndexOutOfRange {
                    index: *index,
                    width,
                })
            }
        }
    }
}
