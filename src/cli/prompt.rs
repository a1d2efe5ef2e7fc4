use crate::csv_processor::ColumnSelector;
use crate::utils::{CsvTranslatorError, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const MAX_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorMode {
    Name,
    Index,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CsvTranslatorError::InvalidInput(
                "input ended before a value was given".to_string(),
            ));
        }
        Ok(line.trim().to_string())
    }

    fn ask_until<T, F>(&mut self, question: &str, what: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, String>,
    {
        for attempt in 1..=MAX_ATTEMPTS {
            let answer = self.ask(question)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    tracing::debug!(attempt, "Rejected answer for {}", what);
                    writeln!(self.output, "{}", reason)?;
                }
            }
        }
        Err(CsvTranslatorError::InvalidInput(format!(
            "no valid {} after {} attempts",
            what, MAX_ATTEMPTS
        )))
    }

    pub fn ask_input_path(&mut self) -> Result<PathBuf> {
        self.ask_until(
            "Path of the CSV file to translate: ",
            "input path",
            |answer| {
                if answer.is_empty() {
                    return Err("Please enter a file path.".to_string());
                }
                let path = PathBuf::from(answer);
                match std::fs::File::open(&path) {
                    Ok(_) if path.is_file() => Ok(path),
                    Ok(_) => Err(format!("'{}' is not a file.", answer)),
                    Err(e) => Err(format!("Cannot read '{}': {}", answer, e)),
                }
            },
        )
    }

    pub fn ask_has_header(&mut self) -> Result<bool> {
        self.ask_until(
            "Does the file have a header row? (y/n): ",
            "header answer",
            |answer| match answer.to_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                _ => Err("Please answer y or n.".to_string()),
            },
        )
    }

    pub fn ask_selector_mode(&mut self) -> Result<SelectorMode> {
        self.ask_until(
            "Select the column by (1: name, 2: index): ",
            "selection mode",
            |answer| match answer {
                "1" => Ok(SelectorMode::Name),
                "2" => Ok(SelectorMode::Index),
                _ => Err("Please enter 1 or 2.".to_string()),
            },
        )
    }

    pub fn ask_column(&mut self, mode: SelectorMode) -> Result<ColumnSelector> {
        match mode {
            SelectorMode::Name => self.ask_until("Column name: ", "column name", |answer| {
                if answer.is_empty() {
                    Err("Column name cannot be empty.".to_string())
                } else {
                    Ok(ColumnSelector::ByName(answer.to_string()))
                }
            }),
            SelectorMode::Index => {
                self.ask_until("Column index (0-based): ", "column index", |answer| {
                    answer
                        .parse::<usize>()
                        .map(ColumnSelector::ByIndex)
                        .map_err(|_| "Index must be a non-negative integer.".to_string())
                })
            }
        }
    }
}
