pub mod column;
pub mod reader;
pub mod table;
pub mod writer;

pub use column::{resolve_column, ColumnSelector};
pub use reader::{file_exists, read_from, read_table, CsvTableReader};
pub use table::{Row, Table};
pub use writer::{write_table, CsvStreamWriter};
