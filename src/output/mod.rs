//! Report writers.

mod csv;
mod json;
pub mod progress;
mod table;
mod writer;

pub use self::csv::CsvWriter;
pub use json::{JsonReport, JsonSummary, JsonWriter};
pub use table::TableWriter;
pub use writer::{OutputWriter, write_report};
