//! CSV ingestion and export for the cleaning pipeline.
//!
//! Loading parses a CSV byte stream into the [`dclean_model::Table`]
//! model, trimming cells and inferring per-column types (a column is
//! numeric when every non-missing cell parses as `f64`). Export writes
//! the table back out with a header row; missing cells round-trip
//! through the empty string.

mod csv_read;
mod csv_write;

pub use csv_read::{read_table, read_table_from};
pub use csv_write::{format_number, write_table, write_table_to};
