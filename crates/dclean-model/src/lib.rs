//! Data model for the dataset cleaning pipeline.

pub mod error;
pub mod table;

pub use error::{CleanError, Result};
pub use table::{CellValue, Column, Table};
