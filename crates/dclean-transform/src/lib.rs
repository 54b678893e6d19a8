//! Table cleaning pipeline.
//!
//! Each step is a standalone function over a mutable [`dclean_model::Table`]
//! plus explicit configuration, composed in a fixed order by
//! [`pipeline::clean`]:
//!
//! - **normalize**: placeholder token replacement and type re-inference
//! - **summary**: read-only missing-value counts per column
//! - **impute**: row-mean fill for missing numeric cells
//! - **drop**: removal of rows or columns containing missing cells
//! - **select**: explicit row retention with 1-based positions
//! - **rename**: year-marker column name simplification

pub mod drop;
pub mod impute;
pub mod normalize;
pub mod pipeline;
pub mod rename;
pub mod select;
pub mod summary;

pub use drop::{DropMode, drop_missing};
pub use impute::{ImputeMode, impute_row_mean};
pub use normalize::normalize_placeholders;
pub use pipeline::{CleanConfig, CleanReport, clean};
pub use rename::simplify_column_names;
pub use select::{RowSelection, select_rows};
pub use summary::missing_summary;
