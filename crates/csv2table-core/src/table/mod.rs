//! Table model and builder
//!
//! The builder drives the line splitter once per input line, keeps owned
//! copies of every field and tracks the widest cell per column index.

mod builder;
mod model;

pub use builder::TableBuilder;
pub use model::{Row, Table};
