//! Table building options

mod model;

pub use model::{Limits, RaggedPolicy, TableOptions};
