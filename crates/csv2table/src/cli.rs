//! CLI command structure using clap

use clap::Parser;
use csv2table_core::{Limits, RaggedPolicy, TableOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csv2table")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CSV file to read (standard input when omitted)
    pub input: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    /// Fail on rows whose field count differs from the first row
    #[arg(long)]
    pub strict: bool,

    /// Ignore input rows after the first N
    #[arg(long, value_name = "N")]
    pub max_rows: Option<usize>,

    /// Fold fields after the first N into the Nth column
    #[arg(long, value_name = "N")]
    pub max_columns: Option<usize>,
}

impl Cli {
    /// Table options selected by the flags
    pub fn table_options(&self) -> TableOptions {
        let ragged = if self.strict {
            RaggedPolicy::Reject
        } else {
            RaggedPolicy::Pad
        };

        TableOptions::new().with_ragged(ragged).with_limits(Limits {
            max_rows: self.max_rows,
            max_columns: self.max_columns,
        })
    }
}
