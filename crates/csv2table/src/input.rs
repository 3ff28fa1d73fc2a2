//! Input source selection

use csv2table_core::{Csv2TableError, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Where the CSV is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(Input::Stdin, Input::File)
    }

    /// Open the source for buffered reading
    ///
    /// A file handle is closed when the reader is dropped; stdin stays open.
    ///
    /// # Errors
    ///
    /// Returns `InputOpenFailed` if the file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::File(path) => {
                let file = File::open(path).map_err(|source| Csv2TableError::InputOpenFailed {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}
