use std::io::{self, BufWriter, StdoutLock};

/// Buffered, locked standard output
pub fn stdout() -> BufWriter<StdoutLock<'static>> {
    BufWriter::new(io::stdout().lock())
}

/// Whether a write failed because the reader went away (e.g. `| head`)
pub fn is_broken_pipe(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::BrokenPipe
}
