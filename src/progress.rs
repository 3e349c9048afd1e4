// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for a long-running scrape.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one deck file lands on disk.
    fn file_done(&mut self, _path: &Path) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints every line to stdout. What the CLI passes in.
pub struct ConsoleProgress;
impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn file_done(&mut self, path: &Path) {
        println!("File written to {}", path.display());
    }
}
