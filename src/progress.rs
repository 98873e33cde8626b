// src/progress.rs
/// Lightweight progress reporting used by long-running operations (scrape).
/// Frontends (CLI/GUI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one manuscript id has been fetched and parsed.
    fn item_done(&mut self, _id: u64, _shelfmark: &str) {}

    /// Called when one manuscript id failed; the run keeps going.
    fn item_failed(&mut self, _id: u64) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
