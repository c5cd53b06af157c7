// src/progress.rs
/// Progress reporting for a crawl. Frontends implement this to surface status.
pub trait Progress {
    /// Called at the start with an upper bound on accepted days.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One day record was accepted under `label`.
    fn item_done(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
