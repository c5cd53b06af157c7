// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

/// Writes crawl progress into the status line shown under the tabs.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, key: &str) {
        self.done += 1;
        self.set_status(format!("Parsed {key} ({}/{})", self.done, self.total));
    }
    fn finish(&mut self) {
        if self.done == 0 {
            self.set_status("Crawl finished, no days admitted");
        } else {
            self.set_status(format!("Crawl complete ({} days)", self.done));
        }
    }
}
