//! Bounded in-memory log of operator-facing diagnostics.
//!
//! Section load failures land here in addition to the tracing log so they
//! can be inspected from the status popup without a log file.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::Mutex;

pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub at: SystemTime,
    pub source: &'static str,
    pub message: String,
}

/// Shared, clonable handle. Oldest entries are evicted past capacity.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    entries: Arc<Mutex<VecDeque<DiagnosticEntry>>>,
    capacity: usize,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&self, source: &'static str, message: impl Into<String>) {
        let mut entries = self.entries.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(DiagnosticEntry {
            at: SystemTime::now(),
            source,
            message: message.into(),
        });
    }

    /// Entries, oldest first.
    pub fn snapshot(&self) -> Vec<DiagnosticEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_past_capacity() {
        let log = DiagnosticLog::with_capacity(2);
        log.record("about", "one");
        log.record("skills", "two");
        log.record("footer", "three");
        let messages: Vec<String> = log.snapshot().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn clones_share_entries() {
        let log = DiagnosticLog::new();
        let other = log.clone();
        other.record("hero", "No hero data found");
        assert_eq!(log.len(), 1);
        assert_eq!(log.snapshot()[0].source, "hero");
    }
}
