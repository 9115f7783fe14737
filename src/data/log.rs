//! Rolling log of status and error messages shown in the dashboard.

use std::collections::VecDeque;

use chrono::Local;

/// Number of messages kept in the dashboard log.
pub const MAX_LOG_MESSAGES: usize = 10;

/// Bounded FIFO of timestamped messages; the oldest is dropped first.
#[derive(Debug, Clone)]
pub struct MessageLog {
    messages: VecDeque<String>,
    capacity: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(MAX_LOG_MESSAGES)
    }
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Append a message, prefixed with the local wall-clock time.
    pub fn push(&mut self, message: impl AsRef<str>) {
        let line = format!("[{}] {}", Local::now().format("%H:%M:%S"), message.as_ref());
        if self.messages.len() == self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(line);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.back().map(String::as_str)
    }

    /// Number of messages containing `needle`.
    pub fn count_matching(&self, needle: &str) -> usize {
        self.messages.iter().filter(|m| m.contains(needle)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_drops_oldest() {
        let mut log = MessageLog::default();
        for i in 0..15 {
            log.push(format!("message {}", i));
        }
        assert_eq!(log.len(), MAX_LOG_MESSAGES);
        let first = log.iter().next().unwrap();
        assert!(first.ends_with("message 5"));
        assert!(log.last().unwrap().ends_with("message 14"));
    }

    #[test]
    fn test_log_prefixes_time() {
        let mut log = MessageLog::default();
        log.push("hello");
        let line = log.last().unwrap();
        // "[HH:MM:SS] hello"
        assert_eq!(&line[0..1], "[");
        assert_eq!(&line[9..11], "] ");
        assert!(line.ends_with("hello"));
    }

    #[test]
    fn test_count_matching() {
        let mut log = MessageLog::default();
        log.push("High CPU usage detected: 95.00%");
        log.push("Live updates paused.");
        log.push("High CPU usage detected: 97.00%");
        assert_eq!(log.count_matching("High CPU"), 2);
        assert_eq!(log.count_matching("resumed"), 0);
    }
}
