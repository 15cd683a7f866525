//! Message - Lines the pet says to its owner

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::MessageTone;

/// Default number of messages kept in a log
pub const DEFAULT_LOG_CAPACITY: usize = 5;

/// A single pet message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntry {
    pub id: Uuid,
    pub text: String,
    pub tone: MessageTone,
    pub timestamp: DateTime<Utc>,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, tone: MessageTone, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            tone,
            timestamp,
        }
    }
}

/// Bounded FIFO of recent messages, most recent last
#[derive(Debug, Clone, Serialize)]
pub struct MessageLog {
    capacity: usize,
    entries: VecDeque<MessageEntry>,
}

impl MessageLog {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an entry, evicting the oldest when full
    pub fn push(&mut self, entry: MessageEntry) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Up to `n` most recent entries, oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    pub fn latest(&self) -> Option<&MessageEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}
