//! # Identifier Generation
//!
//! New entities get an id derived from the creation timestamp in
//! milliseconds. Two creations inside the same millisecond would collide,
//! so the generator never hands out a value lower than or equal to the
//! previous one.

use chrono::Utc;

/// Hands out strictly increasing, timestamp-derived ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts above every id already in use (e.g. seeded records).
    pub fn starting_after(max_existing: i64) -> Self {
        IdGenerator { last: max_existing }
    }

    /// Returns the next id, based on the current wall-clock time.
    pub fn next_id(&mut self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Returns the next id for a given timestamp.
    pub fn next_at(&mut self, timestamp_ms: i64) -> i64 {
        let id = if timestamp_ms > self.last {
            timestamp_ms
        } else {
            self.last + 1
        };
        self.last = id;
        id
    }
}
