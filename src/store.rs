//! An append-only record buffer with an explicit, fallible growth policy.
//!
//! Records are addressed by the index returned from [`RecordStore::append`]. Growth may move the
//! backing allocation, so callers hold on to indices, never references.

use std::cmp;
use std::ops::Index;
use std::slice;

use tracing::trace;

use crate::error::{Error, Result};

/// Smallest number of slots a single growth step adds.
pub const MIN_INCREMENT: usize = 3;

/// Capacity the store moves to once `old` slots are full.
pub fn next_capacity(old: usize) -> usize {
    cmp::max(old.saturating_add(MIN_INCREMENT), old.saturating_mul(3) / 2)
}

#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
    capacity: usize,
}

impl<T> RecordStore<T> {
    /// An empty store with no slots allocated.
    pub fn new() -> Self {
        RecordStore {
            records: Vec::new(),
            capacity: 0,
        }
    }

    /// An empty store with room for `capacity` records before its first growth.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut records = Vec::new();
        records
            .try_reserve_exact(capacity)
            .map_err(|_| Error::OutOfMemory {
                requested: capacity,
            })?;
        Ok(RecordStore { records, capacity })
    }

    /// Appends `record`, returning its index. On allocation failure the store is left as it was.
    pub fn append(&mut self, record: T) -> Result<usize> {
        if self.records.len() >= self.capacity {
            self.grow()?;
        }
        let idx = self.records.len();
        self.records.push(record);
        Ok(idx)
    }

    fn grow(&mut self) -> Result<()> {
        let new_capacity = next_capacity(self.capacity);
        self.records
            .try_reserve_exact(new_capacity - self.records.len())
            .map_err(|_| Error::OutOfMemory {
                requested: new_capacity,
            })?;
        trace!(old = self.capacity, new = new_capacity, "record store grown");
        self.capacity = new_capacity;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records the store can hold before it next grows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every record. The allocated capacity is kept.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.records.get(idx)
    }

    pub fn iter(&self) -> slice::Iter<T> {
        self.records.iter()
    }
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for RecordStore<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.records[idx]
    }
}
