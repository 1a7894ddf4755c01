// Copyright 2026 txn-cache Project Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Fixed-capacity read cache over the tail of the transaction log.

use crate::{
    error::{Error, Result},
    log::TransactionLog,
    record::{ChangeRecord, TransactionId},
};

/// Fixed-capacity cache of the most recent change records.
///
/// The cache is a plain slot array with two cursors. While filling, records
/// are appended in ascending id order; once the append phase ends, every
/// further insert overwrites the chronologically oldest live slot and the
/// overwrite cursor advances circularly. The cache thus always holds a
/// window of the newest ids seen, though not in slot order after wraparound.
///
/// Single-threaded by design: one owner calls [`warm`], [`insert`] and
/// [`get`] to completion. Wrap the whole cache in one lock if it must be
/// shared across threads; lookups read the same cursors inserts mutate.
///
/// [`warm`]: TransactionCache::warm
/// [`insert`]: TransactionCache::insert
/// [`get`]: TransactionCache::get
#[derive(Debug)]
pub struct TransactionCache {
    slots: Box<[Option<ChangeRecord>]>,
    /// Count of leading slots holding live records; lookups scan only these.
    filled: usize,
    /// Slot targeted by the next overwrite once the append phase is over.
    next_overwrite: usize,
}

impl TransactionCache {
    /// Create an empty cache with room for `capacity` records.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::Config("cache capacity must be positive".to_string()));
        }
        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
            filled: 0,
            next_overwrite: 0,
        })
    }

    /// Capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.filled
    }

    /// `true` while no record is live.
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Load the newest records from the log, ending at `max_id`.
    ///
    /// Pulls ids `max_id - capacity + 1 ..= max_id` (clamped to the log's
    /// first possible id, 1) in ascending order and fills the slots from
    /// index 0. A not-found from the log stops the fill early: the log does
    /// not have enough history yet, which is normal on a freshly created
    /// log, and the cache simply serves the smaller window. Returns the
    /// number of records loaded.
    ///
    /// Any previous content is discarded first.
    pub fn warm<L>(&mut self, log: &mut L, max_id: TransactionId) -> Result<usize>
    where
        L: TransactionLog,
    {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.filled = 0;
        self.next_overwrite = 0;

        let start = max_id.saturating_sub(self.capacity() as u64 - 1).max(1);
        let mut count = 0;
        for id in start..=max_id {
            let Some(line) = log.read(id)? else {
                break;
            };
            self.slots[count] = Some(ChangeRecord::parse(&line)?);
            count += 1;
        }

        self.filled = count;
        tracing::info!("[txn cache]: warmed with {count} of {} entries", self.capacity());
        Ok(count)
    }

    /// Insert a freshly produced change record.
    ///
    /// `id` must not be older than any id already inserted; keeping log
    /// order is the caller's contract. An empty `dn` is silently ignored.
    ///
    /// The append phase ends after `capacity - 1` records, one short of the
    /// slot count; only [`warm`](TransactionCache::warm) fills all slots.
    /// This boundary is part of the cache's compatibility contract and is
    /// deliberately not rounded up to `capacity`. The overwrite cursor still
    /// cycles through all `capacity` slots, so on an insert-only fill a
    /// record landing in the never-appended last slot stays invisible to
    /// lookups until it is overwritten in turn.
    pub fn insert(&mut self, id: TransactionId, dn: &str, command: char) {
        if dn.is_empty() {
            return;
        }
        debug_assert!(
            self.records().all(|record| record.id() <= id),
            "inserts must follow log order",
        );

        let record = ChangeRecord::new(id, dn, command);
        if self.filled + 1 < self.capacity() {
            tracing::debug!("[txn cache]: added id {id} at slot {}", self.filled);
            self.slots[self.filled] = Some(record);
            self.filled += 1;
        } else {
            tracing::debug!("[txn cache]: added id {id} at slot {}", self.next_overwrite);
            self.slots[self.next_overwrite] = Some(record);
            self.next_overwrite = if self.next_overwrite + 1 < self.capacity() {
                self.next_overwrite + 1
            } else {
                0
            };
        }
    }

    /// Look up a cached record by id, re-serialized in the log's line shape.
    ///
    /// `None` is a plain miss, never an error; the caller falls back to the
    /// durable log.
    pub fn get(&self, id: TransactionId) -> Option<String> {
        tracing::debug!("[txn cache]: searching id {id}");
        let line = self.record(id)?.to_string();
        tracing::trace!("[txn cache]: hit [{line}]");
        Some(line)
    }

    /// Look up a cached record by id.
    pub fn record(&self, id: TransactionId) -> Option<&ChangeRecord> {
        self.slots[..self.filled]
            .iter()
            .flatten()
            .find(|record| record.id() == id)
    }

    /// Live records in slot order.
    pub fn records(&self) -> impl Iterator<Item = &ChangeRecord> + '_ {
        self.slots[..self.filled].iter().flatten()
    }
}
