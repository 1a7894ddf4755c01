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

//! Utilities for testing.

use std::collections::BTreeMap;

use crate::{
    error::Result,
    log::TransactionLog,
    record::{ChangeRecord, TransactionId},
};

/// An in-memory [`TransactionLog`] backed by a sorted map.
#[derive(Debug, Default)]
pub struct MemoryTransactionLog {
    records: BTreeMap<TransactionId, String>,
}

impl MemoryTransactionLog {
    /// Build a log holding ids `1..=len` with generated dns and tag `'m'`.
    pub fn sequential(len: u64) -> Self {
        let records = (1..=len)
            .map(|id| {
                let record = ChangeRecord::new(id, format!("cn=entry{id},dc=example,dc=org"), 'm');
                (id, record.to_string())
            })
            .collect();
        Self { records }
    }

    /// Append one record.
    pub fn push(&mut self, record: ChangeRecord) {
        self.records.insert(record.id(), record.to_string());
    }
}

impl TransactionLog for MemoryTransactionLog {
    fn read(&mut self, id: TransactionId) -> Result<Option<String>> {
        Ok(self.records.get(&id).cloned())
    }
}
