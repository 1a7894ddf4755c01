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

//! Fixed-capacity in-memory read cache for a directory-change transaction log.
//!
//! A notifier daemon appends change records to a durable transaction log and
//! serves them to replication clients by transaction id. `txn_cache` keeps
//! the newest records in memory so repeated lookups skip the log: the cache
//! is warmed from the log tail at startup, fed every freshly produced
//! record, and overwrites its oldest entry in place once full. A miss is a
//! plain not-found and the caller falls back to the log itself.
//!
//! ```
//! use txn_cache::TransactionCache;
//!
//! let mut cache = TransactionCache::new(3)?;
//! cache.insert(10, "cn=admin,dc=example,dc=org", 'm');
//! assert_eq!(cache.get(10).as_deref(), Some("10 cn=admin,dc=example,dc=org m"));
//! assert_eq!(cache.get(11), None);
//! # Ok::<(), txn_cache::Error>(())
//! ```

mod cache;
mod error;
mod log;
mod record;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use cache::TransactionCache;
pub use error::{Error, Result};
pub use log::{FileTransactionLog, TransactionLog};
pub use record::{ChangeRecord, TransactionId};
