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

//! End-to-end test against an on-disk transaction file.

use std::io::Write;

use txn_cache::{ChangeRecord, FileTransactionLog, TransactionCache, TransactionLog};

const CAPACITY: usize = 16;
const LOG_LEN: u64 = 100;

fn transaction_file(len: u64) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for id in 1..=len {
        writeln!(file, "{id} cn=entry{id},ou=people,dc=example,dc=org m").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test_log::test]
fn test_daemon_lifecycle() {
    let file = transaction_file(LOG_LEN);
    let mut log = FileTransactionLog::new(file.path());

    // Startup: warm the cache with the newest CAPACITY records.
    let mut cache = TransactionCache::new(CAPACITY).unwrap();
    assert_eq!(cache.warm(&mut log, LOG_LEN).unwrap(), CAPACITY);

    let oldest = LOG_LEN - CAPACITY as u64 + 1;
    for id in oldest..=LOG_LEN {
        let line = cache.get(id).unwrap();
        let record = ChangeRecord::parse(&line).unwrap();
        assert_eq!(record.id(), id);
        assert_eq!(record.dn(), format!("cn=entry{id},ou=people,dc=example,dc=org"));
        assert_eq!(record.command(), 'm');
    }
    assert!(cache.get(oldest - 1).is_none());

    // Steady state: every new transaction is fed to the cache and displaces
    // the oldest one.
    for id in LOG_LEN + 1..=LOG_LEN + 8 {
        cache.insert(id, &format!("cn=entry{id},ou=people,dc=example,dc=org"), 'a');
    }
    assert_eq!(cache.len(), CAPACITY);
    assert!(cache.get(LOG_LEN + 8).is_some());
    assert!(cache.get(oldest + 7).is_none());
    assert!(cache.get(oldest + 8).is_some());

    // A miss sends the caller back to the durable log.
    assert!(cache.get(oldest - 1).is_none());
    assert!(log.read(oldest - 1).unwrap().is_some());
}

#[test_log::test]
fn test_warm_against_short_transaction_file() {
    let file = transaction_file(5);
    let mut log = FileTransactionLog::new(file.path());

    let mut cache = TransactionCache::new(CAPACITY).unwrap();
    assert_eq!(cache.warm(&mut log, 5).unwrap(), 5);

    for id in 1..=5 {
        assert!(cache.get(id).is_some());
    }
    assert!(cache.get(6).is_none());
}
