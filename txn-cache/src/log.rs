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

//! Seam to the durable transaction log.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{error::Result, record::TransactionId};

/// Reader side of the durable transaction log.
///
/// `Ok(None)` is the not-found signal: the id does not (yet) exist in the
/// log. Returned lines are owned by the caller and dropped after parsing.
pub trait TransactionLog {
    /// Fetch the raw record line for `id`.
    fn read(&mut self, id: TransactionId) -> Result<Option<String>>;
}

/// [`TransactionLog`] over the notifier's on-disk transaction file.
///
/// The file holds one record line per transaction, in ascending id order.
#[derive(Debug)]
pub struct FileTransactionLog {
    path: PathBuf,
}

impl FileTransactionLog {
    /// Open a reader over the transaction file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TransactionLog for FileTransactionLog {
    fn read(&mut self, id: TransactionId) -> Result<Option<String>> {
        let file = File::open(&self.path)?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            let Some((head, _)) = line.split_once(' ') else {
                continue;
            };
            let Ok(line_id) = head.parse::<TransactionId>() else {
                continue;
            };
            if line_id == id {
                tracing::trace!("[txn log]: found id {id} in {}", self.path.display());
                return Ok(Some(line));
            }
            // Ids are ascending, no point scanning past the target.
            if line_id > id {
                break;
            }
        }
        tracing::trace!("[txn log]: id {id} not in {}", self.path.display());
        Ok(None)
    }
}
