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

use std::fmt::{self, Display};

use crate::error::{Error, Result};

/// Identifier of a single record in the transaction log.
///
/// Strictly increasing across the log, unique per record.
pub type TransactionId = u64;

/// A single directory change: which entry changed, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    id: TransactionId,
    dn: String,
    command: char,
}

impl ChangeRecord {
    /// Create a record from its parts.
    pub fn new(id: TransactionId, dn: impl Into<String>, command: char) -> Self {
        Self {
            id,
            dn: dn.into(),
            command,
        }
    }

    /// Transaction id of this change.
    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Distinguished name of the changed directory entry.
    pub fn dn(&self) -> &str {
        &self.dn
    }

    /// Single-character operation tag. Opaque to the cache.
    pub fn command(&self) -> char {
        self.command
    }

    /// Parse a transaction file line of the shape `<id> <dn> <tag>`.
    ///
    /// The id is the decimal prefix up to the first space and the tag is the
    /// single character after the last space; the dn is everything in
    /// between and may itself contain spaces.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let malformed = || Error::Parse(line.to_string());

        let (id, rest) = line.split_once(' ').ok_or_else(malformed)?;
        let id = id.parse::<TransactionId>().map_err(|_| malformed())?;
        let (dn, tag) = rest.rsplit_once(' ').ok_or_else(malformed)?;

        let mut chars = tag.chars();
        let command = match (chars.next(), chars.next()) {
            (Some(command), None) => command,
            _ => return Err(malformed()),
        };
        if dn.is_empty() {
            return Err(malformed());
        }

        Ok(Self::new(id, dn, command))
    }
}

impl Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.dn, self.command)
    }
}
