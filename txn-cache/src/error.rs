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

use std::io;

/// Transaction cache error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error raised by a transaction log reader.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Malformed transaction record line.
    #[error("malformed transaction record: {0:?}")]
    Parse(String),
    /// Config error.
    #[error("config error: {0}")]
    Config(String),
}

/// Transaction cache result.
pub type Result<T> = std::result::Result<T, Error>;
