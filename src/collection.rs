// Copyright 2025 Fernando Borretti
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

use std::env::current_dir;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Fallible;
use crate::error::fail;
use crate::loader::CardSource;
use crate::loader::DEFAULT_DB_FILE;
use crate::storage::FileStorage;

/// The directory a game is played from: its configuration, where its cards
/// come from, and where the PIN is kept.
pub struct Collection {
    pub directory: PathBuf,
    pub config: Config,
    pub source: CardSource,
}

impl Collection {
    /// Open a game directory. `db` overrides the configured card database.
    pub fn new(directory: Option<String>, db: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let config = Config::load(&directory)?;

        let source = {
            let value = db
                .or_else(|| config.db.clone())
                .unwrap_or_else(|| DEFAULT_DB_FILE.to_string());
            CardSource::parse(&value, &directory)
        };
        log::debug!("Cards will be loaded from {source}.");

        Ok(Self {
            directory,
            config,
            source,
        })
    }

    /// Where persistent state such as the PIN lives.
    pub fn state_directory(&self) -> PathBuf {
        self.directory.join(".zagrava")
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.state_directory())
    }

    /// Where card illustrations are served from.
    pub fn image_directory(&self) -> PathBuf {
        self.directory.join("img")
    }
}
