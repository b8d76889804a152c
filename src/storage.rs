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

//! Small string values that outlive the process, keyed by name.

#[cfg(test)]
use std::collections::HashMap;
use std::fs::create_dir_all;
use std::fs::read_to_string;
use std::fs::remove_file;
use std::fs::write;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Fallible;

pub trait Storage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Fallible<()>;
    fn remove(&mut self, key: &str) -> Fallible<()>;
}

/// Stores each key as a file in a directory.
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match read_to_string(self.directory.join(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                log::error!("Failed to read {key}: {e}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Fallible<()> {
        create_dir_all(&self.directory)?;
        write(self.directory.join(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Fallible<()> {
        match remove_file(self.directory.join(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps values for the life of the process only.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Fallible<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Fallible<()> {
        self.values.remove(key);
        Ok(())
    }
}
