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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;
use crate::types::lang::Lang;

/// The name of the optional configuration file in a game directory.
pub const CONFIG_FILE: &str = "zagrava.toml";

pub const DEFAULT_PORT: u16 = 8000;

/// Settings read from `zagrava.toml`. Every key is optional.
#[derive(Default, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// URL or path of the card database.
    pub db: Option<String>,
    pub port: Option<u16>,
    /// The initial display language.
    pub lang: Option<Lang>,
    pub open_browser: Option<bool>,
}

impl Config {
    /// Read the configuration file from the directory, if there is one.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("No {CONFIG_FILE}, using defaults.");
            return Ok(Self::default());
        }
        let content = read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        log::debug!("Loaded {CONFIG_FILE}: {config:?}");
        Ok(config)
    }
}
