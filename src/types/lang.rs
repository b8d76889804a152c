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

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::fail;

/// The display language.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ua,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Ua, Lang::En];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Ua => "ua",
            Lang::En => "en",
        }
    }

    /// The value of the HTML `lang` attribute.
    pub fn html_code(&self) -> &'static str {
        match self {
            Lang::Ua => "uk",
            Lang::En => "en",
        }
    }
}

impl FromStr for Lang {
    type Err = ErrorReport;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ua" => Ok(Lang::Ua),
            "en" => Ok(Lang::En),
            _ => fail(format!("Invalid language: {value}")),
        }
    }
}
