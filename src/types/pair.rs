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

/// The names of the two players.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PairNames {
    /// Substituted for the `{boy}` placeholders.
    pub partner_a: String,
    /// Substituted for the `{girl}` placeholders.
    pub partner_b: String,
}

impl PairNames {
    pub fn new(partner_a: impl Into<String>, partner_b: impl Into<String>) -> Self {
        Self {
            partner_a: partner_a.into().trim().to_string(),
            partner_b: partner_b.into().trim().to_string(),
        }
    }

    /// The game can only start once both names are filled in.
    pub fn is_complete(&self) -> bool {
        !self.partner_a.is_empty() && !self.partner_b.is_empty()
    }
}
