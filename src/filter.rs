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

use std::collections::BTreeSet;

use crate::types::card::Card;
use crate::types::facet::Category;
use crate::types::facet::Level;
use crate::types::facet::LevelColor;
use crate::types::facet::Mood;

/// The facets the players have switched on.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FilterSelection {
    pub levels: BTreeSet<Level>,
    pub categories: BTreeSet<Category>,
    pub moods: BTreeSet<Mood>,
    /// When set, only cards flagged as needing mutual consent pass.
    pub consent_only: bool,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            levels: LevelColor::default().levels().iter().copied().collect(),
            categories: Category::ALL.into_iter().collect(),
            moods: Mood::ALL.into_iter().collect(),
            consent_only: false,
        }
    }
}

impl FilterSelection {
    /// A card passes when every facet is enabled. A facet the card lacks is
    /// never enabled.
    pub fn matches(&self, card: &Card) -> bool {
        let level = card.level().is_some_and(|l| self.levels.contains(&l));
        let category = card
            .category()
            .is_some_and(|c| self.categories.contains(&c));
        let mood = card.mood().is_some_and(|m| self.moods.contains(&m));
        let consent = !self.consent_only || card.consent_required();
        level && category && mood && consent
    }
}

/// Select the cards matching the selection, in their original order.
pub fn filter_cards(cards: &[Card], selection: &FilterSelection) -> Vec<Card> {
    let result: Vec<Card> = cards
        .iter()
        .filter(|card| selection.matches(card))
        .cloned()
        .collect();
    log::debug!("Filtered {} cards down to {}.", cards.len(), result.len());
    result
}
