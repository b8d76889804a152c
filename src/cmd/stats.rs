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

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::loader::load_strict;
use crate::types::card::Card;
use crate::types::facet::Category;
use crate::types::facet::Level;
use crate::types::facet::Mood;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub async fn print_stats(
    directory: Option<String>,
    db: Option<String>,
    format: StatsFormat,
) -> Fallible<()> {
    let coll = Collection::new(directory, db)?;
    let cards = load_strict(&coll.source).await?;
    let stats = Stats::new(&cards);
    match format {
        StatsFormat::Text => {
            println!("cards: {}", stats.card_count);
            println!("consent required: {}", stats.consent_count);
            println!("unclassified: {}", stats.unclassified_count);
            for (level, count) in &stats.levels {
                println!("{level}: {count}");
            }
            for (category, count) in &stats.categories {
                println!("{category}: {count}");
            }
            for (mood, count) in &stats.moods {
                println!("{mood}: {count}");
            }
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    card_count: usize,
    consent_count: usize,
    /// Cards with a missing or unknown facet, which no filter selects.
    unclassified_count: usize,
    levels: BTreeMap<Level, usize>,
    categories: BTreeMap<Category, usize>,
    moods: BTreeMap<Mood, usize>,
}

impl Stats {
    pub fn new(cards: &[Card]) -> Self {
        let mut levels: BTreeMap<Level, usize> = Level::ALL.into_iter().map(|l| (l, 0)).collect();
        let mut categories: BTreeMap<Category, usize> =
            Category::ALL.into_iter().map(|c| (c, 0)).collect();
        let mut moods: BTreeMap<Mood, usize> = Mood::ALL.into_iter().map(|m| (m, 0)).collect();
        let mut consent_count = 0;
        let mut unclassified_count = 0;
        for card in cards {
            if card.consent_required() {
                consent_count += 1;
            }
            match (card.level(), card.category(), card.mood()) {
                (Some(level), Some(category), Some(mood)) => {
                    *levels.entry(level).or_default() += 1;
                    *categories.entry(category).or_default() += 1;
                    *moods.entry(mood).or_default() += 1;
                }
                _ => unclassified_count += 1,
            }
        }
        Self {
            card_count: cards.len(),
            consent_count,
            unclassified_count,
            levels,
            categories,
            moods,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_test_directory;

    #[tokio::test]
    async fn test_non_existent_directory() {
        let result = print_stats(Some("./derpherp".to_string()), None, StatsFormat::Text).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_text_format() -> Fallible<()> {
        let dir = create_test_directory()?;
        let path = Some(dir.path().display().to_string());
        print_stats(path, None, StatsFormat::Text).await
    }

    #[tokio::test]
    async fn test_json_format() -> Fallible<()> {
        let dir = create_test_directory()?;
        let path = Some(dir.path().display().to_string());
        print_stats(path, None, StatsFormat::Json).await
    }

    #[tokio::test]
    async fn test_missing_database_is_an_error() -> Fallible<()> {
        let dir = create_test_directory()?;
        let path = Some(dir.path().display().to_string());
        let result = print_stats(path, Some("nope.json".to_string()), StatsFormat::Json).await;
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_stats() {
        let cards = vec![
            Card::new_test(
                "a",
                Some(Level::Easy),
                Some(Category::Game),
                Some(Mood::Deep),
                true,
            ),
            Card::new_test(
                "b",
                Some(Level::Easy),
                Some(Category::Action),
                Some(Mood::Deep),
                false,
            ),
            Card::new_test("c", None, Some(Category::Action), Some(Mood::Deep), true),
        ];
        let stats = Stats::new(&cards);
        assert_eq!(stats.card_count, 3);
        assert_eq!(stats.consent_count, 2);
        assert_eq!(stats.unclassified_count, 1);
        assert_eq!(stats.levels[&Level::Easy], 2);
        assert_eq!(stats.levels[&Level::Extreme], 0);
        assert_eq!(stats.categories[&Category::Action], 1);
        assert_eq!(stats.moods[&Mood::Deep], 2);
    }

    #[test]
    fn test_json_shape() -> Fallible<()> {
        let stats = Stats::new(&[]);
        let json = serde_json::to_value(&stats)?;
        assert_eq!(json["cardCount"], 0);
        assert_eq!(json["levels"]["easy"], 0);
        assert_eq!(json["moods"]["passionate"], 0);
        Ok(())
    }
}
