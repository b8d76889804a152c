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
use serde::Deserializer;
use serde_json::Value;

use crate::types::facet::Category;
use crate::types::facet::Level;
use crate::types::facet::Mood;
use crate::types::lang::Lang;

/// The card database document. Items are kept as raw JSON so that one bad
/// record does not take the rest of the database down with it.
#[derive(Deserialize)]
pub struct CardDatabase {
    #[serde(default)]
    pub items: Vec<Value>,
}

impl CardDatabase {
    /// Convert the items into cards. Returns the cards and a description of
    /// every record that could not be read.
    pub fn cards(self) -> (Vec<Card>, Vec<String>) {
        let mut cards = Vec::with_capacity(self.items.len());
        let mut rejected = Vec::new();
        for (index, item) in self.items.into_iter().enumerate() {
            match serde_json::from_value::<Card>(item) {
                Ok(card) => cards.push(card),
                Err(e) => rejected.push(format!("record {index}: {e}")),
            }
        }
        (cards, rejected)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Card {
    #[serde(deserialize_with = "id_from_value")]
    id: String,
    #[serde(default, alias = "title", deserialize_with = "null_as_default")]
    title_ua: String,
    #[serde(default)]
    title_en: Option<String>,
    #[serde(default, alias = "description", deserialize_with = "null_as_default")]
    description_ua: String,
    #[serde(default)]
    description_en: Option<String>,
    /// `None` when the database holds a value outside the enumeration. Such
    /// a card never passes a filter.
    #[serde(default, deserialize_with = "facet_from_value")]
    category: Option<Category>,
    #[serde(default, deserialize_with = "facet_from_value")]
    level: Option<Level>,
    #[serde(default, deserialize_with = "facet_from_value")]
    mood: Option<Mood>,
    #[serde(default, deserialize_with = "null_as_default")]
    consent_required: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    images: Vec<String>,
    #[serde(default)]
    time_limit_minutes: Option<u32>,
}

impl Card {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self, lang: Lang) -> &str {
        localized(&self.title_ua, self.title_en.as_deref(), lang)
    }

    pub fn description(&self, lang: Lang) -> &str {
        localized(&self.description_ua, self.description_en.as_deref(), lang)
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn level(&self) -> Option<Level> {
        self.level
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn consent_required(&self) -> bool {
        self.consent_required
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The illustration to show with the card, if any.
    pub fn image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
            .filter(|path| !path.is_empty())
    }

    pub fn time_limit_minutes(&self) -> Option<u32> {
        self.time_limit_minutes
    }

    #[cfg(test)]
    pub fn new_test(
        id: &str,
        level: Option<Level>,
        category: Option<Category>,
        mood: Option<Mood>,
        consent_required: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            title_ua: format!("Картка {id}"),
            title_en: None,
            description_ua: format!("Опис {id}"),
            description_en: None,
            category,
            level,
            mood,
            consent_required,
            tags: Vec::new(),
            image: None,
            images: Vec::new(),
            time_limit_minutes: None,
        }
    }
}

fn localized<'a>(ua: &'a str, en: Option<&'a str>, lang: Lang) -> &'a str {
    match (lang, en) {
        (Lang::En, Some(en)) if !en.is_empty() => en,
        _ => ua,
    }
}

fn id_from_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("invalid card id: {other}"))),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn facet_from_value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_card() {
        let json = r#"{
            "id": "white-1",
            "title_ua": "Обійми",
            "title_en": "Hug",
            "description_ua": "{boy} обіймає {girl}",
            "category": "action",
            "level": "easy",
            "mood": "romantic",
            "consent_required": true,
            "tags": ["touch"],
            "image": "/img/white/1.jpg"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id(), "white-1");
        assert_eq!(card.title(Lang::Ua), "Обійми");
        assert_eq!(card.title(Lang::En), "Hug");
        assert_eq!(card.description(Lang::En), "{boy} обіймає {girl}");
        assert_eq!(card.category(), Some(Category::Action));
        assert_eq!(card.level(), Some(Level::Easy));
        assert_eq!(card.mood(), Some(Mood::Romantic));
        assert!(card.consent_required());
        assert_eq!(card.tags(), &["touch".to_string()]);
        assert_eq!(card.image(), Some("/img/white/1.jpg"));
    }

    #[test]
    fn test_deserialize_build_script_card() {
        let json = r#"{
            "id": "pink-7",
            "legacy_id": 7,
            "level": "pink",
            "title_ua": "Танець",
            "description_ua": "Повільний танець",
            "category": "game",
            "mood": "playful",
            "consent_required": false,
            "images": ["/img/pink/7.jpg", "/img/pink/8.jpg"],
            "time_limit_minutes": 5,
            "tags": []
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.level(), Some(Level::Hard));
        assert_eq!(card.image(), Some("/img/pink/7.jpg"));
        assert_eq!(card.time_limit_minutes(), Some(5));
    }

    #[test]
    fn test_unknown_facets_become_none() {
        let json = r#"{"id": 3, "title": "x", "level": "insane", "category": 4, "mood": null}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id(), "3");
        assert_eq!(card.title(Lang::Ua), "x");
        assert_eq!(card.level(), None);
        assert_eq!(card.category(), None);
        assert_eq!(card.mood(), None);
        assert!(!card.consent_required());
        assert_eq!(card.image(), None);
    }

    #[test]
    fn test_database_without_items() {
        let db: CardDatabase = serde_json::from_str(r#"{"version": 2}"#).unwrap();
        assert!(db.items.is_empty());
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let json = r#"{
            "id": "n-1",
            "title_ua": null,
            "description_ua": null,
            "consent_required": null,
            "tags": null,
            "images": null
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.title(Lang::Ua), "");
        assert_eq!(card.description(Lang::Ua), "");
        assert!(!card.consent_required());
        assert!(card.tags().is_empty());
        assert_eq!(card.image(), None);
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let json = r#"{
            "items": [
                {"id": "ok", "level": "easy", "category": "action", "mood": "deep"},
                {"id": "nulls", "consent_required": null, "tags": null},
                {"title_ua": "Без id"},
                {"id": "bad-tags", "tags": "not a list"},
                7
            ]
        }"#;
        let db: CardDatabase = serde_json::from_str(json).unwrap();
        let (cards, rejected) = db.cards();
        let ids: Vec<&str> = cards.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["ok", "nulls"]);
        assert_eq!(rejected.len(), 3);
        assert!(rejected[0].starts_with("record 2: "));
        assert!(rejected[1].starts_with("record 3: "));
        assert!(rejected[2].starts_with("record 4: "));
    }
}
