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

use crate::error::Fallible;
use crate::filter::FilterSelection;
use crate::storage::Storage;
use crate::types::facet::Category;
use crate::types::facet::Level;
use crate::types::facet::LevelColor;
use crate::types::facet::Mood;
use crate::types::lang::Lang;
use crate::types::pair::PairNames;

/// The storage key holding the PIN.
pub const PIN_KEY: &str = "zagrava_pin";

/// Minimum PIN length, in characters.
pub const PIN_MIN_LENGTH: usize = 4;

/// Game-wide settings, the players' names, and the PIN gate.
///
/// The PIN is a convenience lock that keeps the cards off the screen. It is
/// stored as entered and does not protect the card data.
pub struct Store {
    lang: Lang,
    level_color: LevelColor,
    filters: FilterSelection,
    pair: PairNames,
    authed: bool,
    storage: Box<dyn Storage>,
}

impl Store {
    pub fn new(lang: Lang, storage: Box<dyn Storage>) -> Self {
        Self {
            lang,
            level_color: LevelColor::default(),
            filters: FilterSelection::default(),
            pair: PairNames::default(),
            authed: false,
            storage,
        }
    }

    pub fn language(&self) -> Lang {
        self.lang
    }

    pub fn level_color(&self) -> LevelColor {
        self.level_color
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn pair(&self) -> &PairNames {
        &self.pair
    }

    pub fn is_authed(&self) -> bool {
        self.authed
    }

    pub fn set_language(&mut self, lang: Lang) {
        log::debug!("set_language {}", lang.as_str());
        self.lang = lang;
    }

    pub fn set_pair_names(&mut self, partner_a: &str, partner_b: &str) {
        log::debug!("set_pair_names");
        self.pair = PairNames::new(partner_a, partner_b);
    }

    /// Select a level color. The active levels become exactly the color's
    /// levels. Returns whether the filter selection changed.
    pub fn set_level_color(&mut self, color: LevelColor) -> bool {
        log::debug!("set_level_color {}", color.as_str());
        self.level_color = color;
        let levels: BTreeSet<Level> = color.levels().iter().copied().collect();
        let changed = self.filters.levels != levels;
        self.filters.levels = levels;
        changed
    }

    pub fn toggle_level(&mut self, level: Level) {
        log::debug!("toggle_level {level}");
        toggle(&mut self.filters.levels, level);
    }

    pub fn toggle_category(&mut self, category: Category) {
        log::debug!("toggle_category {category}");
        toggle(&mut self.filters.categories, category);
    }

    pub fn toggle_mood(&mut self, mood: Mood) {
        log::debug!("toggle_mood {mood}");
        toggle(&mut self.filters.moods, mood);
    }

    pub fn toggle_consent_only(&mut self) {
        log::debug!("toggle_consent_only");
        self.filters.consent_only = !self.filters.consent_only;
    }

    /// Unlock the game with a PIN of at least four characters. Any such PIN
    /// is accepted and saved. Returns whether the PIN was accepted.
    pub fn login(&mut self, pin: &str) -> Fallible<bool> {
        let ok = pin.chars().count() >= PIN_MIN_LENGTH;
        log::debug!("login accepted={ok}");
        self.authed = false;
        if ok {
            self.storage.set(PIN_KEY, pin)?;
        }
        self.authed = ok;
        Ok(ok)
    }

    pub fn logout(&mut self) -> Fallible<()> {
        log::debug!("logout");
        self.authed = false;
        self.storage.remove(PIN_KEY)
    }

    /// Derive the auth flag from storage. Safe to call any number of times.
    pub fn bootstrap_auth(&mut self) {
        let saved = self.storage.get(PIN_KEY);
        self.authed = saved.is_some_and(|pin| !pin.is_empty());
        log::debug!("bootstrap_auth authed={}", self.authed);
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::error::fail;
    use crate::storage::FileStorage;
    use crate::storage::MemoryStorage;

    fn store() -> Store {
        Store::new(Lang::Ua, Box::new(MemoryStorage::default()))
    }

    #[test]
    fn test_defaults() {
        let store = store();
        assert_eq!(store.language(), Lang::Ua);
        assert_eq!(store.level_color(), LevelColor::White);
        assert_eq!(store.filters(), &FilterSelection::default());
        assert!(!store.pair().is_complete());
        assert!(!store.is_authed());
    }

    #[test]
    fn test_toggles_are_symmetric() {
        let mut store = store();
        store.toggle_level(Level::Hard);
        assert!(store.filters().levels.contains(&Level::Hard));
        store.toggle_level(Level::Hard);
        assert!(!store.filters().levels.contains(&Level::Hard));

        store.toggle_category(Category::Game);
        assert!(!store.filters().categories.contains(&Category::Game));
        store.toggle_category(Category::Game);
        assert!(store.filters().categories.contains(&Category::Game));

        store.toggle_mood(Mood::Deep);
        assert!(!store.filters().moods.contains(&Mood::Deep));

        store.toggle_consent_only();
        assert!(store.filters().consent_only);
        store.toggle_consent_only();
        assert!(!store.filters().consent_only);
    }

    #[test]
    fn test_set_level_color() {
        let mut store = store();
        store.toggle_level(Level::Medium);
        assert!(store.set_level_color(LevelColor::Red));
        assert_eq!(store.level_color(), LevelColor::Red);
        assert_eq!(store.filters().levels, BTreeSet::from([Level::Extreme]));
        assert!(!store.set_level_color(LevelColor::Red));
    }

    #[test]
    fn test_set_language_and_names() {
        let mut store = store();
        store.set_language(Lang::En);
        assert_eq!(store.language(), Lang::En);
        store.set_pair_names("Ivan", "Olena");
        assert_eq!(store.pair(), &PairNames::new("Ivan", "Olena"));
    }

    #[test]
    fn test_login_threshold() -> Fallible<()> {
        let mut store = store();
        assert!(!store.login("abc")?);
        assert!(!store.is_authed());
        assert!(!store.login("")?);
        assert!(!store.is_authed());
        assert!(store.login("abcd")?);
        assert!(store.is_authed());
        Ok(())
    }

    /// Holds a saved PIN but refuses every write.
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Option<String> {
            Some("1234".to_string())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Fallible<()> {
            fail("storage is read-only.")
        }

        fn remove(&mut self, _key: &str) -> Fallible<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_leaves_store_locked() {
        let mut store = Store::new(Lang::Ua, Box::new(ReadOnlyStorage));
        store.bootstrap_auth();
        assert!(store.is_authed());
        assert!(store.login("abcd").is_err());
        assert!(!store.is_authed());
    }

    #[test]
    fn test_login_counts_characters() -> Fallible<()> {
        // Four Cyrillic letters are eight bytes but still four characters.
        let mut store = store();
        assert!(!store.login("абв")?);
        assert!(store.login("абвг")?);
        Ok(())
    }

    #[test]
    fn test_auth_survives_restart() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().to_path_buf();

        let mut first = Store::new(Lang::Ua, Box::new(FileStorage::new(path.clone())));
        assert!(first.login("1234")?);
        drop(first);

        let mut second = Store::new(Lang::Ua, Box::new(FileStorage::new(path.clone())));
        assert!(!second.is_authed());
        second.bootstrap_auth();
        assert!(second.is_authed());
        second.bootstrap_auth();
        assert!(second.is_authed());

        second.logout()?;
        assert!(!second.is_authed());

        let mut third = Store::new(Lang::Ua, Box::new(FileStorage::new(path)));
        third.bootstrap_auth();
        assert!(!third.is_authed());
        Ok(())
    }

    #[test]
    fn test_empty_persisted_pin_is_not_authed() -> Fallible<()> {
        let mut storage = MemoryStorage::default();
        storage.set(PIN_KEY, "")?;
        let mut store = Store::new(Lang::Ua, Box::new(storage));
        store.bootstrap_auth();
        assert!(!store.is_authed());
        Ok(())
    }
}
