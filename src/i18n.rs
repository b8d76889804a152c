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

//! User interface copy in Ukrainian and English.

use crate::types::facet::Category;
use crate::types::facet::Level;
use crate::types::facet::LevelColor;
use crate::types::facet::Mood;
use crate::types::lang::Lang;

pub struct Strings {
    pub app_name: &'static str,
    pub tagline: &'static str,
    pub welcome: &'static str,
    pub start: &'static str,
    pub continue_: &'static str,
    pub play: &'static str,
    pub settings: &'static str,
    pub access: &'static str,
    pub facts_title: &'static str,
    pub facts: &'static [&'static str],
    pub names_title: &'static str,
    pub partner_a: &'static str,
    pub partner_b: &'static str,
    pub level_title: &'static str,
    pub rules_title: &'static str,
    pub rules: &'static [&'static str],
    pub language: &'static str,
    pub consent_only: &'static str,
    pub levels: &'static str,
    pub categories: &'static str,
    pub moods: &'static str,
    pub logout: &'static str,
    pub pin_title: &'static str,
    pub pin_prompt: &'static str,
    pub pin_placeholder: &'static str,
    pub pin_rejected: &'static str,
    pub login: &'static str,
    pub reset_pin: &'static str,
    pub consent_warning: &'static str,
    pub minutes: &'static str,
    pub next: &'static str,
    pub shuffle: &'static str,
    pub loading: &'static str,
    pub no_cards: &'static str,
    pub not_found: &'static str,
}

const UA: Strings = Strings {
    app_name: "Заграва",
    tagline: "Ігрові картки для близькості, довіри й пристрасті.",
    welcome: "Вітаємо у Заграві",
    start: "Почати",
    continue_: "Далі",
    play: "Грати",
    settings: "Налаштування",
    access: "Доступ",
    facts_title: "Чи знали ви?",
    facts: &[
        "Двадцятисекундні обійми знижують рівень стресу.",
        "Пари, які разом пробують нове, почуваються ближчими.",
        "Зоровий контакт протягом кількох хвилин посилює довіру.",
    ],
    names_title: "Як вас звати?",
    partner_a: "Він",
    partner_b: "Вона",
    level_title: "Оберіть рівень",
    rules_title: "Правила",
    rules: &[
        "Тягніть картки по черзі.",
        "Будь-хто може пропустити картку без пояснень.",
        "Дії з позначкою згоди виконуються лише за взаємної згоди.",
        "Стоп-слово завжди зупиняє гру.",
    ],
    language: "Мова",
    consent_only: "Тільки картки зі згодою (18+)",
    levels: "Рівні",
    categories: "Категорії",
    moods: "Настрій",
    logout: "Очистити доступ (вийти)",
    pin_title: "Доступ",
    pin_prompt: "Встановіть PIN (мінімум 4 символи), щоб захистити ваш простір.",
    pin_placeholder: "Введіть PIN",
    pin_rejected: "PIN занадто короткий.",
    login: "Увійти",
    reset_pin: "Скинути PIN",
    consent_warning: "Памʼятайте: дія виконується лише за взаємної згоди.",
    minutes: "хв",
    next: "Далі",
    shuffle: "Перемішати",
    loading: "Завантаження карток…",
    no_cards: "Немає карток: фільтр занадто вузький або базу не вдалося завантажити.",
    not_found: "Сторінку не знайдено",
};

const EN: Strings = Strings {
    app_name: "Zagrava",
    tagline: "Game cards for closeness, trust and passion.",
    welcome: "Welcome to Zagrava",
    start: "Start",
    continue_: "Continue",
    play: "Play",
    settings: "Settings",
    access: "Access",
    facts_title: "Did you know?",
    facts: &[
        "A twenty-second hug lowers stress levels.",
        "Couples who try new things together feel closer.",
        "A few minutes of eye contact builds trust.",
    ],
    names_title: "What are your names?",
    partner_a: "Him",
    partner_b: "Her",
    level_title: "Choose a level",
    rules_title: "Rules",
    rules: &[
        "Take turns drawing cards.",
        "Anyone may skip a card without explanation.",
        "Cards marked for consent are played only with mutual consent.",
        "The safe word always stops the game.",
    ],
    language: "Language",
    consent_only: "Consent cards only (18+)",
    levels: "Levels",
    categories: "Categories",
    moods: "Mood",
    logout: "Clear access (log out)",
    pin_title: "Access",
    pin_prompt: "Set a PIN (at least 4 characters) to protect your space.",
    pin_placeholder: "Enter PIN",
    pin_rejected: "The PIN is too short.",
    login: "Log in",
    reset_pin: "Reset PIN",
    consent_warning: "Remember: this is done only with mutual consent.",
    minutes: "min",
    next: "Next",
    shuffle: "Shuffle",
    loading: "Loading cards…",
    no_cards: "No cards: the filter is too narrow or the database could not be loaded.",
    not_found: "Not Found",
};

pub fn strings(lang: Lang) -> &'static Strings {
    match lang {
        Lang::Ua => &UA,
        Lang::En => &EN,
    }
}

pub fn language_name(lang: Lang) -> &'static str {
    match lang {
        Lang::Ua => "Українська",
        Lang::En => "English",
    }
}

pub fn level_label(lang: Lang, level: Level) -> &'static str {
    match (lang, level) {
        (Lang::Ua, Level::Easy) => "Легко",
        (Lang::Ua, Level::Medium) => "Середньо",
        (Lang::Ua, Level::Hard) => "Складно",
        (Lang::Ua, Level::Extreme) => "Екстрим",
        (Lang::En, Level::Easy) => "Easy",
        (Lang::En, Level::Medium) => "Medium",
        (Lang::En, Level::Hard) => "Hard",
        (Lang::En, Level::Extreme) => "Extreme",
    }
}

pub fn category_label(lang: Lang, category: Category) -> &'static str {
    match (lang, category) {
        (Lang::Ua, Category::Action) => "Дія",
        (Lang::Ua, Category::Question) => "Питання",
        (Lang::Ua, Category::Game) => "Гра",
        (Lang::En, Category::Action) => "Action",
        (Lang::En, Category::Question) => "Question",
        (Lang::En, Category::Game) => "Game",
    }
}

pub fn mood_label(lang: Lang, mood: Mood) -> &'static str {
    match (lang, mood) {
        (Lang::Ua, Mood::Romantic) => "Романтичний",
        (Lang::Ua, Mood::Playful) => "Грайливий",
        (Lang::Ua, Mood::Passionate) => "Пристрасний",
        (Lang::Ua, Mood::Deep) => "Глибокий",
        (Lang::En, Mood::Romantic) => "Romantic",
        (Lang::En, Mood::Playful) => "Playful",
        (Lang::En, Mood::Passionate) => "Passionate",
        (Lang::En, Mood::Deep) => "Deep",
    }
}

pub fn color_label(lang: Lang, color: LevelColor) -> &'static str {
    match (lang, color) {
        (Lang::Ua, LevelColor::White) => "Білий: знайомство",
        (Lang::Ua, LevelColor::Yellow) => "Жовтий: флірт",
        (Lang::Ua, LevelColor::Pink) => "Рожевий: пристрасть",
        (Lang::Ua, LevelColor::Red) => "Червоний: без меж",
        (Lang::En, LevelColor::White) => "White: getting closer",
        (Lang::En, LevelColor::Yellow) => "Yellow: flirting",
        (Lang::En, LevelColor::Pink) => "Pink: passion",
        (Lang::En, LevelColor::Red) => "Red: no limits",
    }
}
