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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use maud::Markup;
use maud::html;
use percent_encoding::AsciiSet;
use percent_encoding::CONTROLS;
use percent_encoding::utf8_percent_encode;

use crate::deck::Deck;
use crate::i18n::category_label;
use crate::i18n::color_label;
use crate::i18n::language_name;
use crate::i18n::level_label;
use crate::i18n::mood_label;
use crate::i18n::strings;
use crate::play::state::ServerState;
use crate::play::state::start_load;
use crate::play::template::page_template;
use crate::session::Phase;
use crate::store::Store;
use crate::template::render;
use crate::types::card::Card;
use crate::types::facet::Category;
use crate::types::facet::Level;
use crate::types::facet::LevelColor;
use crate::types::facet::Mood;
use crate::types::lang::Lang;

/// Characters escaped in image paths. Slashes are kept.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn page(lang: Lang, body: Markup) -> Response {
    let html = page_template(lang, body, false);
    (StatusCode::OK, Html(html.into_string())).into_response()
}

pub async fn start_handler(State(state): State<ServerState>) -> Response {
    let lang = state.lock().store.language();
    let s = strings(lang);
    let body = html! {
        div.screen {
            h1 { (s.welcome) }
            p.lead { (s.tagline) }
            div.actions {
                a.button.primary href="/fact" { (s.start) }
                a.button href="/auth" { (s.access) }
            }
        }
    };
    page(lang, body)
}

pub async fn fact_handler(State(state): State<ServerState>) -> Response {
    let lang = state.lock().store.language();
    let s = strings(lang);
    let body = html! {
        div.screen {
            h2 { (s.facts_title) }
            ul.facts {
                @for fact in s.facts {
                    li { (fact) }
                }
            }
            div.actions {
                a.button.primary href="/names" { (s.continue_) }
            }
        }
    };
    page(lang, body)
}

pub async fn names_handler(State(state): State<ServerState>) -> Response {
    let mutable = state.lock();
    let lang = mutable.store.language();
    let pair = mutable.store.pair();
    let s = strings(lang);
    let body = html! {
        div.screen {
            h2 { (s.names_title) }
            form action="/names" method="post" {
                label {
                    (s.partner_a)
                    input type="text" name="partner_a" value=(pair.partner_a) required;
                }
                label {
                    (s.partner_b)
                    input type="text" name="partner_b" value=(pair.partner_b) required;
                }
                input.primary type="submit" value=(s.continue_);
            }
        }
    };
    page(lang, body)
}

pub async fn level_handler(State(state): State<ServerState>) -> Response {
    let mutable = state.lock();
    let lang = mutable.store.language();
    let selected = mutable.store.level_color();
    let s = strings(lang);
    let body = html! {
        div.screen {
            h2 { (s.level_title) }
            form.colors action="/level" method="post" {
                @for color in LevelColor::ALL {
                    @let classes = if color == selected {
                        format!("color {} selected", color.as_str())
                    } else {
                        format!("color {}", color.as_str())
                    };
                    button class=(classes) type="submit" name="color" value=(color.as_str()) {
                        (color_label(lang, color))
                    }
                }
            }
        }
    };
    page(lang, body)
}

pub async fn rules_handler(State(state): State<ServerState>) -> Response {
    let lang = state.lock().store.language();
    let s = strings(lang);
    let body = html! {
        div.screen {
            h2 { (s.rules_title) }
            ol.rules {
                @for rule in s.rules {
                    li { (rule) }
                }
            }
            div.actions {
                a.button.primary href="/play" { (s.play) }
            }
        }
    };
    page(lang, body)
}

pub async fn settings_handler(State(state): State<ServerState>) -> Response {
    let mutable = state.lock();
    let store = &mutable.store;
    let lang = store.language();
    let s = strings(lang);
    let filters = store.filters();
    let body = html! {
        div.screen.settings {
            h2 { (s.settings) }
            div.row {
                span { (s.language) }
                form action="/settings" method="post" {
                    input type="hidden" name="action" value="Lang";
                    @for option in Lang::ALL {
                        button.toggle.on[option == lang] type="submit" name="value" value=(option.as_str()) {
                            (language_name(option))
                        }
                    }
                }
            }
            div.row {
                span { (s.consent_only) }
                form action="/settings" method="post" {
                    input type="hidden" name="action" value="Consent";
                    button.toggle.on[filters.consent_only] type="submit" {
                        @if filters.consent_only { "✓" } @else { "✗" }
                    }
                }
            }
            h3 { (s.levels) }
            form.grid action="/settings" method="post" {
                input type="hidden" name="action" value="Level";
                @for level in Level::ALL {
                    button.toggle.on[filters.levels.contains(&level)] type="submit" name="value" value=(level.as_str()) {
                        (level_label(lang, level))
                    }
                }
            }
            h3 { (s.categories) }
            form.grid action="/settings" method="post" {
                input type="hidden" name="action" value="Category";
                @for category in Category::ALL {
                    button.toggle.on[filters.categories.contains(&category)] type="submit" name="value" value=(category.as_str()) {
                        (category_label(lang, category))
                    }
                }
            }
            h3 { (s.moods) }
            form.grid action="/settings" method="post" {
                input type="hidden" name="action" value="Mood";
                @for mood in Mood::ALL {
                    button.toggle.on[filters.moods.contains(&mood)] type="submit" name="value" value=(mood.as_str()) {
                        (mood_label(lang, mood))
                    }
                }
            }
            form action="/settings" method="post" {
                input type="hidden" name="action" value="Logout";
                input.link type="submit" value=(s.logout);
            }
        }
    };
    page(lang, body)
}

pub async fn auth_handler(State(state): State<ServerState>) -> Response {
    let mut mutable = state.lock();
    mutable.store.bootstrap_auth();
    if mutable.store.is_authed() {
        log::debug!("Already authed, redirecting to /play");
        return Redirect::to("/play").into_response();
    }
    let lang = mutable.store.language();
    let s = strings(lang);
    let body = html! {
        div.screen.auth {
            h2 { (s.pin_title) }
            p.hint { (s.pin_prompt) }
            @if mutable.pin_rejected {
                p.error { (s.pin_rejected) }
            }
            form action="/auth" method="post" {
                input type="password" name="pin" placeholder=(s.pin_placeholder);
                input type="hidden" name="action" value="Login";
                input.primary type="submit" value=(s.login);
            }
            form action="/auth" method="post" {
                input type="hidden" name="action" value="Reset";
                input.link type="submit" value=(s.reset_pin);
            }
        }
    };
    page(lang, body)
}

pub async fn play_handler(State(state): State<ServerState>) -> Response {
    let mut mutable = state.lock();
    mutable.store.bootstrap_auth();
    if !mutable.store.is_authed() {
        log::debug!("Not authed, redirecting to /auth");
        return Redirect::to("/auth").into_response();
    }
    if !mutable.store.pair().is_complete() {
        log::debug!("Pair names missing, redirecting to /names");
        return Redirect::to("/names").into_response();
    }
    if mutable.session.is_uninitialized() {
        start_load(&state, &mut mutable);
    }
    let store = &mutable.store;
    let lang = store.language();
    let s = strings(lang);
    let (body, refresh) = match mutable.session.phase() {
        Phase::Uninitialized | Phase::Loading => (
            html! {
                p.notice { (s.loading) }
            },
            true,
        ),
        Phase::Ready(deck) => match mutable.session.current() {
            None => (
                html! {
                    p.notice { (s.no_cards) }
                },
                false,
            ),
            Some(card) => (play_view(store, deck, card), false),
        },
    };
    let html = page_template(lang, body, refresh);
    (StatusCode::OK, Html(html.into_string())).into_response()
}

fn play_view(store: &Store, deck: &Deck<Card>, card: &Card) -> Markup {
    let lang = store.language();
    let s = strings(lang);
    let (position, total) = deck.position();
    let description = render(Some(card.description(lang)), store.pair());
    html! {
        div.play {
            div.toolbar {
                form action="/play" method="post" {
                    button.link type="submit" name="action" value="Shuffle" { (s.shuffle) }
                }
                div.progress { (format!("{position}/{total}")) }
            }
            div.card {
                div.chips {
                    @if let Some(category) = card.category() {
                        span.chip { (category_label(lang, category)) }
                    }
                    @if let Some(level) = card.level() {
                        span.chip { (level_label(lang, level)) }
                    }
                    @if let Some(mood) = card.mood() {
                        span.chip { (mood_label(lang, mood)) }
                    }
                    @if let Some(minutes) = card.time_limit_minutes() {
                        span.chip { (format!("⏱ {minutes} {}", s.minutes)) }
                    }
                }
                h3.title { (card.title(lang)) }
                @if card.consent_required() {
                    p.consent { (s.consent_warning) }
                }
                @if let Some(src) = card.image().and_then(image_url) {
                    img.illustration src=(src) alt="";
                }
                p.description { (description) }
                @if !card.tags().is_empty() {
                    div.tags {
                        @for tag in card.tags() {
                            span.tag { "#" (tag) }
                        }
                    }
                }
                form.controls action="/play" method="post" {
                    button.primary type="submit" name="action" value="Next" { (s.next) }
                }
            }
        }
    }
}

/// Map a card's image reference to the URL the browser should load. Remote
/// images are used as they are; anything else is served from `/img/`.
pub fn image_url(path: &str) -> Option<String> {
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    let relative = path
        .trim_start_matches('/')
        .strip_prefix("img/")
        .unwrap_or(path.trim_start_matches('/'));
    if relative.is_empty() {
        return None;
    }
    Some(format!("/img/{}", utf8_percent_encode(relative, PATH)))
}
