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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::play::state::ServerState;
use crate::play::state::reload_if_started;
use crate::types::facet::Category;
use crate::types::facet::Level;
use crate::types::facet::LevelColor;
use crate::types::facet::Mood;
use crate::types::lang::Lang;

#[derive(Deserialize)]
pub struct NamesForm {
    partner_a: String,
    partner_b: String,
}

pub async fn names_handler(
    State(state): State<ServerState>,
    Form(form): Form<NamesForm>,
) -> Redirect {
    let mut mutable = state.lock();
    mutable
        .store
        .set_pair_names(&form.partner_a, &form.partner_b);
    if mutable.store.pair().is_complete() {
        Redirect::to("/level")
    } else {
        Redirect::to("/names")
    }
}

#[derive(Deserialize)]
pub struct LevelForm {
    color: String,
}

pub async fn level_handler(
    State(state): State<ServerState>,
    Form(form): Form<LevelForm>,
) -> Redirect {
    let mut mutable = state.lock();
    match form.color.parse::<LevelColor>() {
        Ok(color) => {
            if mutable.store.set_level_color(color) {
                reload_if_started(&state, &mut mutable);
            }
            Redirect::to("/rules")
        }
        Err(e) => {
            log::warn!("{e}");
            Redirect::to("/level")
        }
    }
}

#[derive(Debug, Deserialize)]
enum SettingsAction {
    Lang,
    Consent,
    Level,
    Category,
    Mood,
    Logout,
}

#[derive(Deserialize)]
pub struct SettingsForm {
    action: SettingsAction,
    value: Option<String>,
}

pub async fn settings_handler(
    State(state): State<ServerState>,
    Form(form): Form<SettingsForm>,
) -> Redirect {
    let logout = matches!(form.action, SettingsAction::Logout);
    match settings_action(&state, form) {
        Ok(_) => {}
        Err(e) => {
            log::error!("{e}");
        }
    }
    if logout {
        Redirect::to("/auth")
    } else {
        Redirect::to("/settings")
    }
}

fn settings_action(state: &ServerState, form: SettingsForm) -> Fallible<()> {
    let mut mutable = state.lock();
    let value = form.value.unwrap_or_default();
    let filters_changed = match form.action {
        SettingsAction::Lang => {
            mutable.store.set_language(value.parse::<Lang>()?);
            false
        }
        SettingsAction::Consent => {
            mutable.store.toggle_consent_only();
            true
        }
        SettingsAction::Level => {
            mutable.store.toggle_level(value.parse::<Level>()?);
            true
        }
        SettingsAction::Category => {
            mutable.store.toggle_category(value.parse::<Category>()?);
            true
        }
        SettingsAction::Mood => {
            mutable.store.toggle_mood(value.parse::<Mood>()?);
            true
        }
        SettingsAction::Logout => {
            mutable.store.logout()?;
            false
        }
    };
    if filters_changed {
        reload_if_started(state, &mut mutable);
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
enum AuthAction {
    Login,
    Reset,
}

#[derive(Deserialize)]
pub struct AuthForm {
    action: AuthAction,
    pin: Option<String>,
}

pub async fn auth_handler(
    State(state): State<ServerState>,
    Form(form): Form<AuthForm>,
) -> Redirect {
    match auth_action(&state, form) {
        Ok(true) => Redirect::to("/play"),
        Ok(false) => Redirect::to("/auth"),
        Err(e) => {
            log::error!("{e}");
            Redirect::to("/auth")
        }
    }
}

/// Returns whether the players may go on to the game.
fn auth_action(state: &ServerState, form: AuthForm) -> Fallible<bool> {
    let mut mutable = state.lock();
    match form.action {
        AuthAction::Login => {
            let pin = form.pin.unwrap_or_default();
            let ok = mutable.store.login(&pin)?;
            mutable.pin_rejected = !ok;
            Ok(ok)
        }
        AuthAction::Reset => {
            mutable.pin_rejected = false;
            mutable.store.logout()?;
            Ok(false)
        }
    }
}

#[derive(Debug, Deserialize)]
enum PlayAction {
    Next,
    Shuffle,
}

#[derive(Deserialize)]
pub struct PlayForm {
    action: PlayAction,
}

pub async fn play_handler(
    State(state): State<ServerState>,
    Form(form): Form<PlayForm>,
) -> Redirect {
    match play_action(&state, form.action) {
        Ok(_) => Redirect::to("/play"),
        Err(e) => {
            log::error!("{e}");
            Redirect::to("/auth")
        }
    }
}

fn play_action(state: &ServerState, action: PlayAction) -> Fallible<()> {
    let mut mutable = state.lock();
    if !mutable.store.is_authed() {
        return fail("not authed.");
    }
    match action {
        PlayAction::Next => mutable.session.advance(),
        PlayAction::Shuffle => {
            log::debug!("Reshuffling the deck.");
            mutable.session.reshuffle(&mut rand::rng());
        }
    }
    Ok(())
}
