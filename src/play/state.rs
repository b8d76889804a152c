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

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::filter::filter_cards;
use crate::loader::CardSource;
use crate::loader::load;
use crate::session::Session;
use crate::store::Store;

#[derive(Clone)]
pub struct ServerState {
    pub source: CardSource,
    pub image_directory: PathBuf,
    pub mutable: Arc<Mutex<MutableState>>,
}

pub struct MutableState {
    pub store: Store,
    pub session: Session,
    /// Set when the last PIN was too short, so the auth screen can say so.
    pub pin_rejected: bool,
}

impl ServerState {
    /// Every transition runs under this lock, so no request observes a
    /// half-applied change.
    pub fn lock(&self) -> MutexGuard<'_, MutableState> {
        self.mutable.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Start loading a fresh deck for the current filter selection. The fetch
/// runs without the lock; when it finishes, the session keeps the result
/// only if no newer load has started in the meantime.
pub fn start_load(state: &ServerState, mutable: &mut MutableState) {
    let ticket = mutable.session.begin_load(mutable.store.filters().clone());
    let state = state.clone();
    tokio::spawn(async move {
        let cards = load(&state.source).await;
        let cards = filter_cards(&cards, &ticket.selection);
        {
            let mut mutable = state.lock();
            mutable.session.complete(&ticket, cards, &mut rand::rng());
        }
    });
}

/// Reload the deck after the filters changed, unless nothing has been
/// loaded yet: the play screen loads on first visit.
pub fn reload_if_started(state: &ServerState, mutable: &mut MutableState) {
    if !mutable.session.is_uninitialized() {
        start_load(state, mutable);
    }
}
