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

use rand::Rng;

use crate::deck::Deck;
use crate::filter::FilterSelection;
use crate::types::card::Card;

/// The lifecycle of the play screen's deck.
#[derive(Debug)]
pub enum Phase {
    Uninitialized,
    Loading,
    Ready(Deck<Card>),
}

/// Issued when a load starts. Only the ticket of the most recent load may
/// install its cards.
#[derive(Clone, Debug)]
pub struct LoadTicket {
    pub generation: u64,
    pub selection: FilterSelection,
}

#[derive(Debug)]
pub struct Session {
    generation: u64,
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self {
            generation: 0,
            phase: Phase::Uninitialized,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_uninitialized(&self) -> bool {
        matches!(self.phase, Phase::Uninitialized)
    }

    /// Enter the loading phase for the given selection. Any load already in
    /// flight becomes stale.
    pub fn begin_load(&mut self, selection: FilterSelection) -> LoadTicket {
        self.generation += 1;
        self.phase = Phase::Loading;
        log::debug!("Starting load #{}.", self.generation);
        LoadTicket {
            generation: self.generation,
            selection,
        }
    }

    /// Install the filtered cards of a finished load as a fresh deck. Returns
    /// false, leaving the session untouched, if a newer load has started.
    pub fn complete<R: Rng + ?Sized>(
        &mut self,
        ticket: &LoadTicket,
        cards: Vec<Card>,
        rng: &mut R,
    ) -> bool {
        if ticket.generation != self.generation {
            log::warn!(
                "Discarding stale load #{} (latest is #{}).",
                ticket.generation,
                self.generation
            );
            return false;
        }
        log::debug!("Load #{} finished with {} cards.", ticket.generation, cards.len());
        self.phase = Phase::Ready(Deck::new(cards, rng));
        true
    }

    pub fn current(&self) -> Option<&Card> {
        match &self.phase {
            Phase::Ready(deck) => deck.current(),
            _ => None,
        }
    }

    pub fn advance(&mut self) {
        if let Phase::Ready(deck) = &mut self.phase {
            deck.advance();
        }
    }

    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Phase::Ready(deck) = &mut self.phase {
            deck.reshuffle(rng);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
