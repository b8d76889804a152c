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

use std::collections::HashSet;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::loader::fetch;
use crate::types::card::Card;

pub async fn check_collection(directory: Option<String>, db: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory, db)?;
    let (cards, rejected) = fetch(&coll.source).await?.cards();
    let mut problems: Vec<String> = rejected
        .into_iter()
        .map(|reason| format!("unreadable {reason}"))
        .collect();
    problems.extend(find_problems(&cards));
    for problem in &problems {
        println!("{problem}");
    }
    if problems.is_empty() {
        println!("ok ({} cards)", cards.len());
        Ok(())
    } else {
        fail(format!("{} problems found.", problems.len()))
    }
}

/// Cards that can never be drawn, and ids that are not unique.
fn find_problems(cards: &[Card]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for card in cards {
        let id = card.id();
        if !seen.insert(id) {
            problems.push(format!("card {id}: duplicate id"));
        }
        if card.level().is_none() {
            problems.push(format!("card {id}: missing or unknown level"));
        }
        if card.category().is_none() {
            problems.push(format!("card {id}: missing or unknown category"));
        }
        if card.mood().is_none() {
            problems.push(format!("card {id}: missing or unknown mood"));
        }
    }
    problems
}
