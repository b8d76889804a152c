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

/// Fisher–Yates shuffle: walk from the last index down to 1, swapping each
/// element with a uniformly chosen element at or before it.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// A shuffled sequence of cards with a cursor that wraps around, so the game
/// never runs out of cards.
#[derive(Clone, Debug)]
pub struct Deck<T> {
    cards: Vec<T>,
    cursor: usize,
}

impl<T> Deck<T> {
    pub fn new<R: Rng + ?Sized>(mut cards: Vec<T>, rng: &mut R) -> Self {
        shuffle(&mut cards, rng);
        Self { cards, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[cfg(test)]
    pub fn cards(&self) -> &[T] {
        &self.cards
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.cards.get(self.cursor % self.len())
        }
    }

    pub fn advance(&mut self) {
        self.cursor = self.cursor.wrapping_add(1);
    }

    /// Re-permute the same cards and start over from the top.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.cards, rng);
        self.cursor = 0;
    }

    /// The one-based position of the current card and the deck size.
    pub fn position(&self) -> (usize, usize) {
        if self.is_empty() {
            (0, 0)
        } else {
            (self.cursor % self.len() + 1, self.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 0..20 {
            let original: Vec<usize> = (0..len).map(|i| i % 5).collect();
            let mut shuffled = original.clone();
            shuffle(&mut shuffled, &mut rng);
            assert_eq!(shuffled.len(), original.len());
            let mut a = original.clone();
            let mut b = shuffled.clone();
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_shuffle_is_uniform() {
        const N: usize = 5;
        const TRIALS: usize = 50_000;
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [[0usize; N]; N];
        for _ in 0..TRIALS {
            let mut items: Vec<usize> = (0..N).collect();
            shuffle(&mut items, &mut rng);
            for (position, item) in items.into_iter().enumerate() {
                counts[item][position] += 1;
            }
        }
        // Each cell expects TRIALS / N = 10000 hits; the standard deviation
        // is about 90, so a 5% tolerance is far outside random noise.
        let expected = (TRIALS / N) as f64;
        for row in counts.iter() {
            for &count in row.iter() {
                let deviation = (count as f64 - expected).abs() / expected;
                assert!(deviation < 0.05, "count {count} is off by {deviation}");
            }
        }
    }

    #[test]
    fn test_cursor_wraps_around() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck = Deck::new(vec!['a', 'b', 'c'], &mut rng);
        let order: Vec<char> = deck.cards().to_vec();
        for k in 0..10 {
            assert_eq!(deck.current(), Some(&order[k % 3]));
            deck.advance();
        }
        assert_eq!(deck.cursor(), 10);
    }

    #[test]
    fn test_position() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck = Deck::new(vec![1, 2], &mut rng);
        assert_eq!(deck.position(), (1, 2));
        deck.advance();
        assert_eq!(deck.position(), (2, 2));
        deck.advance();
        assert_eq!(deck.position(), (1, 2));
    }

    #[test]
    fn test_empty_deck() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck: Deck<u8> = Deck::new(Vec::new(), &mut rng);
        assert!(deck.is_empty());
        assert_eq!(deck.current(), None);
        deck.advance();
        assert_eq!(deck.current(), None);
        assert_eq!(deck.position(), (0, 0));
    }

    #[test]
    fn test_reshuffle_resets_cursor() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = Deck::new((0..10).collect::<Vec<u32>>(), &mut rng);
        deck.advance();
        deck.advance();
        deck.reshuffle(&mut rng);
        assert_eq!(deck.cursor(), 0);
        let mut cards = deck.cards().to_vec();
        cards.sort();
        assert_eq!(cards, (0..10).collect::<Vec<u32>>());
    }
}
