//! Persistent bag of cards with uniform random draw.
//!
//! A `Deck` never materialises a shuffled order. Each draw picks one of the
//! remaining cards uniformly through the supplied [`RandomSource`], consuming
//! exactly one index, and returns a new deck without it. The card sequence is
//! an `im::Vector`, so the old deck stays valid and shares structure with the
//! new one.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::catalog;
use super::definition::{CardGroup, CardId};
use crate::core::error::{EngineError, Result};
use crate::core::rng::RandomSource;

/// A labelled, unordered multiset of cards.
///
/// The internal order is irrelevant to play but deterministic, so the same
/// sequence of random indices always yields the same draws.
///
/// ```
/// use duel_engine::cards::{CardGroup, Deck};
/// use duel_engine::core::GameRng;
///
/// let deck = Deck::from_group("Age I", CardGroup::FirstAge);
/// let mut rng = GameRng::new(1);
///
/// let (card, rest) = deck.draw_card(&mut rng).unwrap();
/// assert!(deck.contains(card));
/// assert!(!rest.contains(card));
/// assert_eq!(rest.size(), deck.size() - 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    label: Arc<str>,
    cards: Vector<CardId>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: Arc::from(label),
            cards: Vector::new(),
        }
    }

    /// Create a deck holding the given cards.
    pub fn with_cards(label: &str, cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            label: Arc::from(label),
            cards: cards.into_iter().collect(),
        }
    }

    /// Create a deck holding every catalog card of a group.
    #[must_use]
    pub fn from_group(label: &str, group: CardGroup) -> Self {
        Self::with_cards(label, catalog::cards_in(group))
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// Iterate over the cards in internal order.
    pub fn cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    /// Draw one card uniformly at random.
    pub fn draw_card(&self, rng: &mut dyn RandomSource) -> Result<(CardId, Deck)> {
        if self.cards.is_empty() {
            return Err(self.empty_error());
        }
        let index = rng.next_index(self.cards.len())?;
        let mut cards = self.cards.clone();
        let card = cards.remove(index);
        Ok((
            card,
            Deck {
                label: Arc::clone(&self.label),
                cards,
            },
        ))
    }

    /// Draw `k` cards one after another.
    ///
    /// Fails without consuming randomness when fewer than `k` cards remain.
    pub fn draw_cards(&self, k: usize, rng: &mut dyn RandomSource) -> Result<(Vec<CardId>, Deck)> {
        if self.cards.len() < k {
            return Err(self.empty_error());
        }
        let mut drawn = Vec::with_capacity(k);
        let mut deck = self.clone();
        for _ in 0..k {
            let (card, rest) = deck.draw_card(rng)?;
            drawn.push(card);
            deck = rest;
        }
        Ok((drawn, deck))
    }

    /// Return a deck with `card` appended.
    #[must_use]
    pub fn add(&self, card: CardId) -> Deck {
        let mut cards = self.cards.clone();
        cards.push_back(card);
        Deck {
            label: Arc::clone(&self.label),
            cards,
        }
    }

    /// Return a deck with all `cards` appended in order.
    pub fn add_all(&self, cards: impl IntoIterator<Item = CardId>) -> Deck {
        let mut next = self.cards.clone();
        next.extend(cards);
        Deck {
            label: Arc::clone(&self.label),
            cards: next,
        }
    }

    /// Return a deck holding this deck's cards followed by `other`'s.
    ///
    /// The result keeps this deck's label.
    #[must_use]
    pub fn merge(&self, other: &Deck) -> Deck {
        let mut cards = self.cards.clone();
        cards.append(other.cards.clone());
        Deck {
            label: Arc::clone(&self.label),
            cards,
        }
    }

    /// Return a deck with one copy of `card` removed.
    pub fn remove(&self, card: CardId) -> Result<Deck> {
        let index = self
            .cards
            .index_of(&card)
            .ok_or_else(|| EngineError::not_found(&card))?;
        let mut cards = self.cards.clone();
        cards.remove(index);
        Ok(Deck {
            label: Arc::clone(&self.label),
            cards,
        })
    }

    fn empty_error(&self) -> EngineError {
        EngineError::EmptyDeck {
            label: self.label.to_string(),
        }
    }
}
