//! Card structure: the dependency graph cards are drafted from.
//!
//! A `CardStructure` pairs a [`Graph<CardSlot>`](Graph) laid out from a
//! [`Topology`] with the residual [`Deck`] of the age. Face-down slots hold
//! no card yet; a card is drawn from the residual deck the moment the slot
//! loses its last covering card.
//!
//! ## Availability
//!
//! A card can be taken exactly when its slot is face up and no edge points
//! at it. Taking a card empties its slot and deletes its outgoing edges, so
//! the graph predicate alone stays the source of truth.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use super::graph::Graph;
use super::topology::{Topology, VERTEX_COUNT};
use crate::cards::{Age, CardId, Deck};
use crate::core::error::{EngineError, Result};
use crate::core::rng::RandomSource;

/// Payload of one structure slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSlot {
    /// A revealed card.
    Card(CardId),
    /// An unrevealed card of the given age.
    FaceDown(Age),
}

impl CardSlot {
    #[must_use]
    pub fn card(self) -> Option<CardId> {
        match self {
            CardSlot::Card(card) => Some(card),
            CardSlot::FaceDown(_) => None,
        }
    }
}

/// Card graph of the current age plus the cards left to reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStructure {
    age: Age,
    graph: Graph<CardSlot>,
    deck: Deck,
}

impl CardStructure {
    /// Lay out `topology`, dealing its face-up slots from `deck` in index
    /// order. The undrawn cards stay behind to fill face-down slots.
    pub fn build(topology: &Topology, deck: &Deck, rng: &mut dyn RandomSource) -> Result<Self> {
        let (dealt, deck) = deck.draw_cards(topology.face_up.len(), rng)?;
        let mut dealt = dealt.into_iter();

        let mut graph = Graph::new(VERTEX_COUNT);
        for index in 0..VERTEX_COUNT {
            let slot = if topology.is_face_up(index) {
                dealt
                    .next()
                    .map(CardSlot::Card)
                    .ok_or(EngineError::CorruptState("face-up slots outnumber dealt cards"))?
            } else {
                CardSlot::FaceDown(topology.age)
            };
            graph = graph.set_vertex(index, Some(slot));
        }
        for &(from, to) in topology.edges {
            graph = graph.add_edge(from, to);
        }

        Ok(Self {
            age: topology.age,
            graph,
            deck,
        })
    }

    #[must_use]
    pub fn age(&self) -> Age {
        self.age
    }

    #[must_use]
    pub fn graph(&self) -> &Graph<CardSlot> {
        &self.graph
    }

    /// Cards not yet placed in the structure.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards that can be taken right now, in slot order.
    #[must_use]
    pub fn available_cards(&self) -> Vec<CardId> {
        self.graph
            .vertices_with_no_incoming_edges()
            .into_iter()
            .filter_map(|slot| slot.card())
            .collect()
    }

    #[must_use]
    pub fn is_available(&self, card: CardId) -> bool {
        self.graph
            .position(&CardSlot::Card(card))
            .is_some_and(|index| !self.graph.has_incoming_edges(index))
    }

    /// Take `card` out of the structure, revealing every face-down slot it
    /// was the last cover of.
    pub fn pick_up_card(&self, card: CardId, rng: &mut dyn RandomSource) -> Result<Self> {
        let slot = CardSlot::Card(card);
        let index = self
            .graph
            .position(&slot)
            .ok_or_else(|| EngineError::not_found(&slot))?;
        let successors: Vec<usize> = self.graph.successors(index).collect();

        let mut graph = self.graph.set_vertex(index, None);
        for &to in &successors {
            graph = graph.remove_edge(index, to);
        }

        let mut deck = self.deck.clone();
        for to in successors {
            let uncovered = matches!(graph.vertex(to), Some(CardSlot::FaceDown(_)))
                && !graph.has_incoming_edges(to);
            if !uncovered {
                continue;
            }
            if deck.is_empty() {
                warn!(slot = to, deck = deck.label(), "no card left to reveal");
                continue;
            }
            let (revealed, rest) = deck.draw_card(rng)?;
            trace!(slot = to, card = %revealed, "revealed card");
            graph = graph.set_vertex(to, Some(CardSlot::Card(revealed)));
            deck = rest;
        }

        Ok(Self {
            age: self.age,
            graph,
            deck,
        })
    }

    /// Whether no face-up card remains to be taken.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.graph.vertices().all(|(_, slot)| slot.card().is_none())
    }

    /// Number of slots still face down.
    #[must_use]
    pub fn face_down_count(&self) -> usize {
        self.graph
            .vertices()
            .filter(|(_, slot)| matches!(slot, CardSlot::FaceDown(_)))
            .count()
    }

    /// Structural checks used when restoring a saved game.
    pub(crate) fn check_invariants(&self) -> Result<()> {
        if !self.graph.is_well_formed() {
            return Err(EngineError::CorruptState("graph matrix has wrong size"));
        }
        if self.graph.size() != VERTEX_COUNT {
            return Err(EngineError::CorruptState("structure has wrong slot count"));
        }
        if !self.deck.is_empty() {
            let stuck = self.graph.vertices().any(|(i, slot)| {
                matches!(slot, CardSlot::FaceDown(_)) && !self.graph.has_incoming_edges(i)
            });
            if stuck || self.face_down_count() > self.deck.size() {
                return Err(EngineError::CorruptState("face-down slots out of step with deck"));
            }
        }
        for (index, slot) in self.graph.vertices() {
            if let CardSlot::FaceDown(age) = slot {
                if *age != self.age {
                    return Err(EngineError::CorruptState("face-down slot from another age"));
                }
            }
            if let CardSlot::Card(card) = slot {
                if self.graph.position(slot) != Some(index) || self.deck.contains(*card) {
                    return Err(EngineError::CorruptState("card placed twice"));
                }
            }
        }
        Ok(())
    }
}
