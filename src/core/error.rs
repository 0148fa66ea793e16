//! Engine error type.
//!
//! Every fallible operation in the engine returns [`Result`]. Transitions are
//! all-or-nothing: when an error is returned the input state is untouched,
//! because nothing is ever mutated in place.

use super::action::Action;

/// Errors surfaced by decks, the card graph and the transition pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A draw was requested from a deck without enough cards.
    #[error("cannot draw from empty deck '{label}'")]
    EmptyDeck { label: String },

    /// A value-addressed lookup failed. Signals an engine or caller bug.
    #[error("element not found: {element}")]
    ElementNotFound { element: String },

    /// The action's preconditions do not hold for the given state.
    #[error("illegal action {action}: {reason}")]
    IllegalAction { action: Action, reason: &'static str },

    /// A replayed random sequence ran out of recorded draws.
    #[error("random source exhausted after {drawn} draws")]
    RandomExhausted { drawn: usize },

    /// Encoding or decoding a saved game failed.
    #[error("codec error: {0}")]
    Codec(String),

    /// A decoded state violates a structural invariant.
    #[error("corrupt state: {0}")]
    CorruptState(&'static str),
}

impl EngineError {
    /// Build an `ElementNotFound` error from any debuggable value.
    pub fn not_found(element: &impl std::fmt::Debug) -> Self {
        Self::ElementNotFound {
            element: format!("{element:?}"),
        }
    }

    /// Build an `IllegalAction` error.
    pub fn illegal(action: &Action, reason: &'static str) -> Self {
        Self::IllegalAction {
            action: action.clone(),
            reason,
        }
    }

    /// Whether a caller can reasonably handle this error and continue.
    ///
    /// Everything else indicates a broken invariant for the playout.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyDeck { .. } | Self::RandomExhausted { .. })
    }
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, EngineError>;
