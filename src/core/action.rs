//! Actions and pending decisions.
//!
//! An [`Action`] is one atomic move by one player. The variant set is closed:
//! the transition pipeline matches on it exhaustively, so adding a move means
//! adding a variant and handling it everywhere.
//!
//! Some moves open a follow-up choice (a progress token after a science
//! pair, a card to destroy after a wonder). Those choices are queued as
//! [`Decision`]s; while one is pending, only its options are legal.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerTurn;
use crate::cards::CardId;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use duel_engine::cards::catalog;
/// use duel_engine::core::{Action, PlayerTurn};
///
/// let tavern = catalog::find("Tavern").unwrap();
/// let build = Action::BuildBuilding { player: PlayerTurn::Player1, card: tavern };
///
/// assert_eq!(build.player(), PlayerTurn::Player1);
/// assert_eq!(build.to_string(), "Player 1 builds Tavern");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take an available card and build it.
    BuildBuilding { player: PlayerTurn, card: CardId },

    /// Take an available card and sell it for coins.
    DiscardCard { player: PlayerTurn, card: CardId },

    /// Take an available card and use it to build one of the player's wonders.
    BuildWonder {
        player: PlayerTurn,
        card: CardId,
        wonder: CardId,
    },

    /// Claim a progress token.
    ChooseProgressToken { player: PlayerTurn, token: CardId },

    /// Remove a card from the opponent's city.
    DestroyCard { player: PlayerTurn, card: CardId },

    /// Build a card from the discard pile for free.
    BuildDiscarded { player: PlayerTurn, card: CardId },

    /// Pick who opens the next age.
    ChooseStartingPlayer {
        player: PlayerTurn,
        starting: PlayerTurn,
    },
}

impl Action {
    /// The player performing the action.
    #[must_use]
    pub fn player(&self) -> PlayerTurn {
        match *self {
            Action::BuildBuilding { player, .. }
            | Action::DiscardCard { player, .. }
            | Action::BuildWonder { player, .. }
            | Action::ChooseProgressToken { player, .. }
            | Action::DestroyCard { player, .. }
            | Action::BuildDiscarded { player, .. }
            | Action::ChooseStartingPlayer { player, .. } => player,
        }
    }

    /// Whether the action takes a card from the card structure.
    ///
    /// These are the only actions legal when no decision is pending.
    #[must_use]
    pub fn takes_card(&self) -> bool {
        matches!(
            self,
            Action::BuildBuilding { .. } | Action::DiscardCard { .. } | Action::BuildWonder { .. }
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::BuildBuilding { player, card } => write!(f, "{player} builds {card}"),
            Action::DiscardCard { player, card } => write!(f, "{player} discards {card}"),
            Action::BuildWonder {
                player,
                card,
                wonder,
            } => write!(f, "{player} builds {wonder} with {card}"),
            Action::ChooseProgressToken { player, token } => {
                write!(f, "{player} takes progress token {token}")
            }
            Action::DestroyCard { player, card } => write!(f, "{player} destroys {card}"),
            Action::BuildDiscarded { player, card } => {
                write!(f, "{player} builds {card} from the discard pile")
            }
            Action::ChooseStartingPlayer { player, starting } => {
                write!(f, "{player} lets {starting} start the age")
            }
        }
    }
}

/// What caused a decision to be queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionOrigin {
    /// Second building with the same science symbol.
    SciencePair,
    /// A new age begins and the trailing player picks who starts.
    AgeTransition,
    /// Wonder letting its owner pick among boxed progress tokens.
    GreatLibrary,
    /// Wonder destroying an opponent's card.
    Destroy,
    /// Wonder building a discarded card.
    Mausoleum,
}

/// A pending choice that must be resolved before play continues.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub player: PlayerTurn,
    /// Candidate actions in stable order.
    pub options: Vector<Action>,
    pub origin: DecisionOrigin,
}

impl Decision {
    pub fn new(
        player: PlayerTurn,
        origin: DecisionOrigin,
        options: impl IntoIterator<Item = Action>,
    ) -> Self {
        Self {
            player,
            options: options.into_iter().collect(),
            origin,
        }
    }

    /// Whether `action` is one of this decision's options.
    #[must_use]
    pub fn allows(&self, action: &Action) -> bool {
        self.options.contains(action)
    }
}
