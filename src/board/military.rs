//! Military conflict track.
//!
//! A single pawn moves between the two capitals. Player 1 pushes it toward
//! negative positions, player 2 toward positive ones. Each player owns two
//! looting tokens on the opponent's half: pushing the pawn 3 spaces past
//! the centre takes the first (the opponent loses 2 coins), 6 spaces takes
//! the second (the opponent loses 5). Taken tokens never come back.
//!
//! Reaching 9 spaces is military supremacy.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::player::{PlayerMap, PlayerTurn};

/// Distance from the centre that wins the game outright.
pub const SUPREMACY_DISTANCE: i32 = 9;

const FIRST_TOKEN: (i32, u32) = (3, 2);
const SECOND_TOKEN: (i32, u32) = (6, 5);

/// A player's looting tokens still on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LootingTokens {
    pub first: bool,
    pub second: bool,
}

impl Default for LootingTokens {
    fn default() -> Self {
        Self {
            first: true,
            second: true,
        }
    }
}

/// Pawn position and remaining looting tokens.
///
/// ```
/// use duel_engine::board::MilitaryBoard;
/// use duel_engine::core::PlayerTurn;
///
/// let board = MilitaryBoard::new();
/// let (cost, board) = board.add_military_points_to(3, PlayerTurn::Player1);
///
/// assert_eq!(cost, 2);
/// assert_eq!(board.pawn_position(), -3);
/// assert!(!board.tokens(PlayerTurn::Player1).first);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MilitaryBoard {
    pawn_position: i32,
    tokens: PlayerMap<LootingTokens>,
}

impl MilitaryBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Negative values favour player 1, positive values player 2.
    #[must_use]
    pub fn pawn_position(&self) -> i32 {
        self.pawn_position
    }

    /// Looting tokens owned by `player` that are still on the board.
    #[must_use]
    pub fn tokens(&self, player: PlayerTurn) -> LootingTokens {
        self.tokens[player]
    }

    /// Move the pawn `points` spaces toward `player`'s opponent.
    ///
    /// Returns the coins the opponent loses to looting, together with the
    /// updated board. Both tokens can fall in one move; the pawn stops at
    /// the supremacy distance.
    #[must_use]
    pub fn add_military_points_to(&self, points: u32, player: PlayerTurn) -> (u32, MilitaryBoard) {
        let step = i32::try_from(points).unwrap_or(i32::MAX).min(2 * SUPREMACY_DISTANCE);
        let delta = match player {
            PlayerTurn::Player1 => -step,
            PlayerTurn::Player2 => step,
        };
        let pawn_position =
            (self.pawn_position + delta).clamp(-SUPREMACY_DISTANCE, SUPREMACY_DISTANCE);
        let advance = Self::distance_toward_opponent(pawn_position, player);

        let mut tokens = self.tokens.clone();
        let mut cost = 0;
        let own = &mut tokens[player];
        if own.first && advance >= FIRST_TOKEN.0 {
            own.first = false;
            cost += FIRST_TOKEN.1;
        }
        if own.second && advance >= SECOND_TOKEN.0 {
            own.second = false;
            cost += SECOND_TOKEN.1;
        }
        if cost > 0 {
            debug!(%player, cost, position = pawn_position, "looting token taken");
        }

        (
            cost,
            MilitaryBoard {
                pawn_position,
                tokens,
            },
        )
    }

    #[must_use]
    pub fn is_military_supremacy(&self) -> bool {
        self.pawn_position.abs() >= SUPREMACY_DISTANCE
    }

    /// The player the pawn has been pushed toward, if any.
    #[must_use]
    pub fn disadvantaged_player(&self) -> Option<PlayerTurn> {
        match self.pawn_position.signum() {
            1 => Some(PlayerTurn::Player1),
            -1 => Some(PlayerTurn::Player2),
            _ => None,
        }
    }

    /// The player the pawn favours, if any.
    #[must_use]
    pub fn leading_player(&self) -> Option<PlayerTurn> {
        self.disadvantaged_player().map(PlayerTurn::opponent)
    }

    /// Victory points the leading player scores at the end of the game.
    #[must_use]
    pub fn victory_points(&self) -> u32 {
        match self.pawn_position.unsigned_abs() {
            0 => 0,
            1..=2 => 2,
            3..=5 => 5,
            _ => 10,
        }
    }

    fn distance_toward_opponent(position: i32, player: PlayerTurn) -> i32 {
        match player {
            PlayerTurn::Player1 => -position,
            PlayerTurn::Player2 => position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_sequence_for_player_one() {
        let board = MilitaryBoard::new();

        let (cost, board) = board.add_military_points_to(3, PlayerTurn::Player1);
        assert_eq!(cost, 2);
        assert_eq!(board.pawn_position(), -3);
        assert!(!board.tokens(PlayerTurn::Player1).first);
        assert!(board.tokens(PlayerTurn::Player1).second);
        assert_eq!(board.tokens(PlayerTurn::Player2), LootingTokens::default());

        let (cost, board) = board.add_military_points_to(3, PlayerTurn::Player1);
        assert_eq!(cost, 5);
        assert_eq!(board.pawn_position(), -6);
        assert!(!board.tokens(PlayerTurn::Player1).second);
    }

    #[test]
    fn test_both_tokens_in_one_move() {
        let (cost, board) = MilitaryBoard::new().add_military_points_to(7, PlayerTurn::Player2);
        assert_eq!(cost, 7);
        assert_eq!(board.pawn_position(), 7);
        assert_eq!(
            board.tokens(PlayerTurn::Player2),
            LootingTokens { first: false, second: false }
        );
    }

    #[test]
    fn test_tokens_never_return() {
        let (_, board) = MilitaryBoard::new().add_military_points_to(3, PlayerTurn::Player2);
        let (_, board) = board.add_military_points_to(3, PlayerTurn::Player1);
        assert_eq!(board.pawn_position(), 0);

        let (cost, board) = board.add_military_points_to(3, PlayerTurn::Player2);
        assert_eq!(cost, 0);
        assert_eq!(board.pawn_position(), 3);
    }

    #[test]
    fn test_pushing_back_takes_nothing() {
        let (_, board) = MilitaryBoard::new().add_military_points_to(5, PlayerTurn::Player2);
        let (cost, board) = board.add_military_points_to(2, PlayerTurn::Player1);
        assert_eq!(cost, 0);
        assert_eq!(board.pawn_position(), 3);
        assert_eq!(board.tokens(PlayerTurn::Player1), LootingTokens::default());
    }

    #[test]
    fn test_supremacy_boundary() {
        let (_, board) = MilitaryBoard::new().add_military_points_to(8, PlayerTurn::Player1);
        assert!(!board.is_military_supremacy());
        let (_, board) = MilitaryBoard::new().add_military_points_to(8, PlayerTurn::Player2);
        assert!(!board.is_military_supremacy());

        let (_, board) = board.add_military_points_to(1, PlayerTurn::Player2);
        assert_eq!(board.pawn_position(), 9);
        assert!(board.is_military_supremacy());
    }

    #[test]
    fn test_pawn_stops_at_capital() {
        let (_, board) = MilitaryBoard::new().add_military_points_to(40, PlayerTurn::Player1);
        assert_eq!(board.pawn_position(), -SUPREMACY_DISTANCE);
        assert!(board.is_military_supremacy());
    }

    #[test]
    fn test_zero_points_is_a_no_op() {
        let board = MilitaryBoard::new();
        assert_eq!(board.add_military_points_to(0, PlayerTurn::Player1), (0, board.clone()));
    }

    #[test]
    fn test_disadvantaged_and_leading_player() {
        let board = MilitaryBoard::new();
        assert_eq!(board.disadvantaged_player(), None);
        assert_eq!(board.victory_points(), 0);

        let (_, board) = board.add_military_points_to(2, PlayerTurn::Player2);
        assert_eq!(board.disadvantaged_player(), Some(PlayerTurn::Player1));
        assert_eq!(board.leading_player(), Some(PlayerTurn::Player2));
        assert_eq!(board.victory_points(), 2);

        let (_, board) = board.add_military_points_to(8, PlayerTurn::Player1);
        assert_eq!(board.pawn_position(), -6);
        assert_eq!(board.disadvantaged_player(), Some(PlayerTurn::Player2));
        assert_eq!(board.victory_points(), 10);
    }
}
