//! End-of-game civilian scoring.
//!
//! Reached only when the third age runs out of cards without a supremacy.
//! Victory points come from buildings, wonders, progress tokens, the
//! military track and the treasury (one point per three coins). Equal
//! totals go to the player with more blue-card points; equal again is a draw.

use serde::{Deserialize, Serialize};

use super::engine::{GameResult, WinCondition};
use crate::cards::{CardColor, ProgressKind};
use crate::city::City;
use crate::core::player::PlayerTurn;
use crate::core::state::GameState;

/// Victory points per progress token held, with Mathematics.
const MATHEMATICS_POINTS_PER_TOKEN: u32 = 3;

/// A player's victory points by category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    /// Blue cards.
    pub civilian: u32,
    /// Green cards.
    pub science: u32,
    /// Gold cards.
    pub commercial: u32,
    pub guilds: u32,
    pub wonders: u32,
    pub progress: u32,
    pub military: u32,
    pub treasury: u32,
}

impl ScoreSheet {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.civilian
            + self.science
            + self.commercial
            + self.guilds
            + self.wonders
            + self.progress
            + self.military
            + self.treasury
    }
}

fn color_points(city: &City, color: CardColor) -> u32 {
    city.buildings()
        .iter()
        .map(|card| card.definition())
        .filter(|def| def.is_color(color))
        .map(|def| def.victory_points)
        .sum()
}

/// Score `player`'s city as it stands.
#[must_use]
pub fn score(state: &GameState, player: PlayerTurn) -> ScoreSheet {
    let city = state.city(player);

    let wonders = city.wonders().iter().map(|w| w.definition().victory_points).sum();
    let mut progress: u32 = city
        .progress_tokens()
        .iter()
        .map(|t| t.definition().victory_points)
        .sum();
    if city.has_progress(ProgressKind::Mathematics) {
        let held = u32::try_from(city.progress_tokens().len()).unwrap_or(u32::MAX);
        progress += MATHEMATICS_POINTS_PER_TOKEN * held;
    }
    let military = if state.military().leading_player() == Some(player) {
        state.military().victory_points()
    } else {
        0
    };

    ScoreSheet {
        civilian: color_points(city, CardColor::Blue),
        science: color_points(city, CardColor::Green),
        commercial: color_points(city, CardColor::Gold),
        guilds: color_points(city, CardColor::Purple),
        wonders,
        progress,
        military,
        treasury: city.coins() / 3,
    }
}

/// Winner by victory points, blue points breaking a tie.
#[must_use]
pub fn civilian_result(state: &GameState) -> GameResult {
    let first = score(state, PlayerTurn::Player1);
    let second = score(state, PlayerTurn::Player2);
    let key = |sheet: &ScoreSheet| (sheet.total(), sheet.civilian);

    let winner = match key(&first).cmp(&key(&second)) {
        std::cmp::Ordering::Greater => PlayerTurn::Player1,
        std::cmp::Ordering::Less => PlayerTurn::Player2,
        std::cmp::Ordering::Equal => return GameResult::Draw,
    };
    GameResult::Winner {
        player: winner,
        condition: WinCondition::Civilian,
    }
}
