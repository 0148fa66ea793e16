//! Game setup: age decks, structures and the initial state.
//!
//! All randomness is drawn from the supplied source in a fixed order:
//! progress tokens, then player 1's wonders, then player 2's, then the
//! first age. Replaying the recorded indices rebuilds the same game.

use im::Vector;
use tracing::debug;

use crate::board::{CardStructure, MilitaryBoard, Topology};
use crate::cards::{Age, CardGroup, Deck};
use crate::city::City;
use crate::core::config::RulesConfig;
use crate::core::error::Result;
use crate::core::player::{PlayerMap, PlayerTurn};
use crate::core::rng::RandomSource;
use crate::core::state::{GameState, Phase};

/// Deck an age's structure is built from.
///
/// Some cards of the age are set aside unseen. The third age also receives
/// a random selection of guilds.
pub fn age_deck(config: &RulesConfig, age: Age, rng: &mut dyn RandomSource) -> Result<Deck> {
    let full = Deck::from_group(age.label(), age.group());
    let (_, deck) = full.draw_cards(config.cards_removed_per_age, rng)?;
    if age != Age::Third {
        return Ok(deck);
    }

    let guilds = Deck::from_group("Guilds", CardGroup::Guild);
    let (kept, _) = guilds.draw_cards(config.guilds_in_play, rng)?;
    Ok(deck.add_all(kept))
}

/// Build the card structure of `age` from a fresh age deck.
pub fn age_structure(config: &RulesConfig, age: Age, rng: &mut dyn RandomSource) -> Result<CardStructure> {
    let deck = age_deck(config, age, rng)?;
    CardStructure::build(Topology::for_age(age), &deck, rng)
}

/// Create a new game. Player 1 takes the first turn.
///
/// ```
/// use duel_engine::core::{GameRng, PlayerTurn, RulesConfig};
/// use duel_engine::rules::new_game;
///
/// let state = new_game(RulesConfig::default(), &mut GameRng::new(42)).unwrap();
///
/// assert_eq!(state.active_player(), PlayerTurn::Player1);
/// assert_eq!(state.card_structure().available_cards().len(), 6);
/// assert_eq!(state.progress_tokens().len(), 5);
/// ```
pub fn new_game(config: RulesConfig, rng: &mut dyn RandomSource) -> Result<GameState> {
    let tokens = Deck::from_group("Progress tokens", CardGroup::ProgressToken);
    let (board_tokens, boxed_tokens) = tokens.draw_cards(config.board_progress_tokens, rng)?;

    let wonders = Deck::from_group("Wonders", CardGroup::Wonder);
    let (first, wonders) = wonders.draw_cards(config.wonders_per_player, rng)?;
    let (second, _) = wonders.draw_cards(config.wonders_per_player, rng)?;

    let card_structure = age_structure(&config, Age::First, rng)?;
    let cities = PlayerMap::new(|player| {
        let dealt = match player {
            PlayerTurn::Player1 => first.clone(),
            PlayerTurn::Player2 => second.clone(),
        };
        City::new(config.starting_coins, dealt)
    });
    debug!(?config, "new game");

    Ok(GameState {
        config,
        card_structure,
        cities,
        military: MilitaryBoard::new(),
        progress_tokens: board_tokens.into_iter().collect(),
        boxed_tokens,
        discard_pile: Vector::new(),
        active_player: PlayerTurn::Player1,
        next_player: PlayerTurn::Player1,
        decisions: Vector::new(),
        phase: Phase::AwaitingAction,
    })
}
