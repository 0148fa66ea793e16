//! The transition pipeline: `(GameState, Action) -> GameState`.
//!
//! ## Turn flow
//!
//! 1. A fresh turn accepts only card-taking actions from the active player.
//!    The opponent is recorded as the next player unless a wonder grants
//!    another turn.
//! 2. While decisions are pending, the action must be one of the head
//!    decision's options. Resolving it pops the head.
//! 3. The action's effects run. They may queue further decisions.
//! 4. Supremacy is checked for the acting player. A win ends the game and
//!    drops whatever is still queued.
//! 5. With the queue drained, an exhausted structure moves the game to the
//!    next age (or to final scoring after the third), and then the next
//!    player starts a fresh turn.
//!
//! Every step works on a clone of the input, so a failed action leaves the
//! caller's state untouched. Validation happens before any card is drawn.

use tracing::debug;

use super::engine::{GameResult, WinCondition};
use super::{scoring, setup};
use crate::cards::{
    CardColor, CardDefinition, CardGroup, CardId, CityReference, ProgressKind, WonderPower,
};
use crate::city::trading_cost;
use crate::core::action::{Action, Decision, DecisionOrigin};
use crate::core::error::{EngineError, Result};
use crate::core::player::PlayerTurn;
use crate::core::rng::RandomSource;
use crate::core::state::{GameState, Phase};

/// Apply `action` to `state`, drawing any revealed cards from `rng`.
///
/// Fails with [`EngineError::IllegalAction`] when the action is not legal in
/// `state`; use [`legal_actions`](super::options::legal_actions) to obtain
/// legal ones.
pub fn apply_action(state: &GameState, action: &Action, rng: &mut dyn RandomSource) -> Result<GameState> {
    let next = match state.phase {
        Phase::Terminal(_) => return Err(EngineError::illegal(action, "the game is over")),
        Phase::AwaitingAction => begin_turn(state, action)?,
        Phase::AwaitingDecision => resolve_head(state, action)?,
    };

    let next = match *action {
        Action::BuildBuilding { player, card } => build_building(next, action, player, card, rng)?,
        Action::DiscardCard { player, card } => discard_card(next, action, player, card, rng)?,
        Action::BuildWonder {
            player,
            card,
            wonder,
        } => build_wonder(next, action, player, card, wonder, rng)?,
        Action::ChooseProgressToken { player, token } => choose_progress_token(next, player, token)?,
        Action::DestroyCard { player, card } => destroy_card(next, player, card)?,
        Action::BuildDiscarded { player, card } => build_discarded(next, player, card)?,
        Action::ChooseStartingPlayer { starting, .. } => GameState {
            next_player: starting,
            ..next
        },
    };

    let next = check_supremacy(next, action.player());
    let next = settle(next, rng)?;
    debug!(%action, phase = ?next.phase, "applied action");
    Ok(next)
}

/// Coins `player` pays to build `card`: its coin cost plus bank trading.
///
/// Architecture waives two units on wonders, Masonry on blue cards.
#[must_use]
pub fn construction_cost(state: &GameState, player: PlayerTurn, card: &CardDefinition) -> u32 {
    let city = state.city(player);
    let waived = if (card.group == CardGroup::Wonder && city.has_progress(ProgressKind::Architecture))
        || (card.is_color(CardColor::Blue) && city.has_progress(ProgressKind::Masonry))
    {
        2
    } else {
        0
    };
    card.coin_cost + trading_cost(city, state.city(player.opponent()), card, waived)
}

// === Turn control ===

fn begin_turn(state: &GameState, action: &Action) -> Result<GameState> {
    if action.player() != state.active_player {
        return Err(EngineError::illegal(action, "not this player's turn"));
    }
    if !action.takes_card() {
        return Err(EngineError::illegal(action, "no pending decision offers this action"));
    }
    Ok(GameState {
        next_player: state.active_player.opponent(),
        ..state.clone()
    })
}

fn resolve_head(state: &GameState, action: &Action) -> Result<GameState> {
    let mut next = state.clone();
    let head = next
        .decisions
        .pop_front()
        .ok_or(EngineError::CorruptState("awaiting a decision with an empty queue"))?;
    if !head.allows(action) {
        return Err(EngineError::illegal(action, "not an option of the pending decision"));
    }
    Ok(next)
}

fn enqueue(mut state: GameState, decision: Decision) -> GameState {
    debug!(
        player = %decision.player,
        origin = ?decision.origin,
        options = decision.options.len(),
        "decision queued"
    );
    state.decisions.push_back(decision);
    state
}

fn finish(mut state: GameState, result: GameResult) -> GameState {
    debug!(?result, "game over");
    state.decisions.clear();
    state.phase = Phase::Terminal(result);
    state
}

fn check_supremacy(state: GameState, player: PlayerTurn) -> GameState {
    if state.is_terminal() {
        return state;
    }
    if state.military.is_military_supremacy() {
        if let Some(leader) = state.military.leading_player() {
            let result = GameResult::Winner {
                player: leader,
                condition: WinCondition::MilitarySupremacy,
            };
            return finish(state, result);
        }
    }
    if state.cities[player].distinct_science_symbols() >= state.config.science_supremacy_symbols {
        let result = GameResult::Winner {
            player,
            condition: WinCondition::ScienceSupremacy,
        };
        return finish(state, result);
    }
    state
}

fn settle(mut state: GameState, rng: &mut dyn RandomSource) -> Result<GameState> {
    if state.is_terminal() {
        return Ok(state);
    }
    if state.decisions.is_empty() && state.card_structure.is_exhausted() {
        match state.age().next() {
            Some(age) => {
                state.card_structure = setup::age_structure(&state.config, age, rng)?;
                let chooser = state
                    .military
                    .disadvantaged_player()
                    .unwrap_or(state.active_player);
                debug!(age = age.label(), %chooser, "age begins");
                let options = [chooser, chooser.opponent()].map(|starting| Action::ChooseStartingPlayer {
                    player: chooser,
                    starting,
                });
                state = enqueue(state, Decision::new(chooser, DecisionOrigin::AgeTransition, options));
            }
            None => {
                let result = scoring::civilian_result(&state);
                return Ok(finish(state, result));
            }
        }
    }
    if state.decisions.is_empty() {
        state.active_player = state.next_player;
        state.phase = Phase::AwaitingAction;
    } else {
        state.phase = Phase::AwaitingDecision;
    }
    Ok(state)
}

// === Shared effects ===

fn ensure_available(state: &GameState, action: &Action, card: CardId) -> Result<()> {
    if state.card_structure.is_available(card) {
        Ok(())
    } else {
        Err(EngineError::illegal(action, "card is not available"))
    }
}

fn take_card(mut state: GameState, card: CardId, rng: &mut dyn RandomSource) -> Result<GameState> {
    state.card_structure = state.card_structure.pick_up_card(card, rng)?;
    Ok(state)
}

fn pay_for(
    mut state: GameState,
    action: &Action,
    player: PlayerTurn,
    card: &CardDefinition,
) -> Result<GameState> {
    let total = construction_cost(&state, player, card);
    state.cities[player] = state.cities[player]
        .pay(total)
        .ok_or_else(|| EngineError::illegal(action, "cannot afford the card"))?;

    let traded = total - card.coin_cost;
    let opponent = player.opponent();
    if traded > 0 && state.cities[opponent].has_progress(ProgressKind::Economy) {
        state.cities[opponent] = state.cities[opponent].add_coins(traded);
    }
    Ok(state)
}

/// Coins a card yields for `player` when it enters play.
fn coin_income(state: &GameState, player: PlayerTurn, card: &CardDefinition) -> u32 {
    if card.coins_produced == 0 {
        return 0;
    }
    let own = state.cities[player].formula_count(card.coins_formula);
    let opponent = state.cities[player.opponent()].formula_count(card.coins_formula);
    let count = match card.coins_reference {
        CityReference::Own => own,
        CityReference::Opponent => opponent,
        CityReference::HigherOf => own.max(opponent),
    };
    card.coins_produced.saturating_mul(count)
}

fn gain_income(mut state: GameState, player: PlayerTurn, card: &CardDefinition) -> GameState {
    let income = coin_income(&state, player, card);
    state.cities[player] = state.cities[player].add_coins(income);
    state
}

fn advance_military(mut state: GameState, player: PlayerTurn, points: u32) -> GameState {
    let (loot, board) = state.military.add_military_points_to(points, player);
    state.military = board;
    if loot > 0 {
        let opponent = player.opponent();
        let (_, city) = state.cities[opponent].lose_coins(loot);
        state.cities[opponent] = city;
    }
    state
}

/// Put a paid-for building into `player`'s city and run its effects.
///
/// Income is counted against the city as it was before the card arrived.
fn construct(state: GameState, player: PlayerTurn, card: CardId) -> GameState {
    let def = card.definition();
    let mut state = gain_income(state, player, def);
    state.cities[player] = state.cities[player].add_building(card);

    if def.is_color(CardColor::Red) {
        let strategy = u32::from(state.cities[player].has_progress(ProgressKind::Strategy));
        state = advance_military(state, player, def.military_points + strategy);
    }

    if let Some(symbol) = def.science_symbol {
        if state.cities[player].symbol_count(symbol) == 2 && !state.progress_tokens.is_empty() {
            let options: Vec<Action> = state
                .progress_tokens
                .iter()
                .map(|&token| Action::ChooseProgressToken { player, token })
                .collect();
            state = enqueue(state, Decision::new(player, DecisionOrigin::SciencePair, options));
        }
    }
    state
}

// === Action handlers ===

fn build_building(
    state: GameState,
    action: &Action,
    player: PlayerTurn,
    card: CardId,
    rng: &mut dyn RandomSource,
) -> Result<GameState> {
    ensure_available(&state, action, card)?;
    let state = pay_for(state, action, player, card.definition())?;
    let state = take_card(state, card, rng)?;
    Ok(construct(state, player, card))
}

fn discard_card(
    state: GameState,
    action: &Action,
    player: PlayerTurn,
    card: CardId,
    rng: &mut dyn RandomSource,
) -> Result<GameState> {
    ensure_available(&state, action, card)?;
    let mut state = take_card(state, card, rng)?;

    let gold = u32::try_from(state.cities[player].count_color(CardColor::Gold)).unwrap_or(u32::MAX);
    let income = state.config.discard_base_income.saturating_add(gold);
    state.cities[player] = state.cities[player].add_coins(income);
    state.discard_pile.push_back(card);
    Ok(state)
}

fn build_wonder(
    state: GameState,
    action: &Action,
    player: PlayerTurn,
    card: CardId,
    wonder: CardId,
    rng: &mut dyn RandomSource,
) -> Result<GameState> {
    if !state.cities[player].unbuilt_wonders().contains(&wonder) {
        return Err(EngineError::illegal(action, "wonder is not among the player's unbuilt wonders"));
    }
    if state.wonders_built() >= state.config.max_wonders {
        return Err(EngineError::illegal(action, "no more wonders can be built"));
    }
    ensure_available(&state, action, card)?;

    let def = wonder.definition();
    let state = pay_for(state, action, player, def)?;
    let state = take_card(state, card, rng)?;
    let mut state = gain_income(state, player, def);
    state.cities[player] = state.cities[player].build_wonder(wonder)?;

    let opponent = player.opponent();
    if def.opponent_coin_loss > 0 {
        let (_, city) = state.cities[opponent].lose_coins(def.opponent_coin_loss);
        state.cities[opponent] = city;
    }
    if def.military_points > 0 {
        state = advance_military(state, player, def.military_points);
    }
    if def.replay || state.cities[player].has_progress(ProgressKind::Theology) {
        state.next_player = player;
    }
    if let Some(power) = def.wonder_power {
        state = wonder_power(state, player, power, rng)?;
    }

    if state.wonders_built() >= state.config.max_wonders {
        debug!("last wonder built, unbuilt wonders removed");
        for p in PlayerTurn::ALL {
            state.cities[p] = state.cities[p].discard_unbuilt_wonders();
        }
    }
    Ok(state)
}

fn wonder_power(
    state: GameState,
    player: PlayerTurn,
    power: WonderPower,
    rng: &mut dyn RandomSource,
) -> Result<GameState> {
    let (origin, options): (DecisionOrigin, Vec<Action>) = match power {
        WonderPower::DestroyBrown | WonderPower::DestroyGray => {
            let color = if power == WonderPower::DestroyBrown {
                CardColor::Brown
            } else {
                CardColor::Gray
            };
            let targets = state.cities[player.opponent()]
                .buildings()
                .iter()
                .filter(|card| card.definition().is_color(color))
                .map(|&card| Action::DestroyCard { player, card })
                .collect();
            (DecisionOrigin::Destroy, targets)
        }
        WonderPower::BuildDiscarded => {
            let cards = state
                .discard_pile
                .iter()
                .map(|&card| Action::BuildDiscarded { player, card })
                .collect();
            (DecisionOrigin::Mausoleum, cards)
        }
        WonderPower::ChooseBoxedToken => {
            let count = state.boxed_tokens.size().min(3);
            // The tokens not chosen go back in the box, so the drawn-from
            // deck is discarded.
            let (drawn, _) = state.boxed_tokens.draw_cards(count, rng)?;
            let tokens = drawn
                .into_iter()
                .map(|token| Action::ChooseProgressToken { player, token })
                .collect();
            (DecisionOrigin::GreatLibrary, tokens)
        }
    };

    if options.is_empty() {
        return Ok(state);
    }
    Ok(enqueue(state, Decision::new(player, origin, options)))
}

fn choose_progress_token(mut state: GameState, player: PlayerTurn, token: CardId) -> Result<GameState> {
    match state.progress_tokens.index_of(&token) {
        Some(index) => {
            state.progress_tokens.remove(index);
        }
        None => state.boxed_tokens = state.boxed_tokens.remove(token)?,
    }
    let mut state = gain_income(state, player, token.definition());
    state.cities[player] = state.cities[player].add_progress_token(token);
    Ok(state)
}

fn destroy_card(mut state: GameState, player: PlayerTurn, card: CardId) -> Result<GameState> {
    let opponent = player.opponent();
    state.cities[opponent] = state.cities[opponent].remove_building(card)?;
    state.discard_pile.push_back(card);
    Ok(state)
}

fn build_discarded(mut state: GameState, player: PlayerTurn, card: CardId) -> Result<GameState> {
    let index = state
        .discard_pile
        .index_of(&card)
        .ok_or_else(|| EngineError::not_found(&card))?;
    state.discard_pile.remove(index);
    Ok(construct(state, player, card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CardStructure, AGE_I, VERTEX_COUNT};
    use crate::cards::{catalog, Deck, Formula};
    use crate::city::City;
    use crate::core::config::RulesConfig;
    use crate::core::rng::{GameRng, ReplayRandom};
    use crate::rules::setup::new_game;

    fn card(name: &str) -> CardId {
        catalog::find(name).unwrap()
    }

    fn fresh(seed: u64) -> (GameState, GameRng) {
        let mut rng = GameRng::new(seed);
        let state = new_game(RulesConfig::default(), &mut rng).unwrap();
        (state, rng)
    }

    #[test]
    fn test_discard_alternates_players() {
        let (state, mut rng) = fresh(1);
        let card = state.card_structure().available_cards()[0];
        let action = Action::DiscardCard {
            player: PlayerTurn::Player1,
            card,
        };

        let next = apply_action(&state, &action, &mut rng).unwrap();

        assert_eq!(next.active_player(), PlayerTurn::Player2);
        assert_eq!(next.city(PlayerTurn::Player1).coins(), 7 + 2);
        assert_eq!(next.discard_pile().len(), 1);
        assert!(!next.card_structure().is_available(card));
        // The input state is unchanged.
        assert!(state.card_structure().is_available(card));
        assert_eq!(state.active_player(), PlayerTurn::Player1);
    }

    #[test]
    fn test_wrong_player_is_rejected() {
        let (state, mut rng) = fresh(2);
        let card = state.card_structure().available_cards()[0];
        let action = Action::DiscardCard {
            player: PlayerTurn::Player2,
            card,
        };
        let err = apply_action(&state, &action, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::IllegalAction { .. }));
    }

    #[test]
    fn test_decision_action_without_decision_is_rejected() {
        let (state, mut rng) = fresh(3);
        let action = Action::ChooseStartingPlayer {
            player: PlayerTurn::Player1,
            starting: PlayerTurn::Player1,
        };
        assert!(apply_action(&state, &action, &mut rng).is_err());
    }

    #[test]
    fn test_covered_card_is_rejected() {
        let (state, mut rng) = fresh(4);
        let covered = state
            .card_structure()
            .graph()
            .vertex(11)
            .and_then(|slot| slot.card())
            .unwrap();
        let action = Action::DiscardCard {
            player: PlayerTurn::Player1,
            card: covered,
        };
        assert_eq!(
            apply_action(&state, &action, &mut rng),
            Err(EngineError::illegal(&action, "card is not available"))
        );
    }

    #[test]
    fn test_coin_income_uses_declared_reference() {
        let (mut state, _) = fresh(5);
        state.cities[PlayerTurn::Player1] = state.cities[PlayerTurn::Player1]
            .add_building(card("Stone Reserve"));
        state.cities[PlayerTurn::Player2] = state.cities[PlayerTurn::Player2]
            .add_building(card("Clay Reserve"))
            .add_building(card("Wood Reserve"))
            .add_building(card("Tavern"));

        let merchants = card("Merchants Guild").definition();
        assert_eq!(coin_income(&state, PlayerTurn::Player1, merchants), 3);

        let lighthouse = card("Lighthouse").definition();
        assert_eq!(coin_income(&state, PlayerTurn::Player1, lighthouse), 1);
    }

    #[test]
    fn test_coin_income_reads_opponent_and_treasury() {
        let (mut state, _) = fresh(13);
        state.cities[PlayerTurn::Player2] = City::new(12, []).add_building(card("Guard Tower"));

        let treasury = |reference| {
            CardDefinition::building("Counting House", CardGroup::FirstAge, CardColor::Gold)
                .income(1, Formula::PerCoin, reference)
        };
        assert_eq!(coin_income(&state, PlayerTurn::Player1, &treasury(CityReference::Own)), 7);
        assert_eq!(coin_income(&state, PlayerTurn::Player1, &treasury(CityReference::Opponent)), 12);
        assert_eq!(coin_income(&state, PlayerTurn::Player1, &treasury(CityReference::HigherOf)), 12);

        let tribute = CardDefinition::building("Tribute Hall", CardGroup::SecondAge, CardColor::Gold)
            .income(2, Formula::PerRedCard, CityReference::Opponent);
        assert_eq!(coin_income(&state, PlayerTurn::Player1, &tribute), 2);
        assert_eq!(coin_income(&state, PlayerTurn::Player2, &tribute), 0);
    }

    #[test]
    fn test_income_ignores_the_card_being_built() {
        let (mut state, _) = fresh(14);
        state.cities[PlayerTurn::Player1] = City::new(0, []).add_building(card("Stone Reserve"));

        let built = construct(state, PlayerTurn::Player1, card("Lighthouse"));

        // One gold card before Lighthouse arrives.
        assert_eq!(built.city(PlayerTurn::Player1).coins(), 1);
        assert!(built.city(PlayerTurn::Player1).buildings().contains(&card("Lighthouse")));
    }

    #[test]
    fn test_built_gold_card_pays_for_earlier_gold_cards() {
        let mut state = scenario(&["Lighthouse"]);
        state.cities[PlayerTurn::Player1] = City::new(30, []).add_building(card("Stone Reserve"));
        let mut rng = GameRng::new(15);

        let next = apply_action(&state, &build(PlayerTurn::Player1, "Lighthouse"), &mut rng).unwrap();

        // Two clay and a glass at two coins each, then one coin of income.
        assert_eq!(next.city(PlayerTurn::Player1).coins(), 30 - 6 + 1);
    }

    #[test]
    fn test_economy_pays_trade_to_token_owner() {
        let (mut state, _) = fresh(6);
        state.cities[PlayerTurn::Player2] =
            state.cities[PlayerTurn::Player2].add_progress_token(card("Economy"));
        let walls = Action::BuildBuilding {
            player: PlayerTurn::Player1,
            card: card("Walls"),
        };

        let paid = pay_for(state.clone(), &walls, PlayerTurn::Player1, card("Walls").definition()).unwrap();

        assert_eq!(paid.city(PlayerTurn::Player1).coins(), 7 - 4);
        assert_eq!(paid.city(PlayerTurn::Player2).coins(), 7 + 4);
    }

    #[test]
    fn test_unaffordable_card_is_rejected_without_drawing() {
        let (mut state, _) = fresh(7);
        state.cities[PlayerTurn::Player1] = state.cities[PlayerTurn::Player1].lose_coins(7).1;
        let target = state
            .card_structure()
            .available_cards()
            .into_iter()
            .find(|c| construction_cost(&state, PlayerTurn::Player1, c.definition()) > 0);

        if let Some(card) = target {
            let action = Action::BuildBuilding {
                player: PlayerTurn::Player1,
                card,
            };
            let mut replay = ReplayRandom::new(vec![]);
            assert_eq!(
                apply_action(&state, &action, &mut replay),
                Err(EngineError::illegal(&action, "cannot afford the card"))
            );
        }
    }

    // === Scenarios ===

    /// A fresh game whose age I structure deals `front` into the face-up
    /// slots in slot order, so the first six names are available.
    fn scenario(front: &[&str]) -> GameState {
        let (mut state, _) = fresh(0);
        let named: Vec<CardId> = front.iter().map(|name| card(name)).collect();
        let rest: Vec<CardId> = Deck::from_group("Age I", CardGroup::FirstAge)
            .cards()
            .filter(|c| !named.contains(c))
            .take(VERTEX_COUNT - named.len())
            .collect();
        let deck = Deck::with_cards("Age I", named.iter().copied().chain(rest));
        state.card_structure =
            CardStructure::build(&AGE_I, &deck, &mut ReplayRandom::new(vec![0; 12])).unwrap();
        state
    }

    fn build(player: PlayerTurn, name: &str) -> Action {
        Action::BuildBuilding {
            player,
            card: card(name),
        }
    }

    #[test]
    fn test_science_pair_keeps_the_turn() {
        let mut state = scenario(&["Scriptorium"]);
        state.cities[PlayerTurn::Player1] =
            state.cities[PlayerTurn::Player1].add_building(card("Library"));
        let mut rng = GameRng::new(1);

        let next = apply_action(&state, &build(PlayerTurn::Player1, "Scriptorium"), &mut rng).unwrap();

        assert_eq!(next.phase(), &Phase::AwaitingDecision);
        assert_eq!(next.active_player(), PlayerTurn::Player1);
        assert_eq!(next.next_player(), PlayerTurn::Player2);
        let decision = next.pending_decision().unwrap();
        assert_eq!(decision.origin, DecisionOrigin::SciencePair);
        assert_eq!(decision.options.len(), 5);
        assert_eq!(next.city(PlayerTurn::Player1).coins(), 7 - 2);

        let choice = decision.options[0].clone();
        let resolved = apply_action(&next, &choice, &mut rng).unwrap();

        assert_eq!(resolved.phase(), &Phase::AwaitingAction);
        assert_eq!(resolved.active_player(), PlayerTurn::Player2);
        assert_eq!(resolved.progress_tokens().len(), 4);
        assert_eq!(resolved.city(PlayerTurn::Player1).progress_tokens().len(), 1);
    }

    #[test]
    fn test_decision_rejects_other_actions() {
        let mut state = scenario(&["Scriptorium", "Lumber Yard"]);
        state.cities[PlayerTurn::Player1] =
            state.cities[PlayerTurn::Player1].add_building(card("Library"));
        let mut rng = GameRng::new(1);
        let next = apply_action(&state, &build(PlayerTurn::Player1, "Scriptorium"), &mut rng).unwrap();

        let err = apply_action(&next, &build(PlayerTurn::Player2, "Lumber Yard"), &mut rng).unwrap_err();
        assert_eq!(
            err,
            EngineError::illegal(
                &build(PlayerTurn::Player2, "Lumber Yard"),
                "not an option of the pending decision"
            )
        );
    }

    #[test]
    fn test_military_supremacy_ends_the_game() {
        let mut state = scenario(&["Guard Tower"]);
        state.military = state.military.add_military_points_to(8, PlayerTurn::Player1).1;
        let mut rng = GameRng::new(2);

        let next = apply_action(&state, &build(PlayerTurn::Player1, "Guard Tower"), &mut rng).unwrap();

        assert_eq!(
            next.result(),
            Some(&GameResult::Winner {
                player: PlayerTurn::Player1,
                condition: WinCondition::MilitarySupremacy,
            })
        );
        assert!(next.decisions().is_empty());
        assert!(apply_action(&next, &build(PlayerTurn::Player2, "Guard Tower"), &mut rng).is_err());
    }

    #[test]
    fn test_supremacy_drops_pending_decisions() {
        let mut state = scenario(&["Scriptorium"]);
        state.config.science_supremacy_symbols = 2;
        state.cities[PlayerTurn::Player1] =
            state.cities[PlayerTurn::Player1].add_building(card("Laboratory"));
        state.cities[PlayerTurn::Player1] =
            state.cities[PlayerTurn::Player1].add_building(card("Library"));
        let mut rng = GameRng::new(3);

        let next = apply_action(&state, &build(PlayerTurn::Player1, "Scriptorium"), &mut rng).unwrap();

        assert_eq!(
            next.result().and_then(GameResult::winner),
            Some(PlayerTurn::Player1)
        );
        assert!(next.decisions().is_empty());
        assert!(next.check_invariants().is_ok());
    }

    #[test]
    fn test_strategy_adds_a_shield() {
        let mut state = scenario(&["Guard Tower"]);
        state.cities[PlayerTurn::Player2] =
            state.cities[PlayerTurn::Player2].add_progress_token(card("Strategy"));
        state.active_player = PlayerTurn::Player2;
        let mut rng = GameRng::new(4);

        let next = apply_action(&state, &build(PlayerTurn::Player2, "Guard Tower"), &mut rng).unwrap();
        assert_eq!(next.military().pawn_position(), 2);
    }

    fn with_wonder(mut state: GameState, wonder: &str) -> GameState {
        state.cities[PlayerTurn::Player1] = City::new(30, [card(wonder)]);
        state
    }

    fn build_wonder_with_front(wonder: &str) -> Action {
        Action::BuildWonder {
            player: PlayerTurn::Player1,
            card: card("Lumber Yard"),
            wonder: card(wonder),
        }
    }

    #[test]
    fn test_replay_wonder_keeps_the_turn() {
        let state = with_wonder(scenario(&["Lumber Yard"]), "The Sphinx");
        let mut rng = GameRng::new(5);

        let next = apply_action(&state, &build_wonder_with_front("The Sphinx"), &mut rng).unwrap();

        assert_eq!(next.active_player(), PlayerTurn::Player1);
        assert_eq!(next.phase(), &Phase::AwaitingAction);
        assert_eq!(next.city(PlayerTurn::Player1).wonders().len(), 1);
        // Stone, clay and two glass at two coins each.
        assert_eq!(next.city(PlayerTurn::Player1).coins(), 30 - 8);
    }

    #[test]
    fn test_great_library_offers_boxed_tokens() {
        let state = with_wonder(scenario(&["Lumber Yard"]), "The Great Library");
        let mut rng = GameRng::new(6);

        let next = apply_action(&state, &build_wonder_with_front("The Great Library"), &mut rng).unwrap();

        let decision = next.pending_decision().unwrap();
        assert_eq!(decision.origin, DecisionOrigin::GreatLibrary);
        assert_eq!(decision.options.len(), 3);
        for option in &decision.options {
            let Action::ChooseProgressToken { token, .. } = *option else {
                panic!("unexpected option {option}");
            };
            assert!(next.boxed_tokens().contains(token));
        }

        let chosen = decision.options[1].clone();
        let resolved = apply_action(&next, &chosen, &mut rng).unwrap();
        assert_eq!(resolved.boxed_tokens().size(), 4);
        assert_eq!(resolved.progress_tokens().len(), 5);
        assert_eq!(resolved.active_player(), PlayerTurn::Player2);
    }

    #[test]
    fn test_statue_of_zeus_destroys_brown_card() {
        let mut state = with_wonder(scenario(&["Lumber Yard"]), "The Statue of Zeus");
        state.cities[PlayerTurn::Player2] = state.cities[PlayerTurn::Player2]
            .add_building(card("Quarry"))
            .add_building(card("Glassworks"));
        let mut rng = GameRng::new(7);

        let next = apply_action(&state, &build_wonder_with_front("The Statue of Zeus"), &mut rng).unwrap();
        let decision = next.pending_decision().unwrap();
        assert_eq!(decision.origin, DecisionOrigin::Destroy);
        assert_eq!(decision.options.len(), 1);
        assert_eq!(next.military().pawn_position(), -1);

        let resolved = apply_action(&next, &decision.options[0].clone(), &mut rng).unwrap();
        assert_eq!(resolved.city(PlayerTurn::Player2).buildings().len(), 1);
        assert!(resolved.discard_pile().contains(&card("Quarry")));
    }

    #[test]
    fn test_mausoleum_builds_from_discard() {
        let mut state = with_wonder(scenario(&["Lumber Yard"]), "The Mausoleum");
        state.discard_pile.push_back(card("Tavern"));
        let mut rng = GameRng::new(8);

        let next = apply_action(&state, &build_wonder_with_front("The Mausoleum"), &mut rng).unwrap();
        let coins = next.city(PlayerTurn::Player1).coins();
        let option = next.pending_decision().unwrap().options[0].clone();
        let resolved = apply_action(&next, &option, &mut rng).unwrap();

        assert!(resolved.discard_pile().is_empty());
        assert!(resolved.city(PlayerTurn::Player1).buildings().contains(&card("Tavern")));
        assert_eq!(resolved.city(PlayerTurn::Player1).coins(), coins + 4);
    }

    #[test]
    fn test_no_target_means_no_decision() {
        let state = with_wonder(scenario(&["Lumber Yard"]), "Circus Maximus");
        let mut rng = GameRng::new(9);
        let next = apply_action(&state, &build_wonder_with_front("Circus Maximus"), &mut rng).unwrap();
        assert!(next.decisions().is_empty());
        assert_eq!(next.active_player(), PlayerTurn::Player2);
    }

    #[test]
    fn test_last_wonder_removes_unbuilt_ones() {
        let mut state = scenario(&["Lumber Yard"]);
        state.config.max_wonders = 1;
        state.cities[PlayerTurn::Player1] = City::new(30, [card("The Pyramids"), card("The Sphinx")]);
        let mut rng = GameRng::new(10);

        let next = apply_action(&state, &build_wonder_with_front("The Pyramids"), &mut rng).unwrap();

        for player in PlayerTurn::ALL {
            assert!(next.city(player).unbuilt_wonders().is_empty());
        }
        assert_eq!(next.wonders_built(), 1);
    }

    #[test]
    fn test_opponent_loses_coins_but_not_below_zero() {
        let mut state = with_wonder(scenario(&["Lumber Yard"]), "The Appian Way");
        state.cities[PlayerTurn::Player2] = City::new(1, []);
        let mut rng = GameRng::new(11);

        let next = apply_action(&state, &build_wonder_with_front("The Appian Way"), &mut rng).unwrap();
        assert_eq!(next.city(PlayerTurn::Player2).coins(), 0);
    }
}
