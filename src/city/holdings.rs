//! A player's city: coins, buildings, wonders and progress tokens.
//!
//! Everything else about a city (production, science symbols, colour
//! counts) is derived from the cards it holds. Cities are values: every
//! change returns a new `City`, sharing the card vectors with the old one.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{
    CardColor, CardDefinition, CardId, Formula, ProgressKind, Resource, ResourceAlternative,
    ScienceSymbol,
};
use crate::core::error::{EngineError, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    coins: u32,
    buildings: Vector<CardId>,
    wonders: Vector<CardId>,
    unbuilt_wonders: Vector<CardId>,
    progress_tokens: Vector<CardId>,
}

impl City {
    /// Create a city with starting coins and the wonders it was dealt.
    pub fn new(coins: u32, wonders: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            coins,
            unbuilt_wonders: wonders.into_iter().collect(),
            ..Self::default()
        }
    }

    // === Holdings ===

    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// Built cards in build order.
    #[must_use]
    pub fn buildings(&self) -> &Vector<CardId> {
        &self.buildings
    }

    /// Built wonders in build order.
    #[must_use]
    pub fn wonders(&self) -> &Vector<CardId> {
        &self.wonders
    }

    /// Wonders dealt to this city that are not built yet.
    #[must_use]
    pub fn unbuilt_wonders(&self) -> &Vector<CardId> {
        &self.unbuilt_wonders
    }

    #[must_use]
    pub fn progress_tokens(&self) -> &Vector<CardId> {
        &self.progress_tokens
    }

    /// Every card the city owns that has an effect: buildings, built
    /// wonders and progress tokens.
    pub fn owned_cards(&self) -> impl Iterator<Item = &'static CardDefinition> + '_ {
        self.buildings
            .iter()
            .chain(self.wonders.iter())
            .chain(self.progress_tokens.iter())
            .map(|card| card.definition())
    }

    // === Updates ===

    #[must_use]
    pub fn add_coins(&self, amount: u32) -> City {
        City {
            coins: self.coins.saturating_add(amount),
            ..self.clone()
        }
    }

    /// Remove up to `amount` coins; a city never goes below zero.
    ///
    /// Returns the coins actually lost.
    #[must_use]
    pub fn lose_coins(&self, amount: u32) -> (u32, City) {
        let lost = amount.min(self.coins);
        (
            lost,
            City {
                coins: self.coins - lost,
                ..self.clone()
            },
        )
    }

    /// Pay `amount` coins, or `None` if the city cannot afford it.
    #[must_use]
    pub fn pay(&self, amount: u32) -> Option<City> {
        let coins = self.coins.checked_sub(amount)?;
        Some(City {
            coins,
            ..self.clone()
        })
    }

    #[must_use]
    pub fn add_building(&self, card: CardId) -> City {
        let mut buildings = self.buildings.clone();
        buildings.push_back(card);
        City {
            buildings,
            ..self.clone()
        }
    }

    pub fn remove_building(&self, card: CardId) -> Result<City> {
        let index = self
            .buildings
            .index_of(&card)
            .ok_or_else(|| EngineError::not_found(&card))?;
        let mut buildings = self.buildings.clone();
        buildings.remove(index);
        Ok(City {
            buildings,
            ..self.clone()
        })
    }

    /// Move `wonder` from the unbuilt wonders to the built ones.
    pub fn build_wonder(&self, wonder: CardId) -> Result<City> {
        let index = self
            .unbuilt_wonders
            .index_of(&wonder)
            .ok_or_else(|| EngineError::not_found(&wonder))?;
        let mut unbuilt_wonders = self.unbuilt_wonders.clone();
        unbuilt_wonders.remove(index);
        let mut wonders = self.wonders.clone();
        wonders.push_back(wonder);
        Ok(City {
            wonders,
            unbuilt_wonders,
            ..self.clone()
        })
    }

    /// Drop every wonder that was dealt but not built.
    #[must_use]
    pub fn discard_unbuilt_wonders(&self) -> City {
        City {
            unbuilt_wonders: Vector::new(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn add_progress_token(&self, token: CardId) -> City {
        let mut progress_tokens = self.progress_tokens.clone();
        progress_tokens.push_back(token);
        City {
            progress_tokens,
            ..self.clone()
        }
    }

    // === Tallies ===

    /// Number of built cards of `color`.
    #[must_use]
    pub fn count_color(&self, color: CardColor) -> usize {
        self.buildings
            .iter()
            .filter(|card| card.definition().is_color(color))
            .count()
    }

    /// Fixed production of `resource` from buildings.
    #[must_use]
    pub fn production_of(&self, resource: Resource) -> u32 {
        self.buildings
            .iter()
            .map(|card| card.definition().production_of(resource))
            .sum()
    }

    /// Production of `resource` from brown and gray cards only. This is what
    /// the opponent pays for when trading.
    #[must_use]
    pub fn raw_production_of(&self, resource: Resource) -> u32 {
        self.buildings
            .iter()
            .map(|card| card.definition())
            .filter(|def| def.is_color(CardColor::Brown) || def.is_color(CardColor::Gray))
            .map(|def| def.production_of(resource))
            .sum()
    }

    /// One-of-several producers from buildings and wonders.
    #[must_use]
    pub fn alternatives(&self) -> SmallVec<[ResourceAlternative; 4]> {
        self.owned_cards().filter_map(|def| def.alternative).collect()
    }

    /// Whether the city buys `resource` for one coin.
    #[must_use]
    pub fn has_trading_agreement(&self, resource: Resource) -> bool {
        self.buildings
            .iter()
            .any(|card| card.definition().trading.contains(&resource))
    }

    #[must_use]
    pub fn has_progress(&self, kind: ProgressKind) -> bool {
        self.progress_tokens
            .iter()
            .any(|token| token.definition().progress == Some(kind))
    }

    /// Count of each science symbol, including the Law token.
    #[must_use]
    pub fn science_symbols(&self) -> FxHashMap<ScienceSymbol, usize> {
        let mut symbols = FxHashMap::default();
        for symbol in self.owned_cards().filter_map(|def| def.science_symbol) {
            *symbols.entry(symbol).or_insert(0) += 1;
        }
        symbols
    }

    #[must_use]
    pub fn symbol_count(&self, symbol: ScienceSymbol) -> usize {
        self.owned_cards()
            .filter(|def| def.science_symbol == Some(symbol))
            .count()
    }

    #[must_use]
    pub fn distinct_science_symbols(&self) -> usize {
        self.science_symbols().len()
    }

    /// Multiplier for a coin formula evaluated against this city.
    #[must_use]
    pub fn formula_count(&self, formula: Formula) -> u32 {
        let count = match formula {
            Formula::Absolute => 1,
            Formula::PerBrownAndGrayCard => {
                self.count_color(CardColor::Brown) + self.count_color(CardColor::Gray)
            }
            Formula::PerRedCard => self.count_color(CardColor::Red),
            Formula::PerGoldCard => self.count_color(CardColor::Gold),
            Formula::PerBlueCard => self.count_color(CardColor::Blue),
            Formula::PerGreenCard => self.count_color(CardColor::Green),
            Formula::PerWonder => self.wonders.len(),
            Formula::PerCoin => return self.coins,
        };
        u32::try_from(count).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog;

    fn card(name: &str) -> CardId {
        catalog::find(name).unwrap()
    }

    #[test]
    fn test_coins_saturate_at_zero() {
        let city = City::new(3, []);
        let (lost, city) = city.lose_coins(5);
        assert_eq!(lost, 3);
        assert_eq!(city.coins(), 0);
        assert!(city.pay(1).is_none());
        assert_eq!(city.add_coins(4).pay(4).unwrap().coins(), 0);
    }

    #[test]
    fn test_build_wonder_moves_it() {
        let pyramids = card("The Pyramids");
        let city = City::new(7, [pyramids, card("The Sphinx")]);
        let built = city.build_wonder(pyramids).unwrap();

        assert_eq!(built.wonders().len(), 1);
        assert_eq!(built.unbuilt_wonders().len(), 1);
        assert!(built.build_wonder(pyramids).is_err());
        assert!(built.discard_unbuilt_wonders().unbuilt_wonders().is_empty());
    }

    #[test]
    fn test_tallies() {
        let city = City::new(0, [])
            .add_building(card("Lumber Yard"))
            .add_building(card("Sawmill"))
            .add_building(card("Glassworks"))
            .add_building(card("Forum"))
            .add_building(card("Wood Reserve"));

        assert_eq!(city.production_of(Resource::Wood), 3);
        assert_eq!(city.raw_production_of(Resource::Glass), 1);
        assert_eq!(city.count_color(CardColor::Brown), 2);
        assert_eq!(city.formula_count(Formula::PerBrownAndGrayCard), 3);
        assert_eq!(city.formula_count(Formula::PerGoldCard), 2);
        assert_eq!(city.alternatives().as_slice(), &[ResourceAlternative::GlassPapyrus]);
        assert!(city.has_trading_agreement(Resource::Wood));
        assert!(!city.has_trading_agreement(Resource::Clay));
    }

    #[test]
    fn test_science_symbols_include_law() {
        let city = City::new(0, [])
            .add_building(card("Scriptorium"))
            .add_building(card("Library"))
            .add_building(card("Workshop"))
            .add_progress_token(card("Law"));

        assert_eq!(city.symbol_count(ScienceSymbol::Quill), 2);
        assert_eq!(city.distinct_science_symbols(), 3);
        assert!(!city.has_progress(ProgressKind::Strategy));
        assert!(city.has_progress(ProgressKind::Law));
    }

    #[test]
    fn test_remove_building() {
        let city = City::new(0, []).add_building(card("Quarry"));
        assert!(city.remove_building(card("Quarry")).unwrap().buildings().is_empty());
        assert!(matches!(
            city.remove_building(card("Clay Pit")),
            Err(EngineError::ElementNotFound { .. })
        ));
    }

    #[test]
    fn test_per_coin_formula() {
        assert_eq!(City::new(9, []).formula_count(Formula::PerCoin), 9);
    }
}
