//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: cost,
//! production, shields, science symbol and so on. Every definition lives in
//! the constant catalog and is addressed by a compact [`CardId`]; game state
//! only ever stores ids, so decks and card graphs stay `Copy`-cheap.

use serde::{Deserialize, Serialize};

use super::catalog;

/// Index of a card in the constant catalog.
///
/// Ids are only produced by the catalog itself or by validated
/// deserialization, so [`CardId::definition`] never goes out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct CardId(u16);

impl CardId {
    /// Wrap a raw catalog index, if it exists.
    #[must_use]
    pub fn from_raw(raw: u16) -> Option<Self> {
        ((raw as usize) < catalog::CARDS.len()).then_some(Self(raw))
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index as u16)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The static definition behind this id.
    #[must_use]
    pub fn definition(self) -> &'static CardDefinition {
        &catalog::CARDS[self.0 as usize]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.definition().name
    }
}

impl TryFrom<u16> for CardId {
    type Error = String;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or_else(|| format!("unknown card id {raw}"))
    }
}

impl From<CardId> for u16 {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which pile a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardGroup {
    FirstAge,
    SecondAge,
    ThirdAge,
    Guild,
    Wonder,
    ProgressToken,
}

/// One of the three card tiers, each with its own structure topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Age {
    First,
    Second,
    Third,
}

impl Age {
    /// The age played after this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Age> {
        match self {
            Age::First => Some(Age::Second),
            Age::Second => Some(Age::Third),
            Age::Third => None,
        }
    }

    #[must_use]
    pub const fn group(self) -> CardGroup {
        match self {
            Age::First => CardGroup::FirstAge,
            Age::Second => CardGroup::SecondAge,
            Age::Third => CardGroup::ThirdAge,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Age::First => "Age I",
            Age::Second => "Age II",
            Age::Third => "Age III",
        }
    }
}

/// Building colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    /// Raw materials.
    Brown,
    /// Manufactured goods.
    Gray,
    /// Commercial buildings.
    Gold,
    /// Military buildings.
    Red,
    /// Civilian buildings.
    Blue,
    /// Scientific buildings.
    Green,
    /// Guilds.
    Purple,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    Wood,
    Clay,
    Stone,
    Glass,
    Papyrus,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Wood,
        Resource::Clay,
        Resource::Stone,
        Resource::Glass,
        Resource::Papyrus,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Production of one resource unit chosen from a fixed set, each turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceAlternative {
    WoodClayStone,
    GlassPapyrus,
}

impl ResourceAlternative {
    #[must_use]
    pub const fn covers(self, resource: Resource) -> bool {
        match self {
            ResourceAlternative::WoodClayStone => {
                matches!(resource, Resource::Wood | Resource::Clay | Resource::Stone)
            }
            ResourceAlternative::GlassPapyrus => {
                matches!(resource, Resource::Glass | Resource::Papyrus)
            }
        }
    }
}

/// Multiplier applied to a card's base coin production.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    Absolute,
    PerBrownAndGrayCard,
    PerRedCard,
    PerGoldCard,
    PerBlueCard,
    PerGreenCard,
    PerWonder,
    PerCoin,
}

/// City a production formula is evaluated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CityReference {
    /// The builder's city.
    Own,
    /// The builder's opponent's city.
    Opponent,
    /// Whichever city yields the larger count (guild rule).
    HigherOf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScienceSymbol {
    Globe,
    Wheel,
    Sundial,
    Mortar,
    Compass,
    Quill,
    Law,
}

/// Effect of a progress token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressKind {
    Agriculture,
    Architecture,
    Economy,
    Law,
    Masonry,
    Mathematics,
    Philosophy,
    Strategy,
    Theology,
    Urbanism,
}

/// Wonder effects that need a follow-up choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WonderPower {
    /// Destroy one brown card of the opponent.
    DestroyBrown,
    /// Destroy one gray card of the opponent.
    DestroyGray,
    /// Build one discarded card for free.
    BuildDiscarded,
    /// Choose one of three progress tokens left in the box.
    ChooseBoxedToken,
}

/// Static card definition.
///
/// Built with `const` builders so the whole catalog is constant data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardDefinition {
    pub name: &'static str,
    pub group: CardGroup,
    /// Building colour; `None` for wonders and progress tokens.
    pub color: Option<CardColor>,
    pub coin_cost: u32,
    pub resource_cost: &'static [(Resource, u32)],
    pub production: &'static [(Resource, u32)],
    pub alternative: Option<ResourceAlternative>,
    /// Resources this card lets its owner buy for 1 coin.
    pub trading: &'static [Resource],
    pub coins_produced: u32,
    pub coins_formula: Formula,
    pub coins_reference: CityReference,
    pub military_points: u32,
    pub science_symbol: Option<ScienceSymbol>,
    pub victory_points: u32,
    /// Wonder grants another turn.
    pub replay: bool,
    /// Coins the opponent loses when this wonder is built.
    pub opponent_coin_loss: u32,
    pub wonder_power: Option<WonderPower>,
    pub progress: Option<ProgressKind>,
}

impl CardDefinition {
    const fn base(name: &'static str, group: CardGroup, color: Option<CardColor>) -> Self {
        Self {
            name,
            group,
            color,
            coin_cost: 0,
            resource_cost: &[],
            production: &[],
            alternative: None,
            trading: &[],
            coins_produced: 0,
            coins_formula: Formula::Absolute,
            coins_reference: CityReference::Own,
            military_points: 0,
            science_symbol: None,
            victory_points: 0,
            replay: false,
            opponent_coin_loss: 0,
            wonder_power: None,
            progress: None,
        }
    }

    pub(crate) const fn building(name: &'static str, group: CardGroup, color: CardColor) -> Self {
        Self::base(name, group, Some(color))
    }

    pub(crate) const fn wonder(name: &'static str) -> Self {
        Self::base(name, CardGroup::Wonder, None)
    }

    pub(crate) const fn token(name: &'static str, kind: ProgressKind) -> Self {
        Self {
            progress: Some(kind),
            ..Self::base(name, CardGroup::ProgressToken, None)
        }
    }

    pub(crate) const fn coins(self, coin_cost: u32) -> Self {
        Self { coin_cost, ..self }
    }

    pub(crate) const fn needs(self, resource_cost: &'static [(Resource, u32)]) -> Self {
        Self { resource_cost, ..self }
    }

    pub(crate) const fn produces(self, production: &'static [(Resource, u32)]) -> Self {
        Self { production, ..self }
    }

    pub(crate) const fn produces_one_of(self, alternative: ResourceAlternative) -> Self {
        Self {
            alternative: Some(alternative),
            ..self
        }
    }

    pub(crate) const fn trades(self, trading: &'static [Resource]) -> Self {
        Self { trading, ..self }
    }

    pub(crate) const fn income(self, amount: u32, formula: Formula, reference: CityReference) -> Self {
        Self {
            coins_produced: amount,
            coins_formula: formula,
            coins_reference: reference,
            ..self
        }
    }

    pub(crate) const fn shields(self, military_points: u32) -> Self {
        Self { military_points, ..self }
    }

    pub(crate) const fn science(self, symbol: ScienceSymbol) -> Self {
        Self {
            science_symbol: Some(symbol),
            ..self
        }
    }

    pub(crate) const fn points(self, victory_points: u32) -> Self {
        Self { victory_points, ..self }
    }

    pub(crate) const fn play_again(self) -> Self {
        Self { replay: true, ..self }
    }

    pub(crate) const fn opponent_loses(self, opponent_coin_loss: u32) -> Self {
        Self {
            opponent_coin_loss,
            ..self
        }
    }

    pub(crate) const fn power(self, power: WonderPower) -> Self {
        Self {
            wonder_power: Some(power),
            ..self
        }
    }

    #[must_use]
    pub fn is_color(&self, color: CardColor) -> bool {
        self.color == Some(color)
    }

    /// Units of `resource` needed to build this card.
    #[must_use]
    pub fn cost_of(&self, resource: Resource) -> u32 {
        amount_of(self.resource_cost, resource)
    }

    /// Fixed units of `resource` produced by this card.
    #[must_use]
    pub fn production_of(&self, resource: Resource) -> u32 {
        amount_of(self.production, resource)
    }
}

fn amount_of(table: &[(Resource, u32)], resource: Resource) -> u32 {
    table
        .iter()
        .filter(|(r, _)| *r == resource)
        .map(|(_, n)| n)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_bounds() {
        assert!(CardId::from_raw(0).is_some());
        assert!(CardId::from_raw(catalog::CARDS.len() as u16).is_none());
    }

    #[test]
    fn test_card_id_serde_rejects_unknown() {
        let json = serde_json::to_string(&u16::MAX).unwrap();
        assert!(serde_json::from_str::<CardId>(&json).is_err());

        let id = CardId::from_raw(3).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        assert_eq!(serde_json::from_str::<CardId>(&json).unwrap(), id);
    }

    #[test]
    fn test_builder_fields() {
        const CARD: CardDefinition =
            CardDefinition::building("Test", CardGroup::FirstAge, CardColor::Brown)
                .coins(1)
                .produces(&[(Resource::Wood, 2)])
                .needs(&[(Resource::Clay, 1), (Resource::Clay, 1)]);

        assert!(CARD.is_color(CardColor::Brown));
        assert_eq!(CARD.coin_cost, 1);
        assert_eq!(CARD.production_of(Resource::Wood), 2);
        assert_eq!(CARD.production_of(Resource::Stone), 0);
        assert_eq!(CARD.cost_of(Resource::Clay), 2);
    }

    #[test]
    fn test_age_progression() {
        assert_eq!(Age::First.next(), Some(Age::Second));
        assert_eq!(Age::Second.next(), Some(Age::Third));
        assert_eq!(Age::Third.next(), None);
        assert_eq!(Age::Third.group(), CardGroup::ThirdAge);
    }

    #[test]
    fn test_alternative_coverage() {
        assert!(ResourceAlternative::WoodClayStone.covers(Resource::Clay));
        assert!(!ResourceAlternative::WoodClayStone.covers(Resource::Glass));
        assert!(ResourceAlternative::GlassPapyrus.covers(Resource::Papyrus));
    }
}
