//! The constant card catalog.
//!
//! Every card of the game in one static table: three ages of buildings,
//! guilds, wonders and progress tokens. [`CardId`]s are indices into
//! [`CARDS`].

use super::definition::CardColor::{Blue, Brown, Gold, Gray, Green, Purple, Red};
use super::definition::CardGroup::{FirstAge, Guild, SecondAge, ThirdAge};
use super::definition::CityReference::{HigherOf, Own};
use super::definition::Formula::{
    Absolute, PerBlueCard, PerBrownAndGrayCard, PerGoldCard, PerGreenCard, PerRedCard, PerWonder,
};
use super::definition::Resource::{Clay, Glass, Papyrus, Stone, Wood};
use super::definition::ResourceAlternative::{GlassPapyrus, WoodClayStone};
use super::definition::ScienceSymbol::{Compass, Globe, Law, Mortar, Quill, Sundial, Wheel};
use super::definition::{CardDefinition, CardGroup, CardId, ProgressKind, WonderPower};

type Def = CardDefinition;

pub(crate) static CARDS: &[CardDefinition] = &[
    // Age I
    Def::building("Lumber Yard", FirstAge, Brown).produces(&[(Wood, 1)]),
    Def::building("Logging Camp", FirstAge, Brown).coins(1).produces(&[(Wood, 1)]),
    Def::building("Clay Pool", FirstAge, Brown).produces(&[(Clay, 1)]),
    Def::building("Clay Pit", FirstAge, Brown).coins(1).produces(&[(Clay, 1)]),
    Def::building("Quarry", FirstAge, Brown).produces(&[(Stone, 1)]),
    Def::building("Stone Pit", FirstAge, Brown).coins(1).produces(&[(Stone, 1)]),
    Def::building("Glassworks", FirstAge, Gray).coins(1).produces(&[(Glass, 1)]),
    Def::building("Press", FirstAge, Gray).coins(1).produces(&[(Papyrus, 1)]),
    Def::building("Guard Tower", FirstAge, Red).shields(1),
    Def::building("Workshop", FirstAge, Green).needs(&[(Papyrus, 1)]).science(Compass).points(1),
    Def::building("Apothecary", FirstAge, Green).needs(&[(Glass, 1)]).science(Wheel).points(1),
    Def::building("Stone Reserve", FirstAge, Gold).coins(3).trades(&[Stone]),
    Def::building("Clay Reserve", FirstAge, Gold).coins(3).trades(&[Clay]),
    Def::building("Wood Reserve", FirstAge, Gold).coins(3).trades(&[Wood]),
    Def::building("Stable", FirstAge, Red).needs(&[(Wood, 1)]).shields(1),
    Def::building("Garrison", FirstAge, Red).needs(&[(Clay, 1)]).shields(1),
    Def::building("Palisade", FirstAge, Red).coins(2).shields(1),
    Def::building("Scriptorium", FirstAge, Green).coins(2).science(Quill),
    Def::building("Pharmacist", FirstAge, Green).coins(2).science(Mortar),
    Def::building("Theater", FirstAge, Blue).points(3),
    Def::building("Altar", FirstAge, Blue).points(3),
    Def::building("Baths", FirstAge, Blue).needs(&[(Stone, 1)]).points(3),
    Def::building("Tavern", FirstAge, Gold).income(4, Absolute, Own),
    // Age II
    Def::building("Sawmill", SecondAge, Brown).coins(2).produces(&[(Wood, 2)]),
    Def::building("Brickyard", SecondAge, Brown).coins(2).produces(&[(Clay, 2)]),
    Def::building("Shelf Quarry", SecondAge, Brown).coins(2).produces(&[(Stone, 2)]),
    Def::building("Glass-Blower", SecondAge, Gray).produces(&[(Glass, 1)]),
    Def::building("Drying Room", SecondAge, Gray).produces(&[(Papyrus, 1)]),
    Def::building("Walls", SecondAge, Red).needs(&[(Stone, 2)]).shields(2),
    Def::building("Forum", SecondAge, Gold).coins(3).needs(&[(Clay, 1)]).produces_one_of(GlassPapyrus),
    Def::building("Caravansery", SecondAge, Gold)
        .coins(2)
        .needs(&[(Glass, 1), (Papyrus, 1)])
        .produces_one_of(WoodClayStone),
    Def::building("Customs House", SecondAge, Gold).coins(4).trades(&[Papyrus, Glass]),
    Def::building("Tribunal", SecondAge, Blue).needs(&[(Wood, 2), (Glass, 1)]).points(5),
    Def::building("Horse Breeders", SecondAge, Red).needs(&[(Clay, 1), (Wood, 1)]).shields(1),
    Def::building("Barracks", SecondAge, Red).coins(3).shields(1),
    Def::building("Archery Range", SecondAge, Red)
        .needs(&[(Stone, 1), (Wood, 1), (Papyrus, 1)])
        .shields(2),
    Def::building("Parade Ground", SecondAge, Red).needs(&[(Clay, 2), (Glass, 1)]).shields(2),
    Def::building("Library", SecondAge, Green)
        .needs(&[(Stone, 1), (Wood, 1), (Glass, 1)])
        .science(Quill)
        .points(2),
    Def::building("Dispensary", SecondAge, Green)
        .needs(&[(Clay, 2), (Stone, 1)])
        .science(Mortar)
        .points(2),
    Def::building("School", SecondAge, Green)
        .needs(&[(Wood, 1), (Papyrus, 2)])
        .science(Wheel)
        .points(1),
    Def::building("Laboratory", SecondAge, Green)
        .needs(&[(Wood, 1), (Glass, 2)])
        .science(Compass)
        .points(1),
    Def::building("Statue", SecondAge, Blue).needs(&[(Clay, 2)]).points(4),
    Def::building("Temple", SecondAge, Blue).needs(&[(Wood, 1), (Papyrus, 1)]).points(4),
    Def::building("Aqueduct", SecondAge, Blue).needs(&[(Stone, 3)]).points(5),
    Def::building("Rostrum", SecondAge, Blue).needs(&[(Stone, 1), (Wood, 1)]).points(4),
    Def::building("Brewery", SecondAge, Gold).income(6, Absolute, Own),
    // Age III
    Def::building("Arsenal", ThirdAge, Red).needs(&[(Clay, 3), (Wood, 2)]).shields(3),
    Def::building("Pretorium", ThirdAge, Red).coins(8).shields(3),
    Def::building("Fortifications", ThirdAge, Red)
        .needs(&[(Stone, 2), (Clay, 1), (Papyrus, 1)])
        .shields(2),
    Def::building("Siege Workshop", ThirdAge, Red).needs(&[(Wood, 3), (Glass, 1)]).shields(2),
    Def::building("Circus", ThirdAge, Red).needs(&[(Clay, 2), (Stone, 2)]).shields(2),
    Def::building("Academy", ThirdAge, Green)
        .needs(&[(Stone, 1), (Wood, 1), (Glass, 2)])
        .science(Sundial)
        .points(3),
    Def::building("Study", ThirdAge, Green)
        .needs(&[(Wood, 2), (Glass, 1), (Papyrus, 1)])
        .science(Sundial)
        .points(3),
    Def::building("University", ThirdAge, Green)
        .needs(&[(Clay, 1), (Glass, 1), (Papyrus, 1)])
        .science(Globe)
        .points(2),
    Def::building("Observatory", ThirdAge, Green)
        .needs(&[(Stone, 1), (Papyrus, 2)])
        .science(Globe)
        .points(2),
    Def::building("Chamber of Commerce", ThirdAge, Gold)
        .needs(&[(Papyrus, 2)])
        .income(2, PerBrownAndGrayCard, Own)
        .points(3),
    Def::building("Port", ThirdAge, Gold)
        .needs(&[(Wood, 1), (Glass, 1), (Papyrus, 1)])
        .income(1, PerBrownAndGrayCard, Own)
        .points(3),
    Def::building("Armory", ThirdAge, Gold)
        .needs(&[(Stone, 2), (Glass, 1)])
        .income(1, PerRedCard, Own)
        .points(3),
    Def::building("Lighthouse", ThirdAge, Gold)
        .needs(&[(Clay, 2), (Glass, 1)])
        .income(1, PerGoldCard, Own)
        .points(3),
    Def::building("Arena", ThirdAge, Gold)
        .needs(&[(Clay, 1), (Stone, 1), (Wood, 1)])
        .income(2, PerWonder, Own)
        .points(3),
    Def::building("Palace", ThirdAge, Blue)
        .needs(&[(Clay, 1), (Stone, 1), (Wood, 1), (Glass, 2)])
        .points(7),
    Def::building("Town Hall", ThirdAge, Blue).needs(&[(Stone, 3), (Wood, 2)]).points(7),
    Def::building("Obelisk", ThirdAge, Blue).needs(&[(Stone, 2), (Glass, 1)]).points(5),
    Def::building("Gardens", ThirdAge, Blue).needs(&[(Clay, 2), (Wood, 2)]).points(6),
    Def::building("Pantheon", ThirdAge, Blue)
        .needs(&[(Clay, 1), (Wood, 1), (Papyrus, 2)])
        .points(6),
    Def::building("Senate", ThirdAge, Blue)
        .needs(&[(Clay, 2), (Stone, 1), (Papyrus, 1)])
        .points(5),
    // Guilds
    Def::building("Merchants Guild", Guild, Purple)
        .needs(&[(Clay, 1), (Wood, 1), (Glass, 1), (Papyrus, 1)])
        .income(1, PerGoldCard, HigherOf)
        .points(2),
    Def::building("Shipowners Guild", Guild, Purple)
        .needs(&[(Clay, 1), (Stone, 1), (Glass, 1), (Papyrus, 1)])
        .income(1, PerBrownAndGrayCard, HigherOf)
        .points(2),
    Def::building("Builders Guild", Guild, Purple)
        .needs(&[(Stone, 2), (Clay, 1), (Wood, 1), (Glass, 1)])
        .points(4),
    Def::building("Magistrates Guild", Guild, Purple)
        .needs(&[(Wood, 2), (Clay, 1), (Papyrus, 1)])
        .income(1, PerBlueCard, HigherOf)
        .points(2),
    Def::building("Scientists Guild", Guild, Purple)
        .needs(&[(Clay, 2), (Wood, 2)])
        .income(1, PerGreenCard, HigherOf)
        .points(2),
    Def::building("Moneylenders Guild", Guild, Purple).needs(&[(Stone, 2), (Wood, 2)]).points(3),
    Def::building("Tacticians Guild", Guild, Purple)
        .needs(&[(Stone, 2), (Clay, 1), (Papyrus, 1)])
        .income(1, PerRedCard, HigherOf)
        .points(2),
    // Wonders
    Def::wonder("The Appian Way")
        .needs(&[(Stone, 2), (Clay, 2), (Papyrus, 1)])
        .income(3, Absolute, Own)
        .opponent_loses(3)
        .play_again()
        .points(3),
    Def::wonder("Circus Maximus")
        .needs(&[(Stone, 2), (Wood, 1), (Glass, 1)])
        .power(WonderPower::DestroyGray)
        .shields(1)
        .points(3),
    Def::wonder("The Colossus").needs(&[(Clay, 3), (Glass, 1)]).shields(2).points(3),
    Def::wonder("The Great Library")
        .needs(&[(Wood, 3), (Glass, 1), (Papyrus, 1)])
        .power(WonderPower::ChooseBoxedToken)
        .points(4),
    Def::wonder("The Great Lighthouse")
        .needs(&[(Wood, 1), (Stone, 1), (Papyrus, 2)])
        .produces_one_of(WoodClayStone)
        .points(4),
    Def::wonder("The Hanging Gardens")
        .needs(&[(Wood, 2), (Glass, 1), (Papyrus, 1)])
        .income(6, Absolute, Own)
        .play_again()
        .points(3),
    Def::wonder("The Mausoleum")
        .needs(&[(Clay, 2), (Glass, 2), (Papyrus, 1)])
        .power(WonderPower::BuildDiscarded)
        .points(2),
    Def::wonder("Piraeus")
        .needs(&[(Wood, 2), (Stone, 1), (Clay, 1)])
        .produces_one_of(GlassPapyrus)
        .play_again()
        .points(2),
    Def::wonder("The Pyramids").needs(&[(Stone, 3), (Papyrus, 1)]).points(9),
    Def::wonder("The Sphinx")
        .needs(&[(Stone, 1), (Clay, 1), (Glass, 2)])
        .play_again()
        .points(6),
    Def::wonder("The Statue of Zeus")
        .needs(&[(Stone, 1), (Wood, 1), (Clay, 1), (Papyrus, 2)])
        .power(WonderPower::DestroyBrown)
        .shields(1)
        .points(3),
    Def::wonder("The Temple of Artemis")
        .needs(&[(Wood, 1), (Stone, 1), (Glass, 1), (Papyrus, 1)])
        .income(12, Absolute, Own)
        .play_again(),
    // Progress tokens
    Def::token("Agriculture", ProgressKind::Agriculture).income(6, Absolute, Own).points(4),
    Def::token("Architecture", ProgressKind::Architecture),
    Def::token("Economy", ProgressKind::Economy),
    Def::token("Law", ProgressKind::Law).science(Law),
    Def::token("Masonry", ProgressKind::Masonry),
    Def::token("Mathematics", ProgressKind::Mathematics),
    Def::token("Philosophy", ProgressKind::Philosophy).points(7),
    Def::token("Strategy", ProgressKind::Strategy),
    Def::token("Theology", ProgressKind::Theology),
    Def::token("Urbanism", ProgressKind::Urbanism).income(6, Absolute, Own),
];

/// Every card id in catalog order.
pub fn all() -> impl Iterator<Item = CardId> {
    (0..CARDS.len()).map(CardId::from_index)
}

/// Card ids of one group, in catalog order.
pub fn cards_in(group: CardGroup) -> impl Iterator<Item = CardId> {
    all().filter(move |id| id.definition().group == group)
}

/// Look a card up by its exact name.
#[must_use]
pub fn find(name: &str) -> Option<CardId> {
    all().find(|id| id.definition().name == name)
}
