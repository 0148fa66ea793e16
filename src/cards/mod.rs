//! Card system: static definitions, the constant catalog and decks.
//!
//! ## Key Types
//!
//! - `CardId`: compact index into the catalog
//! - `CardDefinition`: static card data (cost, production, effects)
//! - `Deck`: persistent bag of cards with uniform random draw
//!
//! Game state stores only `CardId`s. Everything a rule needs to know about
//! a card is read from its definition.

pub mod catalog;
pub mod definition;
pub mod deck;

pub use definition::{
    Age, CardColor, CardDefinition, CardGroup, CardId, CityReference, Formula, ProgressKind,
    Resource, ResourceAlternative, ScienceSymbol, WonderPower,
};
pub use deck::Deck;
