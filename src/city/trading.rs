//! Resource trading with the bank.
//!
//! A card's resource cost is first covered by the builder's fixed
//! production. Every missing unit is bought from the bank at a price set by
//! the opponent: 2 coins plus the opponent's brown and gray production of
//! that resource, or a flat 1 coin with a trading agreement. One-of-several
//! producers and cost-reduction tokens then waive the most expensive units.

use smallvec::SmallVec;

use super::holdings::City;
use crate::cards::{CardDefinition, Resource};

/// Bank price of one unit of `resource` for `buyer`.
#[must_use]
pub fn unit_price(buyer: &City, opponent: &City, resource: Resource) -> u32 {
    if buyer.has_trading_agreement(resource) {
        1
    } else {
        2 + opponent.raw_production_of(resource)
    }
}

/// Coins `buyer` must spend at the bank to cover `card`'s resource cost.
///
/// `waived_units` of the most expensive remaining units are free (the
/// cost-reduction progress tokens).
#[must_use]
pub fn trading_cost(buyer: &City, opponent: &City, card: &CardDefinition, waived_units: usize) -> u32 {
    let mut missing: SmallVec<[(Resource, u32); 8]> = SmallVec::new();
    for resource in Resource::ALL {
        let short = card
            .cost_of(resource)
            .saturating_sub(buyer.production_of(resource));
        let price = unit_price(buyer, opponent, resource);
        missing.extend(std::iter::repeat((resource, price)).take(short as usize));
    }
    // Most expensive first, so every waiver below removes the priciest unit.
    missing.sort_by(|a, b| b.1.cmp(&a.1));

    for alternative in buyer.alternatives() {
        if let Some(index) = missing.iter().position(|&(r, _)| alternative.covers(r)) {
            missing.remove(index);
        }
    }
    missing.into_iter().skip(waived_units).map(|(_, price)| price).sum()
}
