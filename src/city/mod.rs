//! Per-player city state and its economy.
//!
//! - `City`: coins, built cards, wonders and progress tokens, with derived tallies
//! - `trading`: bank prices for resources a city does not produce

pub mod holdings;
pub mod trading;

pub use holdings::City;
pub use trading::{trading_cost, unit_price};
