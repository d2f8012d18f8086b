//! Trade offers and the bank/harbor exchange rule.

use crate::board::{Harbor, Resource};
use crate::player::ResourceHand;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default bank trade-in ratio without any harbor
pub const BANK_RATIO: u32 = 4;

/// A proposed exchange: what the offering side gives and what it takes.
/// Pure data; validation against actual hands is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Resources given away
    pub give: ResourceHand,
    /// Resources received
    pub take: ResourceHand,
}

impl Trade {
    /// Create a new trade offer
    pub fn new(give: ResourceHand, take: ResourceHand) -> Self {
        Self { give, take }
    }

    /// A trade must move something in both directions
    pub fn is_valid(&self) -> bool {
        !self.give.is_empty() && !self.take.is_empty()
    }
}

/// How many cards of `giving` trade for one card from the bank: 2 with a
/// harbor specific to that resource, 3 with a generic harbor, 4 otherwise.
/// A specific harbor beats a generic one when both are held.
pub fn exchange_ratio(harbors: &HashSet<Harbor>, giving: Resource) -> u32 {
    if harbors.contains(&Harbor::Specific(giving)) {
        Harbor::Specific(giving).rate()
    } else if harbors.contains(&Harbor::Generic) {
        Harbor::Generic.rate()
    } else {
        BANK_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trade_is_plain_data() {
        let trade = Trade::new(
            ResourceHand::with_amounts(4, 0, 0, 0, 0),
            ResourceHand::single(Resource::Ore, 1),
        );
        assert_eq!(trade.give.brick, 4);
        assert_eq!(trade.take.ore, 1);
        assert!(trade.is_valid());
    }

    #[test]
    fn one_sided_trade_is_invalid() {
        let trade = Trade::new(ResourceHand::new(), ResourceHand::single(Resource::Wool, 1));
        assert!(!trade.is_valid());
    }

    #[test]
    fn ratio_defaults_to_bank_rate() {
        let harbors = HashSet::new();
        assert_eq!(exchange_ratio(&harbors, Resource::Brick), 4);
    }

    #[test]
    fn generic_harbor_gives_three_to_one() {
        let harbors = HashSet::from([Harbor::Generic]);
        assert_eq!(exchange_ratio(&harbors, Resource::Brick), 3);
        assert_eq!(exchange_ratio(&harbors, Resource::Wool), 3);
    }

    #[test]
    fn specific_harbor_gives_two_to_one_for_its_resource_only() {
        let harbors = HashSet::from([Harbor::Specific(Resource::Brick)]);
        assert_eq!(exchange_ratio(&harbors, Resource::Brick), 2);
        assert_eq!(exchange_ratio(&harbors, Resource::Wool), 4);
    }

    #[test]
    fn specific_beats_generic() {
        let harbors = HashSet::from([Harbor::Generic, Harbor::Specific(Resource::Grain)]);
        assert_eq!(exchange_ratio(&harbors, Resource::Grain), 2);
        assert_eq!(exchange_ratio(&harbors, Resource::Lumber), 3);
    }
}
