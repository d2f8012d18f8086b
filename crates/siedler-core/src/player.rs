//! Player state and resource management.
//!
//! This module contains:
//! - Player colors
//! - ResourceHand for managing resource counts
//! - Building costs
//! - Player struct with resources, development cards, tokens, and
//!   victory-point bookkeeping
//!
//! Victory points are maintained incrementally: every mutator that changes
//! a scoring count adjusts the total in the same call, so the stored value
//! always equals settlements + city upgrades + victory-point cards + 2 per
//! held bonus.

use crate::board::{Harbor, Resource};
use crate::cards::DevelopmentCard;
use crate::topology::{CornerLoc, RoadLoc};
use crate::trade;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Number of settlement tokens each player starts with
pub const SETTLEMENT_TOKENS: u32 = 5;

/// Number of city tokens each player starts with
pub const CITY_TOKENS: u32 = 4;

/// Number of road tokens each player starts with
pub const ROAD_TOKENS: u32 = 15;

/// Player colors, doubling as ownership tags on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Orange,
    White,
}

impl PlayerColor {
    /// All player colors
    pub const ALL: [PlayerColor; 4] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Orange,
        PlayerColor::White,
    ];
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerColor::Red => "Red",
            PlayerColor::Blue => "Blue",
            PlayerColor::Orange => "Orange",
            PlayerColor::White => "White",
        };
        write!(f, "{name}")
    }
}

/// A hand of resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceHand {
    pub brick: u32,
    pub lumber: u32,
    pub ore: u32,
    pub grain: u32,
    pub wool: u32,
}

impl ResourceHand {
    /// Create an empty hand
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand with specific amounts
    pub fn with_amounts(brick: u32, lumber: u32, ore: u32, grain: u32, wool: u32) -> Self {
        Self {
            brick,
            lumber,
            ore,
            grain,
            wool,
        }
    }

    /// Create a hand with a single resource
    pub fn single(resource: Resource, amount: u32) -> Self {
        let mut hand = Self::new();
        hand.add(resource, amount);
        hand
    }

    /// Total number of resource cards
    pub fn total(&self) -> u32 {
        self.brick + self.lumber + self.ore + self.grain + self.wool
    }

    /// Check if hand is empty
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Get count of a specific resource
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Brick => self.brick,
            Resource::Lumber => self.lumber,
            Resource::Ore => self.ore,
            Resource::Grain => self.grain,
            Resource::Wool => self.wool,
        }
    }

    /// Add resources to hand
    pub fn add(&mut self, resource: Resource, amount: u32) {
        match resource {
            Resource::Brick => self.brick += amount,
            Resource::Lumber => self.lumber += amount,
            Resource::Ore => self.ore += amount,
            Resource::Grain => self.grain += amount,
            Resource::Wool => self.wool += amount,
        }
    }

    /// Remove resources from hand. Callers must not remove more than held.
    pub fn remove(&mut self, resource: Resource, amount: u32) {
        debug_assert!(self.get(resource) >= amount, "removing more than held");
        match resource {
            Resource::Brick => self.brick -= amount,
            Resource::Lumber => self.lumber -= amount,
            Resource::Ore => self.ore -= amount,
            Resource::Grain => self.grain -= amount,
            Resource::Wool => self.wool -= amount,
        }
    }

    /// Check if this hand covers a cost
    pub fn can_afford(&self, cost: &ResourceHand) -> bool {
        self.brick >= cost.brick
            && self.lumber >= cost.lumber
            && self.ore >= cost.ore
            && self.grain >= cost.grain
            && self.wool >= cost.wool
    }
}

/// Building costs
pub mod costs {
    use super::ResourceHand;

    /// Cost to build a road: 1 brick, 1 lumber
    pub fn road() -> ResourceHand {
        ResourceHand::with_amounts(1, 1, 0, 0, 0)
    }

    /// Cost to build a settlement: 1 brick, 1 lumber, 1 grain, 1 wool
    pub fn settlement() -> ResourceHand {
        ResourceHand::with_amounts(1, 1, 0, 1, 1)
    }

    /// Cost to upgrade to a city: 3 ore, 2 grain
    pub fn city() -> ResourceHand {
        ResourceHand::with_amounts(0, 0, 3, 2, 0)
    }

    /// Cost to buy a development card: 1 ore, 1 grain, 1 wool
    pub fn development_card() -> ResourceHand {
        ResourceHand::with_amounts(0, 0, 1, 1, 1)
    }
}

/// A single player's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    color: PlayerColor,
    name: String,
    resources: ResourceHand,
    /// Cached sum of all resource counts
    resource_total: u32,
    dev_cards: Vec<DevelopmentCard>,
    /// Corners where this player has built (settlements and cities)
    settlements: Vec<CornerLoc>,
    /// Roads this player has built
    roads: Vec<RoadLoc>,
    harbors: HashSet<Harbor>,
    settlements_remaining: u32,
    cities_remaining: u32,
    roads_remaining: u32,
    victory_points: u32,
    longest_road_length: u32,
    knights_played: u32,
    has_longest_road: bool,
    has_largest_army: bool,
}

impl Player {
    /// Create a new player with a full set of building tokens
    pub fn new(color: PlayerColor, name: impl Into<String>) -> Self {
        Self {
            color,
            name: name.into(),
            resources: ResourceHand::new(),
            resource_total: 0,
            dev_cards: Vec::new(),
            settlements: Vec::new(),
            roads: Vec::new(),
            harbors: HashSet::new(),
            settlements_remaining: SETTLEMENT_TOKENS,
            cities_remaining: CITY_TOKENS,
            roads_remaining: ROAD_TOKENS,
            victory_points: 0,
            longest_road_length: 0,
            knights_played: 0,
            has_longest_road: false,
            has_largest_army: false,
        }
    }

    // ==================== Accessors ====================

    pub fn color(&self) -> PlayerColor {
        self.color
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Count of one resource kind
    pub fn num_resource_cards(&self, resource: Resource) -> u32 {
        self.resources.get(resource)
    }

    /// Total resource cards held (cached)
    pub fn sum_resource_cards(&self) -> u32 {
        self.resource_total
    }

    /// Copy of the development-card hand
    pub fn dev_cards(&self) -> Vec<DevelopmentCard> {
        self.dev_cards.clone()
    }

    /// Copy of the corners this player has built on
    pub fn settlement_locs(&self) -> Vec<CornerLoc> {
        self.settlements.clone()
    }

    /// Copy of the roads this player has built
    pub fn road_locs(&self) -> Vec<RoadLoc> {
        self.roads.clone()
    }

    /// Copy of the harbor kinds this player can trade through
    pub fn harbors(&self) -> HashSet<Harbor> {
        self.harbors.clone()
    }

    pub fn has_harbor(&self, harbor: Harbor) -> bool {
        self.harbors.contains(&harbor)
    }

    pub fn settlements_remaining(&self) -> u32 {
        self.settlements_remaining
    }

    pub fn cities_remaining(&self) -> u32 {
        self.cities_remaining
    }

    pub fn roads_remaining(&self) -> u32 {
        self.roads_remaining
    }

    pub fn victory_points(&self) -> u32 {
        self.victory_points
    }

    pub fn longest_road_length(&self) -> u32 {
        self.longest_road_length
    }

    pub fn knights_played(&self) -> u32 {
        self.knights_played
    }

    pub fn has_longest_road(&self) -> bool {
        self.has_longest_road
    }

    pub fn has_largest_army(&self) -> bool {
        self.has_largest_army
    }

    /// Bank/harbor trade-in ratio for discarding a resource
    pub fn exchange_rate(&self, resource: Resource) -> u32 {
        trade::exchange_ratio(&self.harbors, resource)
    }

    // ==================== Resources ====================

    /// Receive resources of one kind
    pub fn give_resource(&mut self, resource: Resource, amount: u32) {
        self.resources.add(resource, amount);
        self.resource_total += amount;
    }

    /// Receive a whole hand of resources at once
    pub fn give_hand(&mut self, hand: &ResourceHand) {
        for resource in Resource::ALL {
            self.give_resource(resource, hand.get(resource));
        }
    }

    /// Spend resources of one kind. Callers must not take more than held.
    pub fn take_resource(&mut self, resource: Resource, amount: u32) {
        self.resources.remove(resource, amount);
        self.resource_total -= amount;
    }

    // ==================== Development Cards ====================

    /// Add a card to the hand. Victory-point cards score immediately; they
    /// are never played.
    pub fn give_dev_card(&mut self, card: DevelopmentCard) {
        if card.is_victory_point() {
            self.victory_points += 1;
        }
        self.dev_cards.push(card);
    }

    /// Remove the first card with this title from the hand. A Knight raises
    /// the played-knight count. Returns whether a match was found.
    pub fn play_dev_card(&mut self, title: DevelopmentCard) -> bool {
        let Some(pos) = self.dev_cards.iter().position(|c| *c == title) else {
            return false;
        };
        self.dev_cards.remove(pos);
        if title == DevelopmentCard::Knight {
            self.knights_played += 1;
        }
        true
    }

    // ==================== Building ====================

    /// Record a settlement at a corner: one token down, one victory point up
    pub fn add_settlement(&mut self, loc: CornerLoc) {
        debug_assert!(self.settlements_remaining > 0, "no settlement tokens left");
        self.settlements_remaining -= 1;
        self.settlements.push(loc);
        self.victory_points += 1;
    }

    /// Record a city upgrade: the settlement token returns to the pool, a
    /// city token goes down, and the extra victory point is scored
    pub fn upgrade_settlement(&mut self) {
        debug_assert!(self.cities_remaining > 0, "no city tokens left");
        self.cities_remaining -= 1;
        self.settlements_remaining += 1;
        self.victory_points += 1;
    }

    /// Record a road at an edge
    pub fn add_road(&mut self, loc: RoadLoc) {
        debug_assert!(self.roads_remaining > 0, "no road tokens left");
        self.roads_remaining -= 1;
        self.roads.push(loc);
    }

    // ==================== Bonuses & Harbors ====================

    /// Cache the board's longest-road length for this player
    pub fn set_longest_road_length(&mut self, length: u32) {
        self.longest_road_length = length;
    }

    /// Grant or revoke the Longest Road bonus. Only a transition changes
    /// the score; repeating the current value is a no-op.
    pub fn set_longest_road_status(&mut self, held: bool) {
        if held != self.has_longest_road {
            if held {
                self.victory_points += 2;
            } else {
                self.victory_points -= 2;
            }
            self.has_longest_road = held;
        }
    }

    /// Grant or revoke the Largest Army bonus; transition-only like
    /// [`Self::set_longest_road_status`]
    pub fn set_largest_army_status(&mut self, held: bool) {
        if held != self.has_largest_army {
            if held {
                self.victory_points += 2;
            } else {
                self.victory_points -= 2;
            }
            self.has_largest_army = held;
        }
    }

    /// Register harbor access. Set semantics: adding a held kind changes
    /// nothing.
    pub fn add_harbor(&mut self, harbor: Harbor) {
        self.harbors.insert(harbor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resource_hand_totals() {
        let hand = ResourceHand::with_amounts(1, 2, 3, 4, 5);
        assert_eq!(hand.total(), 15);
        assert_eq!(hand.get(Resource::Ore), 3);
        assert!(!hand.is_empty());
    }

    #[test]
    fn resource_hand_can_afford() {
        let hand = ResourceHand::with_amounts(2, 2, 2, 2, 2);
        assert!(hand.can_afford(&costs::settlement()));
        assert!(!hand.can_afford(&costs::city()));
    }

    #[test]
    fn building_costs_total() {
        assert_eq!(costs::road().total(), 2);
        assert_eq!(costs::settlement().total(), 4);
        assert_eq!(costs::city().total(), 5);
        assert_eq!(costs::development_card().total(), 3);
    }

    #[test]
    fn give_resource_updates_count_and_cached_sum() {
        let mut player = Player::new(PlayerColor::Red, "Ada");
        let sum = player.sum_resource_cards();
        player.give_resource(Resource::Brick, 3);
        assert_eq!(player.num_resource_cards(Resource::Brick), 3);
        assert_eq!(player.sum_resource_cards(), sum + 3);

        player.take_resource(Resource::Brick, 2);
        assert_eq!(player.num_resource_cards(Resource::Brick), 1);
        assert_eq!(player.sum_resource_cards(), sum + 1);
    }

    #[test]
    fn give_hand_adds_every_kind() {
        let mut player = Player::new(PlayerColor::Red, "Ada");
        player.give_hand(&ResourceHand::with_amounts(1, 0, 2, 0, 1));
        assert_eq!(player.sum_resource_cards(), 4);
        assert_eq!(player.num_resource_cards(Resource::Ore), 2);
    }

    #[test]
    fn victory_point_card_scores_on_receipt() {
        let mut player = Player::new(PlayerColor::Blue, "Bea");
        player.give_dev_card(DevelopmentCard::Knight);
        assert_eq!(player.victory_points(), 0);
        player.give_dev_card(DevelopmentCard::Library);
        assert_eq!(player.victory_points(), 1);
        assert_eq!(player.dev_cards().len(), 2);
    }

    #[test]
    fn play_dev_card_removes_first_match_and_counts_knights() {
        let mut player = Player::new(PlayerColor::Blue, "Bea");
        player.give_dev_card(DevelopmentCard::Knight);
        player.give_dev_card(DevelopmentCard::Knight);
        player.give_dev_card(DevelopmentCard::Monopoly);

        assert!(player.play_dev_card(DevelopmentCard::Knight));
        assert_eq!(player.knights_played(), 1);
        assert_eq!(player.dev_cards().len(), 2);

        assert!(player.play_dev_card(DevelopmentCard::Monopoly));
        assert_eq!(player.knights_played(), 1);

        assert!(!player.play_dev_card(DevelopmentCard::Monopoly));
        assert_eq!(player.dev_cards().len(), 1);
    }

    #[test]
    fn settlement_and_city_bookkeeping() {
        let mut player = Player::new(PlayerColor::Orange, "Cy");
        player.add_settlement(12);
        assert_eq!(player.victory_points(), 1);
        assert_eq!(player.settlements_remaining(), SETTLEMENT_TOKENS - 1);
        assert_eq!(player.settlement_locs(), vec![12]);

        player.upgrade_settlement();
        assert_eq!(player.victory_points(), 2);
        assert_eq!(player.settlements_remaining(), SETTLEMENT_TOKENS);
        assert_eq!(player.cities_remaining(), CITY_TOKENS - 1);
    }

    #[test]
    fn road_bookkeeping() {
        let mut player = Player::new(PlayerColor::Orange, "Cy");
        player.add_road(6);
        player.add_road(10);
        assert_eq!(player.roads_remaining(), ROAD_TOKENS - 2);
        assert_eq!(player.road_locs(), vec![6, 10]);
        assert_eq!(player.victory_points(), 0);
    }

    #[test]
    fn bonus_status_is_transition_only() {
        let mut player = Player::new(PlayerColor::White, "Dot");
        player.set_longest_road_status(true);
        player.set_longest_road_status(true);
        assert_eq!(player.victory_points(), 2);

        player.set_largest_army_status(true);
        assert_eq!(player.victory_points(), 4);

        player.set_longest_road_status(false);
        player.set_longest_road_status(false);
        assert_eq!(player.victory_points(), 2);
        assert!(!player.has_longest_road());
        assert!(player.has_largest_army());
    }

    #[test]
    fn harbors_are_a_set() {
        let mut player = Player::new(PlayerColor::White, "Dot");
        player.add_harbor(Harbor::Generic);
        player.add_harbor(Harbor::Generic);
        player.add_harbor(Harbor::Specific(Resource::Wool));
        assert_eq!(player.harbors().len(), 2);
        assert!(player.has_harbor(Harbor::Generic));
        assert!(!player.has_harbor(Harbor::Specific(Resource::Brick)));
    }

    #[test]
    fn longest_road_length_is_cached() {
        let mut player = Player::new(PlayerColor::Red, "Ada");
        player.set_longest_road_length(7);
        assert_eq!(player.longest_road_length(), 7);
        assert_eq!(player.victory_points(), 0);
    }
}
