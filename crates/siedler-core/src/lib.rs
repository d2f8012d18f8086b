//! Siedler - an island settlement board game engine
//!
//! This crate provides the core game model, including:
//! - The fixed 19-tile / 54-corner / 72-road board graph
//! - Semi-random board generation (terrain shuffle, spiral number tokens)
//! - Placement mutators that enforce the building rules
//! - The longest-road calculation
//! - Player state, development cards, and trade arithmetic
//!
//! # Architecture
//!
//! The board is an arena: tiles, corners, and roads live in flat arrays
//! addressed by small integer locations, with the adjacency graph baked in
//! at construction. Accessors return owned copies, so consumers (a GUI, a
//! server) can read freely while all writes funnel through the validated
//! mutators. Everything random takes an injectable RNG for reproducible
//! games and tests.
//!
//! Turn sequencing, dice, rendering, and networking live outside this
//! crate; they drive the model through the operations exposed here.
//!
//! # Modules
//!
//! - [`topology`]: the fixed board graph and layout tables
//! - [`board`]: tiles, corners, roads, harbors, and the board itself
//! - [`player`]: per-player resources, tokens, and victory points
//! - [`cards`]: the development-card catalog and deck
//! - [`trade`]: trade offers and the bank/harbor exchange rule

pub mod board;
pub mod cards;
pub mod player;
pub mod topology;
pub mod trade;

// Re-export commonly used types
pub use board::{
    Board, BoardError, Corner, Harbor, NumberToken, Resource, Road, Settlement, Terrain, Tile,
    UnknownResource, UnknownTerrain,
};
pub use cards::{DevelopmentCard, UnknownCardTitle, VICTORY_POINT_DESCRIPTION};
pub use player::{Player, PlayerColor, ResourceHand};
pub use topology::{CornerLoc, RoadLoc, TileLoc, CORNER_COUNT, ROAD_COUNT, TILE_COUNT};
pub use trade::{exchange_ratio, Trade, BANK_RATIO};
