//! Game board representation: tiles, corners, roads, and harbors.
//!
//! This module contains:
//! - Resource and terrain types
//! - The tile/corner/road arena indexed by location
//! - The generative layout (terrain shuffle + spiral number-token placement)
//! - Placement mutators with rule enforcement
//! - The longest-road calculation
//!
//! The board owns all location state. Accessors hand out independent copies
//! so a rendering layer can never alias into the arena; all mutation goes
//! through the validated mutators.

use crate::player::{PlayerColor, ResourceHand};
use crate::topology::{
    CornerLoc, RoadLoc, TileLoc, CENTER_TILE, CORNER_CORNERS, CORNER_COUNT, CORNER_ROADS,
    CORNER_TILES, HARBORS, INNER_OFFSETS, INNER_RING, OUTER_OFFSETS, OUTER_RING, ROAD_COUNT,
    ROAD_ENDPOINTS, ROAD_ROADS, TOKEN_VALUES,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Resource types produced by terrain tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Brick,
    Lumber,
    Ore,
    Grain,
    Wool,
}

impl Resource {
    /// All resource types
    pub const ALL: [Resource; 5] = [
        Resource::Brick,
        Resource::Lumber,
        Resource::Ore,
        Resource::Grain,
        Resource::Wool,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Brick => "Brick",
            Resource::Lumber => "Lumber",
            Resource::Ore => "Ore",
            Resource::Grain => "Grain",
            Resource::Wool => "Wool",
        }
    }
}

/// Error for an unrecognized resource name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource kind: {0}")]
pub struct UnknownResource(pub String);

impl FromStr for Resource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownResource(s.to_string()))
    }
}

/// Terrain kinds for the 19 tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Hills,
    Fields,
    Forest,
    Mountains,
    Pasture,
    Desert,
}

impl Terrain {
    /// All terrain kinds
    pub const ALL: [Terrain; 6] = [
        Terrain::Hills,
        Terrain::Fields,
        Terrain::Forest,
        Terrain::Mountains,
        Terrain::Pasture,
        Terrain::Desert,
    ];

    /// The resource this terrain produces, if any
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Terrain::Hills => Some(Resource::Brick),
            Terrain::Fields => Some(Resource::Grain),
            Terrain::Forest => Some(Resource::Lumber),
            Terrain::Mountains => Some(Resource::Ore),
            Terrain::Pasture => Some(Resource::Wool),
            Terrain::Desert => None,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Terrain::Hills => "Hills",
            Terrain::Fields => "Fields",
            Terrain::Forest => "Forest",
            Terrain::Mountains => "Mountains",
            Terrain::Pasture => "Pasture",
            Terrain::Desert => "Desert",
        }
    }
}

/// Error for an unrecognized terrain name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown terrain kind: {0}")]
pub struct UnknownTerrain(pub String);

impl FromStr for Terrain {
    type Err = UnknownTerrain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Terrain::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTerrain(s.to_string()))
    }
}

/// Harbor kinds for maritime trading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Harbor {
    /// 3:1 trade any resource
    Generic,
    /// 2:1 trade for a specific resource
    Specific(Resource),
}

impl Harbor {
    /// The exchange rate for this harbor
    pub fn rate(&self) -> u32 {
        match self {
            Harbor::Generic => 3,
            Harbor::Specific(_) => 2,
        }
    }
}

/// A number token: dice value (2-12, never 7) plus its identifying letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberToken {
    /// Dice value that activates the tile
    pub value: u8,
    /// Letter A-R identifying the token in the placement sequence
    pub letter: char,
}

/// A single terrain tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// What the tile produces
    pub terrain: Terrain,
    /// Number token, None on the desert
    pub number_token: Option<NumberToken>,
    /// Whether the robber currently occupies this tile
    pub has_robber: bool,
    /// Corners touching this tile that currently hold a settlement or city
    pub touching_settlements: Vec<CornerLoc>,
}

/// A settlement or city occupying a corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Owning player
    pub color: PlayerColor,
    /// True once upgraded to a city
    pub is_city: bool,
}

/// A corner of the board (settlement location)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corner {
    /// Settlement or city on this corner, if any
    pub settlement: Option<Settlement>,
    /// Harbor granted by building here, if any
    pub harbor: Option<Harbor>,
    /// Corners one road away
    pub adjacent_corners: Vec<CornerLoc>,
    /// Tiles touching this corner
    pub adjacent_tiles: Vec<TileLoc>,
    /// Roads incident to this corner
    pub adjacent_roads: Vec<RoadLoc>,
}

/// An edge of the board (road location)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    /// Owning player, None while unoccupied
    pub owner: Option<PlayerColor>,
    /// The two corners this road connects
    pub endpoints: [CornerLoc; 2],
    /// Roads sharing a corner with this one
    pub adjacent_roads: Vec<RoadLoc>,
}

/// Errors raised by board lookups and mutators
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("tile location {0} out of range")]
    TileOutOfRange(usize),

    #[error("corner location {0} out of range")]
    CornerOutOfRange(usize),

    #[error("road location {0} out of range")]
    RoadOutOfRange(usize),

    #[error("corner {0} already holds a settlement")]
    CornerOccupied(CornerLoc),

    #[error("corner {0} is adjacent to an existing settlement")]
    DistanceRuleViolated(CornerLoc),

    #[error("corner {0} has no settlement to upgrade")]
    NoSettlement(CornerLoc),

    #[error("settlement at corner {0} is already a city")]
    AlreadyCity(CornerLoc),

    #[error("road {0} already has an owner")]
    RoadOccupied(RoadLoc),

    #[error("robber is already on tile {0}")]
    RobberUnmoved(TileLoc),
}

/// The complete game board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Terrain tiles indexed by location
    tiles: Vec<Tile>,
    /// Corners indexed by location
    corners: Vec<Corner>,
    /// Roads indexed by location
    roads: Vec<Road>,
    /// Dice value -> tiles bearing that number token
    number_index: HashMap<u8, Vec<TileLoc>>,
    /// Current robber location
    robber: TileLoc,
}

impl Board {
    /// Generate a board with the standard layout rules and ambient randomness
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        Self::new_with_rng(&mut rng)
    }

    /// Generate a board with a provided RNG, for deterministic layouts
    pub fn new_with_rng<R: Rng>(rng: &mut R) -> Self {
        // Standard terrain distribution: 3 Hills, 4 Fields, 4 Forest,
        // 3 Mountains, 4 Pasture, 1 Desert.
        let mut terrains: Vec<Terrain> = vec![
            Terrain::Hills,
            Terrain::Hills,
            Terrain::Hills,
            Terrain::Fields,
            Terrain::Fields,
            Terrain::Fields,
            Terrain::Fields,
            Terrain::Forest,
            Terrain::Forest,
            Terrain::Forest,
            Terrain::Forest,
            Terrain::Mountains,
            Terrain::Mountains,
            Terrain::Mountains,
            Terrain::Pasture,
            Terrain::Pasture,
            Terrain::Pasture,
            Terrain::Pasture,
            Terrain::Desert,
        ];
        terrains.shuffle(rng);

        let mut tiles: Vec<Tile> = terrains
            .into_iter()
            .map(|terrain| Tile {
                terrain,
                number_token: None,
                has_robber: false,
                touching_settlements: Vec::new(),
            })
            .collect();

        // The desert never takes a token; it starts with the robber instead.
        let desert = tiles
            .iter()
            .position(|t| t.terrain == Terrain::Desert)
            .expect("terrain pool contains one desert");
        tiles[desert].has_robber = true;

        // Tokens follow the fixed sequence along the outer ring, then the
        // inner ring, then the center, rotated by one of four symmetric
        // offsets so both rings turn together.
        let rotation = rng.gen_range(0..OUTER_OFFSETS.len());
        let outer = OUTER_RING
            .iter()
            .cycle()
            .skip(OUTER_OFFSETS[rotation])
            .take(OUTER_RING.len());
        let inner = INNER_RING
            .iter()
            .cycle()
            .skip(INNER_OFFSETS[rotation])
            .take(INNER_RING.len());

        let mut number_index: HashMap<u8, Vec<TileLoc>> = HashMap::new();
        let mut sequence = TOKEN_VALUES.iter().enumerate();
        for &loc in outer.chain(inner).chain([&CENTER_TILE]) {
            if loc == desert {
                continue;
            }
            let (i, &value) = sequence.next().expect("18 tokens for 18 non-desert tiles");
            tiles[loc].number_token = Some(NumberToken {
                value,
                letter: (b'A' + i as u8) as char,
            });
            number_index.entry(value).or_default().push(loc);
        }
        debug_assert!(sequence.next().is_none());

        let mut corners: Vec<Corner> = (0..CORNER_COUNT)
            .map(|loc| Corner {
                settlement: None,
                harbor: None,
                adjacent_corners: CORNER_CORNERS[loc].to_vec(),
                adjacent_tiles: CORNER_TILES[loc].to_vec(),
                adjacent_roads: CORNER_ROADS[loc].to_vec(),
            })
            .collect();
        for &(a, b, harbor) in &HARBORS {
            corners[a].harbor = Some(harbor);
            corners[b].harbor = Some(harbor);
        }

        let roads: Vec<Road> = (0..ROAD_COUNT)
            .map(|loc| Road {
                owner: None,
                endpoints: ROAD_ENDPOINTS[loc],
                adjacent_roads: ROAD_ROADS[loc].to_vec(),
            })
            .collect();

        debug!(desert, rotation, "generated standard board layout");

        Self {
            tiles,
            corners,
            roads,
            number_index,
            robber: desert,
        }
    }

    // ==================== Query Methods ====================

    /// Get a copy of the tile at a location
    pub fn get_tile(&self, loc: TileLoc) -> Result<Tile, BoardError> {
        self.tiles
            .get(loc)
            .cloned()
            .ok_or(BoardError::TileOutOfRange(loc))
    }

    /// Get a copy of the corner at a location
    pub fn get_corner(&self, loc: CornerLoc) -> Result<Corner, BoardError> {
        self.corners
            .get(loc)
            .cloned()
            .ok_or(BoardError::CornerOutOfRange(loc))
    }

    /// Get a copy of the road at a location
    pub fn get_road(&self, loc: RoadLoc) -> Result<Road, BoardError> {
        self.roads
            .get(loc)
            .cloned()
            .ok_or(BoardError::RoadOutOfRange(loc))
    }

    /// Copies of the tiles bearing a number token for this dice value.
    /// Empty for values with no token (including 7).
    pub fn number_token_tiles(&self, value: u8) -> Vec<Tile> {
        self.number_index
            .get(&value)
            .map(|locs| locs.iter().map(|&loc| self.tiles[loc].clone()).collect())
            .unwrap_or_default()
    }

    /// The tile the robber currently occupies
    pub fn robber_loc(&self) -> TileLoc {
        self.robber
    }

    /// Whether a settlement at this corner would satisfy the distance rule
    /// (no settlement on any adjacent corner)
    pub fn satisfies_distance_rule(&self, loc: CornerLoc) -> Result<bool, BoardError> {
        let corner = self.corners.get(loc).ok_or(BoardError::CornerOutOfRange(loc))?;
        Ok(corner
            .adjacent_corners
            .iter()
            .all(|&adj| self.corners[adj].settlement.is_none()))
    }

    /// Colors with a settlement or city touching this tile, deduplicated.
    /// Used to pick robber-steal victims.
    pub fn colors_touching_tile(&self, loc: TileLoc) -> Result<Vec<PlayerColor>, BoardError> {
        let tile = self.tiles.get(loc).ok_or(BoardError::TileOutOfRange(loc))?;
        let mut colors = Vec::new();
        for &corner in &tile.touching_settlements {
            if let Some(settlement) = self.corners[corner].settlement {
                if !colors.contains(&settlement.color) {
                    colors.push(settlement.color);
                }
            }
        }
        Ok(colors)
    }

    /// Resources produced by a dice roll, per color. Robbed tiles produce
    /// nothing; cities produce double.
    pub fn resources_for_roll(&self, roll: u8) -> HashMap<PlayerColor, ResourceHand> {
        let mut payout: HashMap<PlayerColor, ResourceHand> = HashMap::new();
        let Some(locs) = self.number_index.get(&roll) else {
            return payout;
        };
        for &loc in locs {
            let tile = &self.tiles[loc];
            if tile.has_robber {
                continue;
            }
            let Some(resource) = tile.terrain.resource() else {
                continue;
            };
            for &corner in &tile.touching_settlements {
                if let Some(settlement) = self.corners[corner].settlement {
                    let amount = if settlement.is_city { 2 } else { 1 };
                    payout.entry(settlement.color).or_default().add(resource, amount);
                }
            }
        }
        payout
    }

    // ==================== Mutation Methods ====================

    /// Place a settlement for a color. Rejects occupied corners and corners
    /// adjacent to any existing settlement.
    pub fn add_settlement(&mut self, loc: CornerLoc, color: PlayerColor) -> Result<(), BoardError> {
        if loc >= self.corners.len() {
            return Err(BoardError::CornerOutOfRange(loc));
        }
        if self.corners[loc].settlement.is_some() {
            return Err(BoardError::CornerOccupied(loc));
        }
        if !self.satisfies_distance_rule(loc)? {
            return Err(BoardError::DistanceRuleViolated(loc));
        }
        self.corners[loc].settlement = Some(Settlement {
            color,
            is_city: false,
        });
        let tiles = self.corners[loc].adjacent_tiles.clone();
        for tile in tiles {
            self.tiles[tile].touching_settlements.push(loc);
        }
        Ok(())
    }

    /// Upgrade the settlement at a corner to a city
    pub fn upgrade_settlement(&mut self, loc: CornerLoc) -> Result<(), BoardError> {
        let corner = self
            .corners
            .get_mut(loc)
            .ok_or(BoardError::CornerOutOfRange(loc))?;
        match corner.settlement.as_mut() {
            None => Err(BoardError::NoSettlement(loc)),
            Some(settlement) if settlement.is_city => Err(BoardError::AlreadyCity(loc)),
            Some(settlement) => {
                settlement.is_city = true;
                Ok(())
            }
        }
    }

    /// Claim an unoccupied road for a color
    pub fn add_road(&mut self, loc: RoadLoc, color: PlayerColor) -> Result<(), BoardError> {
        let road = self
            .roads
            .get_mut(loc)
            .ok_or(BoardError::RoadOutOfRange(loc))?;
        if road.owner.is_some() {
            return Err(BoardError::RoadOccupied(loc));
        }
        road.owner = Some(color);
        Ok(())
    }

    /// Move the robber to a new tile. The previous tile is cleared and the
    /// new one set in the same call; moving onto the current tile is an error.
    pub fn move_robber(&mut self, loc: TileLoc) -> Result<(), BoardError> {
        if loc >= self.tiles.len() {
            return Err(BoardError::TileOutOfRange(loc));
        }
        if loc == self.robber {
            return Err(BoardError::RobberUnmoved(loc));
        }
        self.tiles[self.robber].has_robber = false;
        self.tiles[loc].has_robber = true;
        debug!(from = self.robber, to = loc, "robber moved");
        self.robber = loc;
        Ok(())
    }

    // ==================== Longest Road ====================

    /// Length in edges of the color's longest continuous road. A path may
    /// use each road once, may revisit corners, and may not continue through
    /// a corner settled by another color. 0 if the color owns no roads.
    pub fn calc_longest_road(&self, color: PlayerColor) -> u32 {
        let mut used = [false; ROAD_COUNT];
        let mut best = 0;
        for (loc, road) in self.roads.iter().enumerate() {
            if road.owner != Some(color) {
                continue;
            }
            for &start_corner in &road.endpoints {
                used[loc] = true;
                best = best.max(1 + self.extend_road(color, loc, start_corner, &mut used));
                used[loc] = false;
            }
        }
        best
    }

    /// Longest continuation of a path whose far end sits at `corner`, having
    /// just traversed `road`. `used` holds the roads already in the path.
    fn extend_road(
        &self,
        color: PlayerColor,
        road: RoadLoc,
        corner: CornerLoc,
        used: &mut [bool; ROAD_COUNT],
    ) -> u32 {
        // An opposing settlement blocks through-traffic; the path ends here.
        if let Some(settlement) = self.corners[corner].settlement {
            if settlement.color != color {
                return 0;
            }
        }
        let mut best = 0;
        for &next in &self.corners[corner].adjacent_roads {
            if next == road || used[next] || self.roads[next].owner != Some(color) {
                continue;
            }
            let [a, b] = self.roads[next].endpoints;
            let far = a + b - corner;
            used[next] = true;
            best = best.max(1 + self.extend_road(color, next, far, used));
            used[next] = false;
        }
        best
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
