//! Fixed topology of the standard 19-tile board.
//!
//! This module contains:
//! - Location counts and type aliases for the tile/corner/road arenas
//! - Hard-coded adjacency tables for the 54-corner / 72-road graph
//! - The spiral ring orders and number-token source sequence
//! - The fixed harbor-to-corner assignment
//!
//! Tiles are numbered row by row (rows of 3, 4, 5, 4, 3), top to bottom and
//! left to right. Corners and roads are numbered the same way by their
//! position on the hex lattice. The tables never change at runtime; the
//! board arena is built from them once per game.

use crate::board::{Harbor, Resource};

/// Number of terrain tiles on the board.
pub const TILE_COUNT: usize = 19;

/// Number of corners (settlement locations).
pub const CORNER_COUNT: usize = 54;

/// Number of roads (edge locations).
pub const ROAD_COUNT: usize = 72;

/// Index of a tile in the board arena (0..TILE_COUNT).
pub type TileLoc = usize;

/// Index of a corner in the board arena (0..CORNER_COUNT).
pub type CornerLoc = usize;

/// Index of a road in the board arena (0..ROAD_COUNT).
pub type RoadLoc = usize;

/// The 12 border tiles in clockwise order, starting at the top-left tile.
pub(crate) const OUTER_RING: [TileLoc; 12] = [0, 1, 2, 6, 11, 15, 18, 17, 16, 12, 7, 3];

/// The 6 tiles between the border and the center, clockwise.
pub(crate) const INNER_RING: [TileLoc; 6] = [4, 5, 10, 14, 13, 8];

/// The center tile, visited last during token placement.
pub(crate) const CENTER_TILE: TileLoc = 9;

/// Number-token values in placement order, lettered A-R.
pub(crate) const TOKEN_VALUES: [u8; 18] = [5, 2, 6, 3, 8, 10, 9, 12, 11, 4, 8, 10, 9, 4, 5, 6, 3, 11];

/// The four symmetric starting offsets into the outer ring (every third
/// border tile), and the matching inner-ring offsets so that both rings
/// rotate together.
pub(crate) const OUTER_OFFSETS: [usize; 4] = [0, 3, 6, 9];
pub(crate) const INNER_OFFSETS: [usize; 4] = [0, 1, 3, 4];

/// Corners reachable from each corner along a single road.
pub(crate) const CORNER_CORNERS: [&[CornerLoc]; CORNER_COUNT] = [
    &[3, 4],
    &[4, 5],
    &[5, 6],
    &[0, 7],
    &[0, 1, 8],
    &[1, 2, 9],
    &[2, 10],
    &[3, 11, 12],
    &[4, 12, 13],
    &[5, 13, 14],
    &[6, 14, 15],
    &[7, 16],
    &[7, 8, 17],
    &[8, 9, 18],
    &[9, 10, 19],
    &[10, 20],
    &[11, 21, 22],
    &[12, 22, 23],
    &[13, 23, 24],
    &[14, 24, 25],
    &[15, 25, 26],
    &[16, 27],
    &[16, 17, 28],
    &[17, 18, 29],
    &[18, 19, 30],
    &[19, 20, 31],
    &[20, 32],
    &[21, 33],
    &[22, 33, 34],
    &[23, 34, 35],
    &[24, 35, 36],
    &[25, 36, 37],
    &[26, 37],
    &[27, 28, 38],
    &[28, 29, 39],
    &[29, 30, 40],
    &[30, 31, 41],
    &[31, 32, 42],
    &[33, 43],
    &[34, 43, 44],
    &[35, 44, 45],
    &[36, 45, 46],
    &[37, 46],
    &[38, 39, 47],
    &[39, 40, 48],
    &[40, 41, 49],
    &[41, 42, 50],
    &[43, 51],
    &[44, 51, 52],
    &[45, 52, 53],
    &[46, 53],
    &[47, 48],
    &[48, 49],
    &[49, 50],
];

/// Tiles touching each corner.
pub(crate) const CORNER_TILES: [&[TileLoc]; CORNER_COUNT] = [
    &[0],
    &[1],
    &[2],
    &[0],
    &[0, 1],
    &[1, 2],
    &[2],
    &[0, 3],
    &[0, 1, 4],
    &[1, 2, 5],
    &[2, 6],
    &[3],
    &[0, 3, 4],
    &[1, 4, 5],
    &[2, 5, 6],
    &[6],
    &[3, 7],
    &[3, 4, 8],
    &[4, 5, 9],
    &[5, 6, 10],
    &[6, 11],
    &[7],
    &[3, 7, 8],
    &[4, 8, 9],
    &[5, 9, 10],
    &[6, 10, 11],
    &[11],
    &[7],
    &[7, 8, 12],
    &[8, 9, 13],
    &[9, 10, 14],
    &[10, 11, 15],
    &[11],
    &[7, 12],
    &[8, 12, 13],
    &[9, 13, 14],
    &[10, 14, 15],
    &[11, 15],
    &[12],
    &[12, 13, 16],
    &[13, 14, 17],
    &[14, 15, 18],
    &[15],
    &[12, 16],
    &[13, 16, 17],
    &[14, 17, 18],
    &[15, 18],
    &[16],
    &[16, 17],
    &[17, 18],
    &[18],
    &[16],
    &[17],
    &[18],
];

/// Roads incident to each corner.
pub(crate) const CORNER_ROADS: [&[RoadLoc]; CORNER_COUNT] = [
    &[0, 1],
    &[2, 3],
    &[4, 5],
    &[0, 6],
    &[1, 2, 7],
    &[3, 4, 8],
    &[5, 9],
    &[6, 10, 11],
    &[7, 12, 13],
    &[8, 14, 15],
    &[9, 16, 17],
    &[10, 18],
    &[11, 12, 19],
    &[13, 14, 20],
    &[15, 16, 21],
    &[17, 22],
    &[18, 23, 24],
    &[19, 25, 26],
    &[20, 27, 28],
    &[21, 29, 30],
    &[22, 31, 32],
    &[23, 33],
    &[24, 25, 34],
    &[26, 27, 35],
    &[28, 29, 36],
    &[30, 31, 37],
    &[32, 38],
    &[33, 39],
    &[34, 40, 41],
    &[35, 42, 43],
    &[36, 44, 45],
    &[37, 46, 47],
    &[38, 48],
    &[39, 40, 49],
    &[41, 42, 50],
    &[43, 44, 51],
    &[45, 46, 52],
    &[47, 48, 53],
    &[49, 54],
    &[50, 55, 56],
    &[51, 57, 58],
    &[52, 59, 60],
    &[53, 61],
    &[54, 55, 62],
    &[56, 57, 63],
    &[58, 59, 64],
    &[60, 61, 65],
    &[62, 66],
    &[63, 67, 68],
    &[64, 69, 70],
    &[65, 71],
    &[66, 67],
    &[68, 69],
    &[70, 71],
];

/// The two corners at the ends of each road.
pub(crate) const ROAD_ENDPOINTS: [[CornerLoc; 2]; ROAD_COUNT] = [
    [0, 3], [0, 4], [1, 4], [1, 5], [2, 5], [2, 6],
    [3, 7], [4, 8], [5, 9], [6, 10], [7, 11], [7, 12],
    [8, 12], [8, 13], [9, 13], [9, 14], [10, 14], [10, 15],
    [11, 16], [12, 17], [13, 18], [14, 19], [15, 20], [16, 21],
    [16, 22], [17, 22], [17, 23], [18, 23], [18, 24], [19, 24],
    [19, 25], [20, 25], [20, 26], [21, 27], [22, 28], [23, 29],
    [24, 30], [25, 31], [26, 32], [27, 33], [28, 33], [28, 34],
    [29, 34], [29, 35], [30, 35], [30, 36], [31, 36], [31, 37],
    [32, 37], [33, 38], [34, 39], [35, 40], [36, 41], [37, 42],
    [38, 43], [39, 43], [39, 44], [40, 44], [40, 45], [41, 45],
    [41, 46], [42, 46], [43, 47], [44, 48], [45, 49], [46, 50],
    [47, 51], [48, 51], [48, 52], [49, 52], [49, 53], [50, 53],
];

/// Roads sharing a corner with each road.
pub(crate) const ROAD_ROADS: [&[RoadLoc]; ROAD_COUNT] = [
    &[1, 6],
    &[0, 2, 7],
    &[1, 3, 7],
    &[2, 4, 8],
    &[3, 5, 8],
    &[4, 9],
    &[0, 10, 11],
    &[1, 2, 12, 13],
    &[3, 4, 14, 15],
    &[5, 16, 17],
    &[6, 11, 18],
    &[6, 10, 12, 19],
    &[7, 11, 13, 19],
    &[7, 12, 14, 20],
    &[8, 13, 15, 20],
    &[8, 14, 16, 21],
    &[9, 15, 17, 21],
    &[9, 16, 22],
    &[10, 23, 24],
    &[11, 12, 25, 26],
    &[13, 14, 27, 28],
    &[15, 16, 29, 30],
    &[17, 31, 32],
    &[18, 24, 33],
    &[18, 23, 25, 34],
    &[19, 24, 26, 34],
    &[19, 25, 27, 35],
    &[20, 26, 28, 35],
    &[20, 27, 29, 36],
    &[21, 28, 30, 36],
    &[21, 29, 31, 37],
    &[22, 30, 32, 37],
    &[22, 31, 38],
    &[23, 39],
    &[24, 25, 40, 41],
    &[26, 27, 42, 43],
    &[28, 29, 44, 45],
    &[30, 31, 46, 47],
    &[32, 48],
    &[33, 40, 49],
    &[34, 39, 41, 49],
    &[34, 40, 42, 50],
    &[35, 41, 43, 50],
    &[35, 42, 44, 51],
    &[36, 43, 45, 51],
    &[36, 44, 46, 52],
    &[37, 45, 47, 52],
    &[37, 46, 48, 53],
    &[38, 47, 53],
    &[39, 40, 54],
    &[41, 42, 55, 56],
    &[43, 44, 57, 58],
    &[45, 46, 59, 60],
    &[47, 48, 61],
    &[49, 55, 62],
    &[50, 54, 56, 62],
    &[50, 55, 57, 63],
    &[51, 56, 58, 63],
    &[51, 57, 59, 64],
    &[52, 58, 60, 64],
    &[52, 59, 61, 65],
    &[53, 60, 65],
    &[54, 55, 66],
    &[56, 57, 67, 68],
    &[58, 59, 69, 70],
    &[60, 61, 71],
    &[62, 67],
    &[63, 66, 68],
    &[63, 67, 69],
    &[64, 68, 70],
    &[64, 69, 71],
    &[65, 70],
];

/// The nine harbors: the two coastal corners that grant access, and the
/// harbor kind. Four generic 3:1 harbors and one 2:1 harbor per resource,
/// clockwise from the top-left coast.
pub(crate) const HARBORS: [(CornerLoc, CornerLoc, Harbor); 9] = [
    (0, 4, Harbor::Generic),
    (2, 5, Harbor::Specific(Resource::Grain)),
    (10, 15, Harbor::Specific(Resource::Ore)),
    (32, 37, Harbor::Generic),
    (46, 50, Harbor::Specific(Resource::Wool)),
    (49, 52, Harbor::Generic),
    (43, 47, Harbor::Generic),
    (27, 33, Harbor::Specific(Resource::Brick)),
    (11, 16, Harbor::Specific(Resource::Lumber)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_adjacency_is_symmetric() {
        for (a, neighbors) in CORNER_CORNERS.iter().enumerate() {
            for &b in *neighbors {
                assert!(
                    CORNER_CORNERS[b].contains(&a),
                    "corner {} lists {} but not vice versa",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn corner_degrees_are_two_or_three() {
        for (loc, neighbors) in CORNER_CORNERS.iter().enumerate() {
            assert!(
                (2..=3).contains(&neighbors.len()),
                "corner {} has degree {}",
                loc,
                neighbors.len()
            );
            assert_eq!(neighbors.len(), CORNER_ROADS[loc].len());
        }
    }

    #[test]
    fn road_endpoints_match_corner_incidence() {
        for (road, endpoints) in ROAD_ENDPOINTS.iter().enumerate() {
            for &corner in endpoints {
                assert!(CORNER_ROADS[corner].contains(&road));
                let other = endpoints[0] + endpoints[1] - corner;
                assert!(CORNER_CORNERS[corner].contains(&other));
            }
        }
    }

    #[test]
    fn road_adjacency_shares_a_corner() {
        for (road, adjacent) in ROAD_ROADS.iter().enumerate() {
            let [a, b] = ROAD_ENDPOINTS[road];
            for &other in *adjacent {
                assert_ne!(other, road);
                let [c, d] = ROAD_ENDPOINTS[other];
                assert!(
                    a == c || a == d || b == c || b == d,
                    "roads {} and {} share no corner",
                    road,
                    other
                );
            }
        }
    }

    #[test]
    fn rings_cover_all_tiles_once() {
        let mut seen = [false; TILE_COUNT];
        for loc in OUTER_RING.iter().chain(INNER_RING.iter()).chain([&CENTER_TILE]) {
            assert!(!seen[*loc], "tile {} appears twice", loc);
            seen[*loc] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn token_sequence_has_standard_distribution() {
        let mut counts = [0u8; 13];
        for &value in &TOKEN_VALUES {
            counts[value as usize] += 1;
        }
        assert_eq!(counts[2], 1);
        assert_eq!(counts[7], 0);
        assert_eq!(counts[12], 1);
        for value in [3, 4, 5, 6, 8, 9, 10, 11] {
            assert_eq!(counts[value], 2, "value {} should appear twice", value);
        }
    }

    #[test]
    fn harbors_touch_distinct_coastal_corners() {
        let mut seen = std::collections::HashSet::new();
        for &(a, b, _) in &HARBORS {
            assert!(seen.insert(a), "corner {} serves two harbors", a);
            assert!(seen.insert(b), "corner {} serves two harbors", b);
            assert!(CORNER_CORNERS[a].contains(&b), "harbor corners {} and {} not adjacent", a, b);
        }
    }
}
