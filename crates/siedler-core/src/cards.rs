//! Development card catalog and deck.
//!
//! Nine fixed titles: four progress cards with individual descriptions and
//! five victory-point cards that share one. Cards are identified by title;
//! the description is derived, never stored.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The description shared by all five victory-point cards
pub const VICTORY_POINT_DESCRIPTION: &str = "1 Victory Point";

/// A development card, identified by its title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DevelopmentCard {
    Knight,
    Monopoly,
    RoadBuilding,
    YearOfPlenty,
    Chapel,
    Library,
    Market,
    Palace,
    University,
}

/// Error for an unrecognized card title
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown development card title: {0}")]
pub struct UnknownCardTitle(pub String);

impl DevelopmentCard {
    /// All nine card titles
    pub const ALL: [DevelopmentCard; 9] = [
        DevelopmentCard::Knight,
        DevelopmentCard::Monopoly,
        DevelopmentCard::RoadBuilding,
        DevelopmentCard::YearOfPlenty,
        DevelopmentCard::Chapel,
        DevelopmentCard::Library,
        DevelopmentCard::Market,
        DevelopmentCard::Palace,
        DevelopmentCard::University,
    ];

    /// Look up a card by its printed title
    pub fn from_title(title: &str) -> Result<Self, UnknownCardTitle> {
        Self::ALL
            .into_iter()
            .find(|card| card.title() == title)
            .ok_or_else(|| UnknownCardTitle(title.to_string()))
    }

    /// The printed title
    pub fn title(&self) -> &'static str {
        match self {
            DevelopmentCard::Knight => "Knight",
            DevelopmentCard::Monopoly => "Monopoly",
            DevelopmentCard::RoadBuilding => "Road Building",
            DevelopmentCard::YearOfPlenty => "Year of Plenty",
            DevelopmentCard::Chapel => "Chapel",
            DevelopmentCard::Library => "Library",
            DevelopmentCard::Market => "Market",
            DevelopmentCard::Palace => "Palace",
            DevelopmentCard::University => "University",
        }
    }

    /// The printed description, derived from the title
    pub fn description(&self) -> &'static str {
        match self {
            DevelopmentCard::Knight => {
                "Move the robber. Steal 1 resource from the owner of a settlement or city adjacent to the robber's new hex"
            }
            DevelopmentCard::Monopoly => {
                "When you play this card, announce 1 type of resource. All other players must give you all of their resources of that type"
            }
            DevelopmentCard::RoadBuilding => "Place 2 new roads as if you had just built them",
            DevelopmentCard::YearOfPlenty => {
                "Take any 2 resources from the bank. Add them to your hand. They can be 2 of the same resource or 2 different resources"
            }
            DevelopmentCard::Chapel
            | DevelopmentCard::Library
            | DevelopmentCard::Market
            | DevelopmentCard::Palace
            | DevelopmentCard::University => VICTORY_POINT_DESCRIPTION,
        }
    }

    /// Whether this card silently scores a victory point when drawn
    pub fn is_victory_point(&self) -> bool {
        self.description() == VICTORY_POINT_DESCRIPTION
    }

    /// Whether this card can be played from the hand (VP cards cannot)
    pub fn is_playable(&self) -> bool {
        !self.is_victory_point()
    }

    /// The standard 25-card deck: 14 Knights, 2 of each progress card, and
    /// one of each victory-point card
    pub fn standard_deck() -> Vec<DevelopmentCard> {
        let mut deck = Vec::with_capacity(25);
        deck.extend(std::iter::repeat(DevelopmentCard::Knight).take(14));
        deck.extend(std::iter::repeat(DevelopmentCard::Monopoly).take(2));
        deck.extend(std::iter::repeat(DevelopmentCard::RoadBuilding).take(2));
        deck.extend(std::iter::repeat(DevelopmentCard::YearOfPlenty).take(2));
        deck.extend([
            DevelopmentCard::Chapel,
            DevelopmentCard::Library,
            DevelopmentCard::Market,
            DevelopmentCard::Palace,
            DevelopmentCard::University,
        ]);
        deck
    }

    /// Shuffle a deck with a provided RNG
    pub fn shuffle_deck<R: Rng>(deck: &mut [DevelopmentCard], rng: &mut R) {
        deck.shuffle(rng);
    }
}

impl fmt::Display for DevelopmentCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for DevelopmentCard {
    type Err = UnknownCardTitle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_title(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn construction_by_title() {
        for card in DevelopmentCard::ALL {
            assert_eq!(DevelopmentCard::from_title(card.title()), Ok(card));
        }
    }

    #[test]
    fn unknown_title_is_an_error() {
        assert_eq!(
            DevelopmentCard::from_title("Aqueduct"),
            Err(UnknownCardTitle("Aqueduct".to_string()))
        );
        assert!("".parse::<DevelopmentCard>().is_err());
    }

    #[test]
    fn five_cards_share_the_victory_point_description() {
        let vp: Vec<DevelopmentCard> = DevelopmentCard::ALL
            .into_iter()
            .filter(|c| c.description() == VICTORY_POINT_DESCRIPTION)
            .collect();
        assert_eq!(vp.len(), 5);
        for card in vp {
            assert!(card.is_victory_point());
            assert!(!card.is_playable());
        }
    }

    #[test]
    fn progress_descriptions_are_distinct() {
        let progress: Vec<&str> = DevelopmentCard::ALL
            .into_iter()
            .filter(|c| c.is_playable())
            .map(|c| c.description())
            .collect();
        assert_eq!(progress.len(), 4);
        for (i, a) in progress.iter().enumerate() {
            for b in &progress[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn standard_deck_composition() {
        let deck = DevelopmentCard::standard_deck();
        assert_eq!(deck.len(), 25);
        let count = |card: DevelopmentCard| deck.iter().filter(|c| **c == card).count();
        assert_eq!(count(DevelopmentCard::Knight), 14);
        assert_eq!(count(DevelopmentCard::Monopoly), 2);
        assert_eq!(count(DevelopmentCard::RoadBuilding), 2);
        assert_eq!(count(DevelopmentCard::YearOfPlenty), 2);
        assert_eq!(
            deck.iter().filter(|c| c.is_victory_point()).count(),
            5
        );
    }
}
