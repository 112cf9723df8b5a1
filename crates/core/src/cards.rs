use crate::{MAX_VALUE, MIN_VALUE};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Highest value this suit contributes to the dungeon deck. Red suits
    /// carry no face cards or aces.
    pub fn max_deck_value(self) -> u8 {
        if self.is_red() {
            10
        } else {
            MAX_VALUE
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardKind {
    Health,
    Weapon,
    Monster,
}

impl CardKind {
    pub fn label(self) -> &'static str {
        match self {
            CardKind::Health => "Health Potion",
            CardKind::Weapon => "Weapon",
            CardKind::Monster => "Monster",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("card value {0} outside 2..=14")]
    ValueOutOfRange(u8),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub suit: Suit,
    pub value: u8,
}

impl Card {
    pub fn new(suit: Suit, value: u8) -> Result<Self, CardError> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(CardError::ValueOutOfRange(value));
        }
        Ok(Self { suit, value })
    }

    pub fn kind(&self) -> CardKind {
        match self.suit {
            Suit::Hearts => CardKind::Health,
            Suit::Diamonds => CardKind::Weapon,
            Suit::Clubs | Suit::Spades => CardKind::Monster,
        }
    }

    pub fn is_monster(&self) -> bool {
        self.kind() == CardKind::Monster
    }

    pub fn rank_label(&self) -> String {
        match self.value {
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            14 => "A".to_string(),
            value => value.to_string(),
        }
    }

    /// Compact form for narrow panes, e.g. `Q♠`.
    pub fn short_label(&self) -> String {
        format!("{}{}", self.rank_label(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_label(), self.suit.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_suit() {
        let heal = Card::new(Suit::Hearts, 4).expect("card");
        let weapon = Card::new(Suit::Diamonds, 4).expect("card");
        let club = Card::new(Suit::Clubs, 4).expect("card");
        let spade = Card::new(Suit::Spades, 4).expect("card");
        assert_eq!(heal.kind(), CardKind::Health);
        assert_eq!(weapon.kind(), CardKind::Weapon);
        assert_eq!(club.kind(), CardKind::Monster);
        assert_eq!(spade.kind(), CardKind::Monster);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(
            Card::new(Suit::Clubs, 1),
            Err(CardError::ValueOutOfRange(1))
        );
        assert_eq!(
            Card::new(Suit::Clubs, 15),
            Err(CardError::ValueOutOfRange(15))
        );
    }

    #[test]
    fn face_labels() {
        let queen = Card::new(Suit::Spades, 12).expect("card");
        assert_eq!(queen.to_string(), "Q of Spades");
        assert_eq!(queen.short_label(), "Q♠");
        let ten = Card::new(Suit::Hearts, 10).expect("card");
        assert_eq!(ten.to_string(), "10 of Hearts");
    }
}
