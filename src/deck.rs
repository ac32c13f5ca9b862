//! Card deck for the playboard prototype.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    Herz,
    Pik,
    Kreuz,
    Karo,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Herz, Suit::Pik, Suit::Kreuz, Suit::Karo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Herz => "Herz",
            Suit::Pik => "Pik",
            Suit::Kreuz => "Kreuz",
            Suit::Karo => "Karo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rank {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl Rank {
    /// Ace first, King last.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.as_str(), self.suit.as_str())
    }
}

/// All 52 cards, grouped by suit in `Suit::ALL` order.
pub fn generate_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deck_has_52_unique_cards() {
        let deck = generate_deck();
        assert_eq!(deck.len(), 52);

        let unique: HashSet<_> = deck.iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_deck_is_suit_major() {
        let deck = generate_deck();

        assert_eq!(deck[0], Card::new(Suit::Herz, Rank::Ace));
        assert_eq!(deck[12], Card::new(Suit::Herz, Rank::King));
        assert_eq!(deck[13], Card::new(Suit::Pik, Rank::Ace));
        assert_eq!(deck[51], Card::new(Suit::Karo, Rank::King));
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Suit::Herz, Rank::Ace).to_string(), "A of Herz");
        assert_eq!(Card::new(Suit::Karo, Rank::Ten).to_string(), "10 of Karo");
    }

    #[test]
    fn test_card_serializes_with_short_rank() {
        let json = serde_json::to_value(Card::new(Suit::Kreuz, Rank::Queen)).expect("Should serialize");
        assert_eq!(json, serde_json::json!({ "suit": "Kreuz", "rank": "Q" }));
    }
}
