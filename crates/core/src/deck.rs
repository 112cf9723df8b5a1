use crate::{Card, RngState, Suit, DECK_SIZE, MIN_VALUE};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Draw pile. The front of the queue is the top of the deck.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// The 44-card dungeon deck in suit order, unshuffled.
    pub fn scoundrel() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for value in MIN_VALUE..=suit.max_deck_value() {
                cards.push_back(Card { suit, value });
            }
        }
        Self { cards }
    }

    /// A deck in exactly the given order, first card on top.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(self.cards.make_contiguous());
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Shuffles `cards` among themselves and slides them under the deck.
    pub fn return_to_bottom(&mut self, mut cards: Vec<Card>, rng: &mut RngState) {
        rng.shuffle(&mut cards);
        self.cards.extend(cards);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}

/// Append-only history of spent cards.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn scoundrel_deck_composition() {
        let deck = Deck::scoundrel();
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
        for (suit, count, max) in [
            (Suit::Hearts, 9, 10),
            (Suit::Diamonds, 9, 10),
            (Suit::Clubs, 13, 14),
            (Suit::Spades, 13, 14),
        ] {
            let values: Vec<u8> = deck
                .iter()
                .filter(|card| card.suit == suit)
                .map(|card| card.value)
                .collect();
            assert_eq!(values.len(), count, "{suit:?}");
            assert_eq!(values.iter().copied().min(), Some(2));
            assert_eq!(values.iter().copied().max(), Some(max));
        }
    }

    #[test]
    fn draw_takes_from_top() {
        let first = Card::new(Suit::Clubs, 9).expect("card");
        let second = Card::new(Suit::Hearts, 3).expect("card");
        let mut deck = Deck::from_cards([first, second]);
        assert_eq!(deck.draw(), Some(first));
        assert_eq!(deck.draw(), Some(second));
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn return_to_bottom_keeps_existing_top() {
        let mut rng = RngState::from_seed(3);
        let top = Card::new(Suit::Spades, 14).expect("card");
        let mut deck = Deck::from_cards([top]);
        let returned = vec![
            Card::new(Suit::Clubs, 2).expect("card"),
            Card::new(Suit::Clubs, 3).expect("card"),
            Card::new(Suit::Clubs, 4).expect("card"),
        ];
        deck.return_to_bottom(returned.clone(), &mut rng);
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.draw(), Some(top));
        let mut rest: Vec<Card> = deck.iter().copied().collect();
        rest.sort();
        assert_eq!(rest, returned);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = RngState::from_seed(11);
        let mut deck = Deck::scoundrel();
        deck.shuffle(&mut rng);
        let mut shuffled: Vec<Card> = deck.iter().copied().collect();
        shuffled.sort();
        let mut ordered: Vec<Card> = Deck::scoundrel().iter().copied().collect();
        ordered.sort();
        assert_eq!(shuffled, ordered);
    }
}
