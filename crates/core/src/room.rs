use crate::{Card, Deck, REFILL_THRESHOLD, ROOM_SLOTS};
use serde::{Deserialize, Serialize};

/// Active play area. Slots keep their index; emptied slots are never compacted.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    slots: [Option<Card>; ROOM_SLOTS],
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws into every empty slot, lowest index first, once the room is down
    /// to `REFILL_THRESHOLD` cards. Returns the `(slot, card)` pairs placed.
    pub fn refill(&mut self, deck: &mut Deck) -> Vec<(usize, Card)> {
        let mut placed = Vec::new();
        if self.occupied() > REFILL_THRESHOLD {
            return placed;
        }
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_some() {
                continue;
            }
            let Some(card) = deck.draw() else {
                break;
            };
            *slot = Some(card);
            placed.push((idx, card));
        }
        placed
    }

    pub fn get(&self, slot: usize) -> Option<&Card> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn take(&mut self, slot: usize) -> Option<Card> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn remove_card(&mut self, card: &Card) -> Option<usize> {
        let idx = self.slots.iter().position(|slot| slot.as_ref() == Some(card))?;
        self.slots[idx] = None;
        Some(idx)
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied() == 0
    }

    pub fn cards(&self) -> impl Iterator<Item = (usize, &Card)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|card| (idx, card)))
    }

    pub fn slots(&self) -> &[Option<Card>; ROOM_SLOTS] {
        &self.slots
    }

    /// Empties every slot, returning the cards in slot order.
    pub fn drain(&mut self) -> Vec<Card> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    fn clubs(values: &[u8]) -> Vec<Card> {
        values
            .iter()
            .map(|value| Card::new(Suit::Clubs, *value).expect("card"))
            .collect()
    }

    #[test]
    fn refill_fills_all_slots_from_empty() {
        let mut deck = Deck::from_cards(clubs(&[2, 3, 4, 5, 6]));
        let mut room = Room::new();
        let placed = room.refill(&mut deck);
        assert_eq!(placed.len(), ROOM_SLOTS);
        assert_eq!(room.occupied(), ROOM_SLOTS);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn refill_skips_when_two_cards_remain() {
        let mut deck = Deck::from_cards(clubs(&[2, 3, 4, 5, 6, 7]));
        let mut room = Room::new();
        room.refill(&mut deck);
        room.take(0);
        room.take(1);
        assert!(room.refill(&mut deck).is_empty());
        assert_eq!(room.occupied(), 2);
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn refill_preserves_survivor_position() {
        let mut deck = Deck::from_cards(clubs(&[2, 3, 4, 5, 6, 7, 8]));
        let mut room = Room::new();
        room.refill(&mut deck);
        let survivor = *room.get(2).expect("slot 2");
        room.take(0);
        room.take(1);
        room.take(3);
        let placed = room.refill(&mut deck);
        assert_eq!(
            placed.iter().map(|(slot, _)| *slot).collect::<Vec<_>>(),
            vec![0, 1, 3]
        );
        assert_eq!(room.get(2), Some(&survivor));
    }

    #[test]
    fn refill_stops_when_deck_runs_out() {
        let mut deck = Deck::from_cards(clubs(&[2, 3]));
        let mut room = Room::new();
        let placed = room.refill(&mut deck);
        assert_eq!(placed.len(), 2);
        assert!(deck.is_empty());
        assert_eq!(room.get(2), None);
    }

    #[test]
    fn remove_card_leaves_hole() {
        let mut deck = Deck::from_cards(clubs(&[2, 3, 4, 5]));
        let mut room = Room::new();
        room.refill(&mut deck);
        let target = *room.get(1).expect("slot 1");
        assert_eq!(room.remove_card(&target), Some(1));
        assert_eq!(room.get(1), None);
        assert_eq!(room.occupied(), 3);
        assert_eq!(room.remove_card(&target), None);
    }
}
