use crate::Card;
use serde::{Deserialize, Serialize};

/// State transitions, in order, for front-ends that animate what happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    RoomFilled {
        placed: Vec<(usize, Card)>,
        deck_left: usize,
    },
    HealthRestored {
        card: Card,
        amount: u8,
        hp: u8,
    },
    WeaponEquipped {
        weapon: Card,
        discarded: Vec<Card>,
    },
    MonsterSlain {
        monster: Card,
        damage: u8,
        hp: u8,
        stacked: bool,
    },
    FightRejected {
        monster: Card,
        last: Card,
    },
    RanFromRoom {
        returned: Vec<Card>,
    },
    WeaponDiscarded {
        cards: Vec<Card>,
    },
    PlayerDied {
        killer: Card,
    },
    Victory,
    Restarted {
        deck_size: usize,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
