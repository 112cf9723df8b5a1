use super::GameEngine;
use crate::{Card, CardKind, HealthBand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomCardView {
    pub slot: usize,
    pub card: Card,
    pub kind: CardKind,
    /// False for a monster the current weapon stack refuses.
    pub usable: bool,
}

/// Read-only copy of everything a front-end may show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub seed: u64,
    pub deck_size: usize,
    pub room: Vec<RoomCardView>,
    pub weapon: Option<Card>,
    pub monsters: Vec<Card>,
    pub protection: u8,
    pub stack_ceiling: Option<u8>,
    pub discard_size: usize,
    pub discard_top: Option<Card>,
    pub hp: u8,
    pub max_hp: u8,
    pub health_band: HealthBand,
    pub just_ran: bool,
    pub can_run: bool,
    pub can_discard_weapon: bool,
    pub game_over: bool,
    pub victory: bool,
}

impl GameEngine {
    pub fn snapshot(&self) -> EngineSnapshot {
        let slot = &self.player.weapon_slot;
        EngineSnapshot {
            seed: self.seed(),
            deck_size: self.deck.len(),
            room: self
                .room
                .cards()
                .map(|(idx, card)| RoomCardView {
                    slot: idx,
                    card: *card,
                    kind: card.kind(),
                    usable: !card.is_monster() || slot.can_add_monster(card),
                })
                .collect(),
            weapon: slot.weapon().copied(),
            monsters: slot.monsters().to_vec(),
            protection: slot.protection_value(),
            stack_ceiling: slot.last_monster().map(|card| card.value),
            discard_size: self.discard.len(),
            discard_top: self.discard.top().copied(),
            hp: self.player.hp,
            max_hp: self.player.max_hp,
            health_band: self.player.health_band(),
            just_ran: self.just_ran,
            can_run: self.can_run(),
            can_discard_weapon: self.can_discard_weapon(),
            game_over: self.is_game_over(),
            victory: self.victory(),
        }
    }
}
