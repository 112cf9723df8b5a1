use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombatOutcome {
    pub accepted: bool,
    pub damage: u8,
    /// True when the monster now sits on the weapon's stack.
    pub stacked: bool,
}

impl CombatOutcome {
    fn rejected() -> Self {
        Self {
            accepted: false,
            damage: 0,
            stacked: false,
        }
    }
}

/// The equipped weapon plus the monsters slain with it, in kill order.
///
/// The stack never increases in value: once a weapon has been used on a
/// monster it can only be used on monsters of equal or lower value.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeaponSlot {
    weapon: Option<Card>,
    monsters: Vec<Card>,
}

impl WeaponSlot {
    pub fn weapon(&self) -> Option<&Card> {
        self.weapon.as_ref()
    }

    pub fn monsters(&self) -> &[Card] {
        &self.monsters
    }

    pub fn last_monster(&self) -> Option<&Card> {
        self.monsters.last()
    }

    pub fn can_add_monster(&self, monster: &Card) -> bool {
        if self.weapon.is_none() {
            return true;
        }
        match self.monsters.last() {
            Some(last) => monster.value <= last.value,
            None => true,
        }
    }

    /// Resolves a fight. Bare-handed kills are not retained; the caller owns
    /// the monster and must discard it.
    pub fn add_monster(&mut self, monster: Card) -> CombatOutcome {
        if !self.can_add_monster(&monster) {
            return CombatOutcome::rejected();
        }
        match self.weapon {
            Some(weapon) => {
                self.monsters.push(monster);
                CombatOutcome {
                    accepted: true,
                    damage: monster.value.saturating_sub(weapon.value),
                    stacked: true,
                }
            }
            None => CombatOutcome {
                accepted: true,
                damage: monster.value,
                stacked: false,
            },
        }
    }

    /// Equips `weapon` and hands back the previous weapon and its stack.
    pub fn set_weapon(&mut self, weapon: Card) -> Vec<Card> {
        let displaced = self.discard();
        self.weapon = Some(weapon);
        displaced
    }

    /// Clears the slot, returning the weapon followed by its monsters.
    pub fn discard(&mut self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.monsters.len() + 1);
        cards.extend(self.weapon.take());
        cards.append(&mut self.monsters);
        cards
    }

    pub fn protection_value(&self) -> u8 {
        self.weapon.map(|weapon| weapon.value).unwrap_or(0)
    }

    pub fn card_count(&self) -> usize {
        self.monsters.len() + usize::from(self.weapon.is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.weapon.iter().chain(self.monsters.iter())
    }
}
