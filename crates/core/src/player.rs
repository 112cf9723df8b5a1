use crate::{Card, WeaponSlot, MAX_HP};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FightOutcome {
    /// False when the stacking rule refused the fight; nothing changed.
    pub action_taken: bool,
    pub survived: bool,
    pub damage: u8,
    pub stacked: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthBand {
    Healthy,
    Wounded,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub hp: u8,
    pub max_hp: u8,
    pub weapon_slot: WeaponSlot,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self::with_hp(MAX_HP)
    }

    pub fn with_hp(hp: u8) -> Self {
        Self {
            hp: hp.min(MAX_HP),
            max_hp: MAX_HP,
            weapon_slot: WeaponSlot::default(),
        }
    }

    /// Heals up to the cap and reports what was actually restored.
    pub fn use_health_potion(&mut self, card: &Card) -> u8 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(card.value).min(self.max_hp);
        self.hp - before
    }

    pub fn fight_monster(&mut self, monster: Card) -> FightOutcome {
        if !self.weapon_slot.can_add_monster(&monster) {
            return FightOutcome {
                action_taken: false,
                survived: true,
                damage: 0,
                stacked: false,
            };
        }
        let combat = self.weapon_slot.add_monster(monster);
        self.hp = self.hp.saturating_sub(combat.damage);
        FightOutcome {
            action_taken: true,
            survived: self.hp > 0,
            damage: combat.damage,
            stacked: combat.stacked,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    pub fn health_band(&self) -> HealthBand {
        match self.hp {
            hp if hp > 13 => HealthBand::Healthy,
            9..=13 => HealthBand::Wounded,
            _ => HealthBand::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;

    #[test]
    fn healing_is_capped() {
        let mut player = Player::with_hp(18);
        let potion = Card::new(Suit::Hearts, 5).expect("card");
        assert_eq!(player.use_health_potion(&potion), 2);
        assert_eq!(player.hp, MAX_HP);
        assert_eq!(player.use_health_potion(&potion), 0);
    }

    #[test]
    fn lethal_fight_floors_hp() {
        let mut player = Player::with_hp(5);
        let outcome = player.fight_monster(Card::new(Suit::Clubs, 10).expect("card"));
        assert!(outcome.action_taken);
        assert!(!outcome.survived);
        assert_eq!(outcome.damage, 10);
        assert_eq!(player.hp, 0);
        assert!(player.is_dead());
    }

    #[test]
    fn rejected_fight_changes_nothing() {
        let mut player = Player::with_hp(12);
        player
            .weapon_slot
            .set_weapon(Card::new(Suit::Diamonds, 6).expect("card"));
        player.fight_monster(Card::new(Suit::Spades, 4).expect("card"));
        let before = player.clone();
        let outcome = player.fight_monster(Card::new(Suit::Spades, 9).expect("card"));
        assert!(!outcome.action_taken);
        assert!(outcome.survived);
        assert_eq!(player, before);
    }

    #[test]
    fn health_bands() {
        assert_eq!(Player::with_hp(20).health_band(), HealthBand::Healthy);
        assert_eq!(Player::with_hp(14).health_band(), HealthBand::Healthy);
        assert_eq!(Player::with_hp(13).health_band(), HealthBand::Wounded);
        assert_eq!(Player::with_hp(9).health_band(), HealthBand::Wounded);
        assert_eq!(Player::with_hp(8).health_band(), HealthBand::Critical);
    }

    #[test]
    fn with_hp_clamps_to_max() {
        assert_eq!(Player::with_hp(40).hp, MAX_HP);
    }
}
