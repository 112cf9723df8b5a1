use super::{Command, CommandResult, GameEngine, GameStatus};
use crate::{
    CardKind, Deck, DiscardPile, Event, EventBus, Player, Room, RuleViolation, Severity,
    DECK_SIZE,
};
use tracing::{debug, info};

impl GameEngine {
    pub fn apply(&mut self, command: Command, events: &mut EventBus) -> CommandResult {
        match command {
            Command::DrawRoom => self.draw_room(events),
            Command::UseCard { slot } => self.use_card(slot, events),
            Command::RunFromRoom => self.run_from_room(events),
            Command::DiscardWeapon => self.discard_weapon(events),
            Command::Restart => self.restart(events),
        }
    }

    /// Tops the room up from the deck, honouring the refill threshold.
    pub fn draw_room(&mut self, events: &mut EventBus) -> CommandResult {
        if let Err(violation) = self.ensure_playing() {
            return self.reject(violation);
        }
        let drawn = self.refill_room(events);
        debug!(drawn, deck_left = self.deck.len(), "draw room");
        self.check_victory(events);
        let message = if drawn == 0 {
            "The room stays as it is.".to_string()
        } else {
            format!("Drew {drawn} cards into the room.")
        };
        self.accept(message, Severity::Info)
    }

    pub fn use_card(&mut self, slot: usize, events: &mut EventBus) -> CommandResult {
        if let Err(violation) = self.ensure_playing() {
            return self.reject(violation);
        }
        let Some(card) = self.room.get(slot).copied() else {
            return self.reject(RuleViolation::InvalidSelection(slot));
        };
        debug!(slot, card = %card, kind = ?card.kind(), "use card");

        let (message, severity) = match card.kind() {
            CardKind::Health => {
                self.room.remove_card(&card);
                let amount = self.player.use_health_potion(&card);
                self.discard.push(card);
                events.push(Event::HealthRestored {
                    card,
                    amount,
                    hp: self.player.hp,
                });
                (format!("Restored {amount} HP"), Severity::Info)
            }
            CardKind::Weapon => {
                self.room.remove_card(&card);
                let displaced = self.player.weapon_slot.set_weapon(card);
                self.discard.extend(displaced.iter().copied());
                events.push(Event::WeaponEquipped {
                    weapon: card,
                    discarded: displaced,
                });
                (format!("Equipped {card}"), Severity::Info)
            }
            CardKind::Monster => {
                let ceiling = self.player.weapon_slot.last_monster().copied();
                let outcome = self.player.fight_monster(card);
                if !outcome.action_taken {
                    let last = ceiling.unwrap_or(card);
                    events.push(Event::FightRejected { monster: card, last });
                    return self.reject(RuleViolation::MonsterTooStrong {
                        monster: card,
                        last,
                    });
                }
                self.room.remove_card(&card);
                if !outcome.stacked {
                    self.discard.push(card);
                }
                events.push(Event::MonsterSlain {
                    monster: card,
                    damage: outcome.damage,
                    hp: self.player.hp,
                    stacked: outcome.stacked,
                });
                if !outcome.survived {
                    self.status = GameStatus::GameOver { victory: false };
                    events.push(Event::PlayerDied { killer: card });
                    info!(killer = %card, discarded = self.discard.len(), "player died");
                    return self.accept("You died!".to_string(), Severity::Danger);
                }
                let protection = self.player.weapon_slot.protection_value();
                if outcome.damage == 0 {
                    ("Your weapon fully protected you!".to_string(), Severity::Info)
                } else if outcome.stacked {
                    (
                        format!(
                            "Weapon ({protection}) vs Monster ({}): Took {} damage!",
                            card.value, outcome.damage
                        ),
                        Severity::Danger,
                    )
                } else {
                    (
                        format!(
                            "No weapon! Defeated monster but took full {} damage!",
                            outcome.damage
                        ),
                        Severity::Danger,
                    )
                }
            }
        };

        self.refill_room(events);
        self.just_ran = false;
        if self.check_victory(events) {
            return self.accept("Victory! The dungeon is cleared.".to_string(), Severity::Info);
        }
        self.accept(message, severity)
    }

    /// Sends the whole room, shuffled, under the deck and deals a new one.
    /// Two runs in a row are not allowed.
    pub fn run_from_room(&mut self, events: &mut EventBus) -> CommandResult {
        if let Err(violation) = self.ensure_playing() {
            return self.reject(violation);
        }
        if self.just_ran {
            return self.reject(RuleViolation::ConsecutiveRun);
        }
        if self.room.is_empty() {
            return self.reject(RuleViolation::EmptyRoom);
        }
        let returned = self.room.drain();
        debug!(returned = returned.len(), "run from room");
        self.deck.return_to_bottom(returned.clone(), &mut self.rng);
        events.push(Event::RanFromRoom { returned });
        self.refill_room(events);
        self.just_ran = true;
        self.accept("Running from the room...".to_string(), Severity::Info)
    }

    pub fn discard_weapon(&mut self, events: &mut EventBus) -> CommandResult {
        if let Err(violation) = self.ensure_playing() {
            return self.reject(violation);
        }
        if self.player.weapon_slot.weapon().is_none() {
            return self.reject(RuleViolation::NoWeapon);
        }
        let cards = self.player.weapon_slot.discard();
        debug!(cards = cards.len(), "discard weapon");
        self.discard.extend(cards.iter().copied());
        events.push(Event::WeaponDiscarded { cards });
        self.just_ran = false;
        self.accept("Discarded weapon".to_string(), Severity::Info)
    }

    /// Throws the session away and deals a fresh shuffled dungeon. Allowed at
    /// any time, including after the game has ended.
    pub fn restart(&mut self, events: &mut EventBus) -> CommandResult {
        let mut deck = Deck::scoundrel();
        deck.shuffle(&mut self.rng);
        self.deck = deck;
        self.room = Room::new();
        self.player = Player::new();
        self.discard = DiscardPile::default();
        self.just_ran = false;
        self.status = GameStatus::Playing;
        self.total_cards = DECK_SIZE;
        info!(seed = self.rng.seed(), "restart");
        events.push(Event::Restarted {
            deck_size: self.deck.len(),
        });
        self.refill_room(events);
        self.accept("A new dungeon awaits.".to_string(), Severity::Info)
    }

    fn ensure_playing(&self) -> Result<(), RuleViolation> {
        match self.status {
            GameStatus::Playing => Ok(()),
            GameStatus::GameOver { .. } => Err(RuleViolation::GameOver),
        }
    }

    fn refill_room(&mut self, events: &mut EventBus) -> usize {
        let placed = self.room.refill(&mut self.deck);
        let drawn = placed.len();
        if drawn > 0 {
            events.push(Event::RoomFilled {
                placed,
                deck_left: self.deck.len(),
            });
        }
        drawn
    }

    fn check_victory(&mut self, events: &mut EventBus) -> bool {
        if self.deck.is_empty() && self.room.is_empty() {
            self.status = GameStatus::GameOver { victory: true };
            events.push(Event::Victory);
            info!(hp = self.player.hp, "dungeon cleared");
            return true;
        }
        false
    }

    fn accept(&self, message: String, severity: Severity) -> CommandResult {
        CommandResult {
            success: true,
            message,
            severity,
            game_over: self.is_game_over(),
            victory: self.victory(),
            violation: None,
        }
    }

    fn reject(&self, violation: RuleViolation) -> CommandResult {
        debug!(%violation, "rule violation");
        CommandResult {
            success: false,
            message: violation.to_string(),
            severity: violation.severity(),
            game_over: self.is_game_over(),
            victory: self.victory(),
            violation: Some(violation),
        }
    }
}
