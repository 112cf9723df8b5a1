use scoundrel_core::{
    Card, CardKind, CommandResult, Event, EventBus, GameEngine, RngState, Severity, ROOM_SLOTS,
};
use std::collections::{HashMap, VecDeque};

pub const DEFAULT_RUN_SEED: u64 = 0xC0FFEE;
const MAX_EVENT_LOG: usize = 200;
const HIGHLIGHT_TICKS: u8 = 8;

/// Transient card decoration. Lives only in the UI, keyed by card identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Dealt,
    Refused,
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HpFlash {
    pub delta: i16,
    pub ticks_left: u8,
}

pub struct App {
    pub engine: GameEngine,
    pub events: EventBus,
    pub cursor: usize,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub status_severity: Severity,
    pub highlights: HashMap<Card, (Highlight, u8)>,
    pub hp_flash: Option<HpFlash>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(seed: u64) -> Self {
        let engine = GameEngine::new(RngState::from_seed(seed));
        let mut app = Self {
            engine,
            events: EventBus::default(),
            cursor: 0,
            event_log: VecDeque::new(),
            status_line: "Enter the dungeon.".to_string(),
            status_severity: Severity::Info,
            highlights: HashMap::new(),
            hp_flash: None,
            show_help: false,
            should_quit: false,
        };
        app.push_event_line(format!("seed {seed}"));
        let dealt: Vec<Card> = app.engine.room().cards().map(|(_, card)| *card).collect();
        for card in dealt {
            app.highlight(card, Highlight::Dealt);
        }
        app.normalize_cursor();
        app
    }

    pub fn on_tick(&mut self) {
        self.highlights.retain(|_, (_, ticks)| {
            *ticks = ticks.saturating_sub(1);
            *ticks > 0
        });
        if let Some(flash) = self.hp_flash.as_mut() {
            flash.ticks_left = flash.ticks_left.saturating_sub(1);
            if flash.ticks_left == 0 {
                self.hp_flash = None;
            }
        }
    }

    pub fn move_cursor(&mut self, right: bool) {
        let occupied: Vec<usize> = self.engine.room().cards().map(|(slot, _)| slot).collect();
        if occupied.is_empty() {
            return;
        }
        let pos = occupied.iter().position(|slot| *slot == self.cursor);
        let next = match (pos, right) {
            (Some(idx), true) => (idx + 1) % occupied.len(),
            (Some(idx), false) => (idx + occupied.len() - 1) % occupied.len(),
            (None, _) => 0,
        };
        self.cursor = occupied[next];
    }

    pub fn use_cursor(&mut self) {
        if self.engine.is_game_over() {
            self.restart();
            return;
        }
        self.use_slot(self.cursor);
    }

    pub fn use_slot(&mut self, slot: usize) {
        let result = self.engine.use_card(slot, &mut self.events);
        self.finish(result);
    }

    pub fn run_from_room(&mut self) {
        let result = self.engine.run_from_room(&mut self.events);
        self.finish(result);
    }

    pub fn discard_weapon(&mut self) {
        let result = self.engine.discard_weapon(&mut self.events);
        self.finish(result);
    }

    pub fn restart(&mut self) {
        self.highlights.clear();
        self.hp_flash = None;
        let result = self.engine.restart(&mut self.events);
        self.finish(result);
    }

    pub fn next_hint(&self) -> &'static str {
        if self.engine.is_game_over() {
            return "press n or enter to play again";
        }
        if self.engine.just_ran() {
            return "you fled the last room: face this one";
        }
        if self.engine.room().occupied() <= 1 {
            return "clear the last card to draw";
        }
        "pick a card, run, or drop your weapon"
    }

    pub fn card_label(&self, card: &Card) -> String {
        let role = match card.kind() {
            CardKind::Health => "heal",
            CardKind::Weapon => "weapon",
            CardKind::Monster => {
                if self.engine.weapon_slot().can_add_monster(card) {
                    "monster"
                } else {
                    "monster (too strong for stack)"
                }
            }
        };
        format!("{} {} {}", card.short_label(), card.value, role)
    }

    pub fn highlight_of(&self, card: &Card) -> Option<Highlight> {
        self.highlights.get(card).map(|(kind, _)| *kind)
    }

    fn finish(&mut self, result: CommandResult) {
        self.status_line = result.message;
        self.status_severity = result.severity;
        self.flush_events();
        self.normalize_cursor();
    }

    fn flush_events(&mut self) {
        let drained: Vec<Event> = self.events.drain().collect();
        for event in drained {
            let line = match &event {
                Event::RoomFilled { placed, deck_left } => {
                    for (_, card) in placed {
                        self.highlight(*card, Highlight::Dealt);
                    }
                    let cards: Vec<String> = placed
                        .iter()
                        .map(|(slot, card)| format!("{slot}:{}", card.short_label()))
                        .collect();
                    format!("dealt [{}], {deck_left} left in deck", cards.join(" "))
                }
                Event::HealthRestored { card, amount, hp } => {
                    self.flash(*amount as i16);
                    format!("drank {} (+{amount}) hp {hp}", card.short_label())
                }
                Event::WeaponEquipped { weapon, discarded } => {
                    if discarded.is_empty() {
                        format!("equipped {}", weapon.short_label())
                    } else {
                        format!(
                            "equipped {}, discarded {} old cards",
                            weapon.short_label(),
                            discarded.len()
                        )
                    }
                }
                Event::MonsterSlain {
                    monster,
                    damage,
                    hp,
                    stacked,
                } => {
                    if *damage > 0 {
                        self.flash(-(*damage as i16));
                    }
                    if *stacked {
                        self.highlight(*monster, Highlight::Stacked);
                    }
                    format!("slew {} taking {damage}, hp {hp}", monster.short_label())
                }
                Event::FightRejected { monster, last } => {
                    self.highlight(*monster, Highlight::Refused);
                    format!(
                        "{} is stronger than {} on the stack",
                        monster.short_label(),
                        last.short_label()
                    )
                }
                Event::RanFromRoom { returned } => {
                    format!("ran, {} cards under the deck", returned.len())
                }
                Event::WeaponDiscarded { cards } => {
                    format!("dropped weapon and {} monsters", cards.len().saturating_sub(1))
                }
                Event::PlayerDied { killer } => format!("killed by {killer}"),
                Event::Victory => "the dungeon is cleared".to_string(),
                Event::Restarted { deck_size } => format!("new dungeon, {deck_size} cards"),
            };
            self.push_event_line(line);
        }
    }

    fn push_event_line(&mut self, line: String) {
        self.event_log.push_back(line);
        while self.event_log.len() > MAX_EVENT_LOG {
            self.event_log.pop_front();
        }
    }

    fn highlight(&mut self, card: Card, kind: Highlight) {
        self.highlights.insert(card, (kind, HIGHLIGHT_TICKS));
    }

    fn flash(&mut self, delta: i16) {
        self.hp_flash = Some(HpFlash {
            delta,
            ticks_left: HIGHLIGHT_TICKS,
        });
    }

    fn normalize_cursor(&mut self) {
        if self.cursor >= ROOM_SLOTS || self.engine.room().get(self.cursor).is_none() {
            self.cursor = self
                .engine
                .room()
                .cards()
                .map(|(slot, _)| slot)
                .next()
                .unwrap_or(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_over_occupied_slots() {
        let mut app = App::new(DEFAULT_RUN_SEED);
        assert_eq!(app.cursor, 0);
        app.move_cursor(false);
        assert_eq!(app.cursor, 3);
        app.move_cursor(true);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn highlights_decay_on_tick() {
        let mut app = App::new(7);
        assert_eq!(app.highlights.len(), 4);
        for _ in 0..HIGHLIGHT_TICKS {
            app.on_tick();
        }
        assert!(app.highlights.is_empty());
    }

    #[test]
    fn invalid_command_sets_status() {
        let mut app = App::new(7);
        app.run_from_room();
        app.run_from_room();
        assert_eq!(app.status_line, "Cannot run from rooms consecutively!");
        assert_eq!(app.status_severity, Severity::Danger);
    }

    #[test]
    fn event_log_is_bounded() {
        let mut app = App::new(1);
        for idx in 0..(MAX_EVENT_LOG + 20) {
            app.push_event_line(format!("line {idx}"));
        }
        assert_eq!(app.event_log.len(), MAX_EVENT_LOG);
    }
}
