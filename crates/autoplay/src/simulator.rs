use crate::{AutoplayError, EvalMetrics, StepRecord};
use scoundrel_core::{Card, Command, EventBus, GameEngine};
use tracing::{debug, error};

#[derive(Debug)]
pub struct Simulator {
    pub engine: GameEngine,
    pub events: EventBus,
    steps: u32,
}

impl Simulator {
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            events: EventBus::default(),
            steps: 0,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameEngine::from_seed(seed))
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn metrics(&self) -> EvalMetrics {
        EvalMetrics::from_engine(&self.engine)
    }

    /// Commands the engine would accept right now. Restart is never offered.
    pub fn legal_actions(&self) -> Vec<Command> {
        let engine = &self.engine;
        if engine.is_game_over() {
            return Vec::new();
        }
        let slot = engine.weapon_slot();
        let mut actions: Vec<Command> = engine
            .room()
            .cards()
            .filter(|(_, card)| !card.is_monster() || slot.can_add_monster(card))
            .map(|(idx, _)| Command::UseCard { slot: idx })
            .collect();
        if engine.can_run() {
            actions.push(Command::RunFromRoom);
        }
        if engine.can_discard_weapon() {
            actions.push(Command::DiscardWeapon);
        }
        actions
    }

    pub fn step(&mut self, command: Command) -> Result<StepRecord, AutoplayError> {
        let before = self.engine.snapshot();
        let result = self.engine.apply(command, &mut self.events);
        if !result.success {
            return Err(AutoplayError::InvalidAction(format!(
                "{}: {}",
                command.label(),
                result.message
            )));
        }
        self.steps += 1;
        if let Err(source) = self.engine.check_invariants() {
            error!(step = self.steps, %source, "engine invariant broken");
            return Err(AutoplayError::Invariant {
                step: self.steps,
                source,
            });
        }
        let event_count = self.events.drain().count();
        let after = self.engine.snapshot();
        debug!(step = self.steps, action = %command.label(), hp = after.hp, "autoplay step");
        Ok(StepRecord {
            step: self.steps,
            action: command,
            action_detail: describe_action(&before.room, command),
            message: result.message,
            hp_before: before.hp,
            hp_after: after.hp,
            deck_before: before.deck_size,
            deck_after: after.deck_size,
            room_after: after.room.iter().map(|view| view.card.short_label()).collect(),
            weapon_after: after.weapon.map(|card| card.short_label()),
            stack_after: after.monsters.iter().map(Card::short_label).collect(),
            outcome_after: outcome_label(result.game_over, result.victory),
            event_count,
        })
    }
}

fn describe_action(room: &[scoundrel_core::RoomCardView], command: Command) -> Option<String> {
    let Command::UseCard { slot } = command else {
        return None;
    };
    room.iter()
        .find(|view| view.slot == slot)
        .map(|view| format!("{} ({})", view.card, view.kind.label()))
}

fn outcome_label(game_over: bool, victory: bool) -> Option<String> {
    match (game_over, victory) {
        (true, true) => Some("victory".to_string()),
        (true, false) => Some("defeat".to_string()),
        _ => None,
    }
}
