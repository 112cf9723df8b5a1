use scoundrel_core::{GameEngine, MAX_VALUE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObjectiveWeights {
    pub hp: f64,
    pub progress: f64,
    pub weapon: f64,
    pub ceiling: f64,
    pub victory: f64,
    pub defeat: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            hp: 1.0,
            progress: 0.6,
            weapon: 0.5,
            ceiling: 0.3,
            victory: 1000.0,
            defeat: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvalMetrics {
    pub hp: u8,
    pub cards_left: usize,
    pub total_cards: usize,
    pub protection: u8,
    /// Highest monster the weapon can still take; `None` when unarmed.
    pub reach: Option<u8>,
    pub game_over: bool,
    pub victory: bool,
}

impl EvalMetrics {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let slot = engine.weapon_slot();
        let reach = slot
            .weapon()
            .map(|_| slot.last_monster().map(|card| card.value).unwrap_or(MAX_VALUE));
        Self {
            hp: engine.player().hp,
            cards_left: engine.deck().len() + engine.room().occupied(),
            total_cards: engine.total_cards(),
            protection: slot.protection_value(),
            reach,
            game_over: engine.is_game_over(),
            victory: engine.victory(),
        }
    }

    pub fn cleared(&self) -> usize {
        self.total_cards.saturating_sub(self.cards_left)
    }
}

pub fn evaluate(metrics: EvalMetrics, weights: ObjectiveWeights) -> f64 {
    if metrics.victory {
        return weights.victory + metrics.hp as f64;
    }
    if metrics.game_over {
        return -weights.defeat;
    }
    weights.hp * metrics.hp as f64
        + weights.progress * metrics.cleared() as f64
        + weights.weapon * metrics.protection as f64
        + weights.ceiling * metrics.reach.unwrap_or(0) as f64
}
