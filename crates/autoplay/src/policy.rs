use crate::{evaluate, EvalMetrics, ObjectiveWeights, PolicyKind};
use scoundrel_core::{Command, EventBus, GameEngine, RngState};

pub trait Policy {
    fn name(&self) -> &'static str;

    /// Picks one of `legal`, or `None` to give up.
    fn choose(&mut self, engine: &GameEngine, legal: &[Command]) -> Option<Command>;
}

pub fn build_policy(kind: PolicyKind, seed: u64) -> Box<dyn Policy> {
    match kind {
        PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
        PolicyKind::Greedy => Box::new(GreedyPolicy::default()),
    }
}

#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: RngState,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RngState::from_seed(seed ^ 0x5EED),
        }
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, _engine: &GameEngine, legal: &[Command]) -> Option<Command> {
        if legal.is_empty() {
            return None;
        }
        let idx = (self.rng.next_u64() % legal.len() as u64) as usize;
        legal.get(idx).copied()
    }
}

/// One-step lookahead on a cloned engine. The clone shares the deck order, so
/// this is an optimistic baseline rather than a fair player.
#[derive(Debug, Clone, Default)]
pub struct GreedyPolicy {
    pub weights: ObjectiveWeights,
}

impl GreedyPolicy {
    pub fn score(&self, engine: &GameEngine, command: Command) -> f64 {
        let mut probe = engine.clone();
        let mut scratch = EventBus::default();
        probe.apply(command, &mut scratch);
        evaluate(EvalMetrics::from_engine(&probe), self.weights)
    }
}

impl Policy for GreedyPolicy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose(&mut self, engine: &GameEngine, legal: &[Command]) -> Option<Command> {
        let mut best: Option<(Command, f64)> = None;
        for command in legal {
            let value = self.score(engine, *command);
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((*command, value)),
            }
        }
        best.map(|(command, _)| command)
    }
}
