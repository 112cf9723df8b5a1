//! Seeded headless play over the core engine API.

mod config;
mod error;
mod objective;
mod policy;
mod simulator;
mod trace;

pub use config::*;
pub use error::*;
pub use objective::*;
pub use policy::*;
pub use simulator::*;
pub use trace::*;

use std::time::Instant;
use tracing::info;

/// Plays one game from `config.seed`.
pub fn run_autoplay(config: &AutoplayConfig) -> Result<AutoplayResult, AutoplayError> {
    let mut policy = build_policy(config.policy, config.seed);
    run_with_policy(config, config.seed, policy.as_mut())
}

pub fn run_with_policy(
    config: &AutoplayConfig,
    seed: u64,
    policy: &mut dyn Policy,
) -> Result<AutoplayResult, AutoplayError> {
    let started = Instant::now();
    let mut sim = Simulator::from_seed(seed);
    let mut steps = Vec::new();
    let status = loop {
        if sim.engine.is_game_over() {
            break if sim.engine.victory() {
                RunStatus::Victory
            } else {
                RunStatus::Defeat
            };
        }
        if sim.steps() >= config.max_steps {
            break RunStatus::MaxSteps;
        }
        let legal = sim.legal_actions();
        let Some(command) = policy.choose(&sim.engine, &legal) else {
            break RunStatus::NoLegalAction;
        };
        let record = sim.step(command)?;
        if config.record_steps {
            steps.push(record);
        }
    };

    let snapshot = sim.engine.snapshot();
    info!(
        seed,
        policy = policy.name(),
        status = run_status_label(status),
        steps = sim.steps(),
        hp = snapshot.hp,
        "autoplay finished"
    );
    Ok(AutoplayResult {
        seed,
        policy: policy.name().to_string(),
        status,
        final_metrics: FinalMetrics {
            hp: snapshot.hp,
            deck_left: snapshot.deck_size,
            room_left: snapshot.room.len(),
            discarded: snapshot.discard_size,
            weapon: snapshot.weapon.map(|card| card.short_label()),
        },
        steps,
        summary: SummaryStats {
            steps: sim.steps(),
            wall_time_ms: started.elapsed().as_millis() as u64,
        },
    })
}

/// Plays `config.games` games on consecutive seeds starting at `config.seed`.
pub fn run_batch(config: &AutoplayConfig) -> Result<BatchSummary, AutoplayError> {
    let mut results = Vec::with_capacity(config.games as usize);
    for offset in 0..config.games {
        let seed = config.seed.wrapping_add(offset as u64);
        let mut policy = build_policy(config.policy, seed);
        results.push(run_with_policy(config, seed, policy.as_mut())?);
    }
    Ok(BatchSummary::from_results(config.policy.name(), &results))
}
