use crate::AutoplayError;
use scoundrel_core::Command;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunStatus {
    Victory,
    Defeat,
    MaxSteps,
    NoLegalAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: u32,
    pub action: Command,
    #[serde(default)]
    pub action_detail: Option<String>,
    pub message: String,
    pub hp_before: u8,
    pub hp_after: u8,
    pub deck_before: usize,
    pub deck_after: usize,
    pub room_after: Vec<String>,
    pub weapon_after: Option<String>,
    #[serde(default)]
    pub stack_after: Vec<String>,
    pub outcome_after: Option<String>,
    pub event_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalMetrics {
    pub hp: u8,
    pub deck_left: usize,
    pub room_left: usize,
    pub discarded: usize,
    pub weapon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub steps: u32,
    pub wall_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayResult {
    pub seed: u64,
    pub policy: String,
    pub status: RunStatus,
    pub final_metrics: FinalMetrics,
    #[serde(default)]
    pub steps: Vec<StepRecord>,
    pub summary: SummaryStats,
}

impl AutoplayResult {
    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!("status: {}", run_status_label(self.status)),
            format!("seed: {} policy: {}", self.seed, self.policy),
            format!(
                "final: hp={} deck={} room={} discard={} weapon={}",
                self.final_metrics.hp,
                self.final_metrics.deck_left,
                self.final_metrics.room_left,
                self.final_metrics.discarded,
                self.final_metrics.weapon.as_deref().unwrap_or("-")
            ),
            format!(
                "summary: steps={} wall_ms={}",
                self.summary.steps, self.summary.wall_time_ms
            ),
            String::new(),
            "steps:".to_string(),
        ];
        for step in &self.steps {
            lines.push(format!("  step {:>4} | {}", step.step, step.action.label()));
            if let Some(detail) = step.action_detail.as_ref() {
                lines.push(format!("    card: {detail}"));
            }
            lines.push(format!("    message: {}", step.message));
            lines.push(format!(
                "    hp {} -> {} | deck {} -> {}",
                step.hp_before, step.hp_after, step.deck_before, step.deck_after
            ));
            lines.push(format!(
                "    room: [{}] weapon: {} stack: [{}]",
                step.room_after.join(", "),
                step.weapon_after.as_deref().unwrap_or("-"),
                step.stack_after.join(", ")
            ));
            lines.push(format!("    events: {}", step.event_count));
            if let Some(outcome) = step.outcome_after.as_ref() {
                lines.push(format!("    outcome: {outcome}"));
            }
        }
        lines.join("\n")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRow {
    pub seed: u64,
    pub status: RunStatus,
    pub steps: u32,
    pub hp: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub policy: String,
    pub games: u32,
    pub victories: u32,
    pub defeats: u32,
    pub unfinished: u32,
    pub win_rate: f64,
    pub mean_steps: f64,
    pub rows: Vec<GameRow>,
}

impl BatchSummary {
    pub fn from_results(policy: &str, results: &[AutoplayResult]) -> Self {
        let games = results.len() as u32;
        let count = |status: RunStatus| {
            results
                .iter()
                .filter(|result| result.status == status)
                .count() as u32
        };
        let victories = count(RunStatus::Victory);
        let defeats = count(RunStatus::Defeat);
        let total_steps: u64 = results
            .iter()
            .map(|result| result.summary.steps as u64)
            .sum();
        let (win_rate, mean_steps) = if games == 0 {
            (0.0, 0.0)
        } else {
            (
                victories as f64 / games as f64,
                total_steps as f64 / games as f64,
            )
        };
        Self {
            policy: policy.to_string(),
            games,
            victories,
            defeats,
            unfinished: games - victories - defeats,
            win_rate,
            mean_steps,
            rows: results
                .iter()
                .map(|result| GameRow {
                    seed: result.seed,
                    status: result.status,
                    steps: result.summary.steps,
                    hp: result.final_metrics.hp,
                })
                .collect(),
        }
    }

    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!(
                "policy: {} games: {} victories: {} defeats: {} unfinished: {}",
                self.policy, self.games, self.victories, self.defeats, self.unfinished
            ),
            format!(
                "win rate: {:.1}% mean steps: {:.1}",
                self.win_rate * 100.0,
                self.mean_steps
            ),
        ];
        for row in &self.rows {
            lines.push(format!(
                "  seed {:>20} | {:<13} | steps {:>3} | hp {:>2}",
                row.seed,
                run_status_label(row.status),
                row.steps,
                row.hp
            ));
        }
        lines.join("\n")
    }
}

pub fn run_status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Victory => "Victory",
        RunStatus::Defeat => "Defeat",
        RunStatus::MaxSteps => "MaxSteps",
        RunStatus::NoLegalAction => "NoLegalAction",
    }
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(value)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, report: &str) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, report)?;
    Ok(())
}
