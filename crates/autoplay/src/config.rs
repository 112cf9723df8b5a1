use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PolicyKind {
    Random,
    Greedy,
}

impl PolicyKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Greedy => "greedy",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub games: u32,
    pub max_steps: u32,
    pub policy: PolicyKind,
    /// Keep per-step records in results. Batch runs usually turn this off.
    pub record_steps: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            games: 1,
            max_steps: 500,
            policy: PolicyKind::Greedy,
            record_steps: true,
        }
    }
}
