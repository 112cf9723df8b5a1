use super::GameEngine;
use crate::InvariantViolation;
use std::collections::HashSet;

impl GameEngine {
    /// Audits card conservation and the weapon stack ordering.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::with_capacity(self.total_cards);
        let mut found = 0usize;
        for card in self.all_cards() {
            found += 1;
            if !seen.insert(*card) {
                return Err(InvariantViolation::Duplicate(*card));
            }
        }
        if found != self.total_cards {
            return Err(InvariantViolation::CardCount {
                expected: self.total_cards,
                found,
            });
        }
        let slot = &self.player.weapon_slot;
        if slot.weapon().is_none() && !slot.monsters().is_empty() {
            return Err(InvariantViolation::OrphanStack);
        }
        for pair in slot.monsters().windows(2) {
            if pair[1].value > pair[0].value {
                return Err(InvariantViolation::StackOrder {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{GameEngine, InvariantViolation};

    #[test]
    fn fresh_engine_is_consistent() {
        let engine = GameEngine::from_seed(99);
        assert_eq!(engine.check_invariants(), Ok(()));
        assert_eq!(engine.total_cards(), crate::DECK_SIZE);
    }

    #[test]
    fn violation_messages_name_the_problem() {
        let err = InvariantViolation::CardCount {
            expected: 44,
            found: 43,
        };
        assert_eq!(err.to_string(), "card count drifted: expected 44, found 43");
    }
}
