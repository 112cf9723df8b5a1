//! Property tests over arbitrary command sequences.

use proptest::prelude::*;
use scoundrel_core::{Command, EventBus, GameEngine, RuleViolation, DECK_SIZE};

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        8 => (0usize..6).prop_map(|slot| Command::UseCard { slot }),
        3 => Just(Command::RunFromRoom),
        2 => Just(Command::DiscardWeapon),
        1 => Just(Command::DrawRoom),
        1 => Just(Command::Restart),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: no card is ever lost or duplicated.
    #[test]
    fn prop_cards_are_conserved(
        seed in any::<u64>(),
        commands in prop::collection::vec(command_strategy(), 1..120),
    ) {
        let mut engine = GameEngine::from_seed(seed);
        let mut events = EventBus::default();
        for command in commands {
            engine.apply(command, &mut events);
            prop_assert_eq!(engine.check_invariants(), Ok(()));
            prop_assert_eq!(engine.all_cards().count(), DECK_SIZE);
        }
    }

    /// Property: the weapon stack never rises.
    #[test]
    fn prop_monster_stack_never_rises(
        seed in any::<u64>(),
        commands in prop::collection::vec(command_strategy(), 1..120),
    ) {
        let mut engine = GameEngine::from_seed(seed);
        let mut events = EventBus::default();
        for command in commands {
            engine.apply(command, &mut events);
            let monsters = engine.weapon_slot().monsters();
            for pair in monsters.windows(2) {
                prop_assert!(pair[1].value <= pair[0].value);
            }
            if engine.weapon_slot().weapon().is_none() {
                prop_assert!(monsters.is_empty());
            }
        }
    }

    /// Property: a run straight after a run is refused without side effects.
    #[test]
    fn prop_second_run_is_a_no_op(
        seed in any::<u64>(),
        commands in prop::collection::vec(command_strategy(), 0..60),
    ) {
        let mut engine = GameEngine::from_seed(seed);
        let mut events = EventBus::default();
        for command in commands {
            engine.apply(command, &mut events);
        }
        let first = engine.run_from_room(&mut events);
        prop_assume!(first.success);
        let before = engine.snapshot();
        let second = engine.run_from_room(&mut events);
        prop_assert!(!second.success);
        prop_assert_eq!(second.violation, Some(RuleViolation::ConsecutiveRun));
        prop_assert_eq!(engine.snapshot(), before);
    }

    /// Property: HP stays within bounds and zero HP always means defeat.
    #[test]
    fn prop_hp_bounds_and_terminal_states(
        seed in any::<u64>(),
        commands in prop::collection::vec(command_strategy(), 1..120),
    ) {
        let mut engine = GameEngine::from_seed(seed);
        let mut events = EventBus::default();
        for command in commands {
            let was_over = engine.is_game_over();
            let before = engine.snapshot();
            let result = engine.apply(command, &mut events);
            let player = engine.player();
            prop_assert!(player.hp <= player.max_hp);
            if player.hp == 0 {
                prop_assert!(engine.is_game_over());
                prop_assert!(!engine.victory());
            }
            if was_over && command != Command::Restart {
                prop_assert!(!result.success);
                prop_assert_eq!(engine.snapshot(), before);
            }
            prop_assert_eq!(result.game_over, engine.is_game_over());
        }
    }
}
