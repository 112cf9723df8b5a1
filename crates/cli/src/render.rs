use scoundrel_core::{Card, CommandResult, EngineSnapshot, Event, Severity};

pub fn print_help() {
    println!("commands:");
    println!("  use <slot> | <slot>   use the card in room slot 1-4");
    println!("  run                   send the room under the deck");
    println!("  discard               drop the weapon and its slain monsters");
    println!("  restart               start a new dungeon");
    println!("  state | events        show the table or recent events");
    println!("  help | quit");
}

pub fn print_result(result: &CommandResult) {
    let tag = match result.severity {
        Severity::Info => "info",
        Severity::Warning => "warn",
        Severity::Danger => "danger",
    };
    println!("[{tag}] {}", result.message);
}

pub fn print_snapshot(snapshot: &EngineSnapshot) {
    println!(
        "hp {}/{} | deck {} | discard {}{}",
        snapshot.hp,
        snapshot.max_hp,
        snapshot.deck_size,
        snapshot.discard_size,
        if snapshot.just_ran { " | ran last room" } else { "" }
    );
    let room: Vec<String> = snapshot
        .room
        .iter()
        .map(|view| {
            format!(
                "{}:{}{}",
                view.slot + 1,
                view.card.short_label(),
                if view.usable { "" } else { "(x)" }
            )
        })
        .collect();
    println!("room: [{}]", room.join("  "));
    match snapshot.weapon {
        Some(weapon) => {
            let stack: Vec<String> = snapshot.monsters.iter().map(Card::short_label).collect();
            println!(
                "weapon: {} | stack: [{}]",
                weapon.short_label(),
                stack.join(" ")
            );
        }
        None => println!("weapon: none"),
    }
    if snapshot.game_over {
        if snapshot.victory {
            println!("*** victory *** (restart to play again)");
        } else {
            println!("*** you died *** (restart to play again)");
        }
    }
}

pub fn describe_event(event: &Event) -> String {
    match event {
        Event::RoomFilled { placed, deck_left } => {
            let cards: Vec<String> = placed
                .iter()
                .map(|(slot, card)| format!("{}:{}", slot + 1, card.short_label()))
                .collect();
            format!("room filled [{}], deck {deck_left}", cards.join(" "))
        }
        Event::HealthRestored { card, amount, hp } => {
            format!("{} restored {amount}, hp {hp}", card.short_label())
        }
        Event::WeaponEquipped { weapon, discarded } => format!(
            "equipped {}, {} cards discarded",
            weapon.short_label(),
            discarded.len()
        ),
        Event::MonsterSlain {
            monster,
            damage,
            hp,
            stacked,
        } => format!(
            "slew {} for {damage} damage, hp {hp}{}",
            monster.short_label(),
            if *stacked { ", stacked" } else { "" }
        ),
        Event::FightRejected { monster, last } => format!(
            "{} refused, stack ends at {}",
            monster.short_label(),
            last.short_label()
        ),
        Event::RanFromRoom { returned } => format!("ran, {} cards returned", returned.len()),
        Event::WeaponDiscarded { cards } => format!("discarded {} weapon cards", cards.len()),
        Event::PlayerDied { killer } => format!("killed by {}", killer.short_label()),
        Event::Victory => "victory".to_string(),
        Event::Restarted { deck_size } => format!("restarted with {deck_size} cards"),
    }
}
