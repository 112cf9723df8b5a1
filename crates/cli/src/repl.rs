use crate::render::{describe_event, print_help, print_result, print_snapshot};
use anyhow::{Context, Result};
use scoundrel_core::{Command, Event, EventBus, GameEngine};
use std::io::{self, BufRead, Write};
use tracing::debug;

const EVENT_HISTORY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Game(Command),
    State,
    Events,
    Help,
    Quit,
}

/// Parses one input line. Slots are typed 1-4 and mapped to room slots 0-3.
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>, String> {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = parts.collect();
    let command = match cmd {
        "use" | "u" => {
            let Some(value) = args.first() else {
                return Err("usage: use <slot 1-4>".to_string());
            };
            ReplCommand::Game(Command::UseCard {
                slot: parse_slot(value)?,
            })
        }
        "run" | "r" => ReplCommand::Game(Command::RunFromRoom),
        "discard" | "d" | "w" => ReplCommand::Game(Command::DiscardWeapon),
        "restart" | "n" => ReplCommand::Game(Command::Restart),
        "state" | "s" => ReplCommand::State,
        "events" | "e" => ReplCommand::Events,
        "help" | "h" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other if other.chars().all(|ch| ch.is_ascii_digit()) => {
            ReplCommand::Game(Command::UseCard {
                slot: parse_slot(other)?,
            })
        }
        other => return Err(format!("unknown command: {other} (try help)")),
    };
    Ok(Some(command))
}

fn parse_slot(value: &str) -> Result<usize, String> {
    let number = value
        .parse::<usize>()
        .map_err(|_| format!("slot must be a number, got {value}"))?;
    if number == 0 {
        return Err("slots are numbered from 1".to_string());
    }
    Ok(number - 1)
}

pub fn run(seed: u64) -> Result<()> {
    let mut engine = GameEngine::from_seed(seed);
    let mut events = EventBus::default();
    let mut history: Vec<Event> = Vec::new();
    println!("seed: {seed}");
    print_help();
    print_snapshot(&engine.snapshot());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().context("flush prompt")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("read command")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        debug!(?command, "repl command");
        match command {
            ReplCommand::Game(command) => {
                let result = engine.apply(command, &mut events);
                print_result(&result);
                history.extend(events.drain());
                if history.len() > EVENT_HISTORY {
                    history.drain(..history.len() - EVENT_HISTORY);
                }
                print_snapshot(&engine.snapshot());
            }
            ReplCommand::State => print_snapshot(&engine.snapshot()),
            ReplCommand::Events => {
                if history.is_empty() {
                    println!("no events yet");
                }
                for event in &history {
                    println!("event: {}", describe_event(event));
                }
            }
            ReplCommand::Help => print_help(),
            ReplCommand::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_use_with_one_based_slot() {
        assert_eq!(
            parse_command("use 2"),
            Ok(Some(ReplCommand::Game(Command::UseCard { slot: 1 })))
        );
        assert_eq!(
            parse_command("4"),
            Ok(Some(ReplCommand::Game(Command::UseCard { slot: 3 })))
        );
    }

    #[test]
    fn parses_plain_commands() {
        assert_eq!(
            parse_command("run"),
            Ok(Some(ReplCommand::Game(Command::RunFromRoom)))
        );
        assert_eq!(
            parse_command(" discard "),
            Ok(Some(ReplCommand::Game(Command::DiscardWeapon)))
        );
        assert_eq!(
            parse_command("restart"),
            Ok(Some(ReplCommand::Game(Command::Restart)))
        );
        assert_eq!(parse_command("quit"), Ok(Some(ReplCommand::Quit)));
        assert_eq!(parse_command(""), Ok(None));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("use").is_err());
        assert!(parse_command("use x").is_err());
        assert!(parse_command("0").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn out_of_range_slot_reaches_engine() {
        let Ok(Some(ReplCommand::Game(command))) = parse_command("9") else {
            panic!("expected a game command");
        };
        let mut engine = GameEngine::from_seed(1);
        let result = engine.apply(command, &mut EventBus::default());
        assert!(!result.success);
        assert_eq!(result.message, "Invalid card selection!");
    }
}
