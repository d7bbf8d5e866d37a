// gamehub-core/src/bin/hub_probe.rs

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use gamehub_core::parser::{CommandParser, ProbeCommand};
use gamehub_core::{open_ledger, Frame, HubConfig, HubShell, Input, Registry, RenderSurface};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;
use tracing_subscriber::EnvFilter;

const HELP: &str = "commands: play <id> | click <n> | key <k> | press <button> | guess <n> | \
mode <m> | fav <id> | wait <ms> | menu | theme | list | frame | exit";

fn init_tracing() {
    // RUST_LOG=gamehub_core=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .try_init();
}

/// Prints every frame as one JSON line on stdout.
struct JsonLines;

impl RenderSurface for JsonLines {
    fn present(&mut self, frame: &Frame) {
        match serde_json::to_string(frame) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!(error = %e, "frame not serializable"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    eprintln!("[hub_probe] starting… type 'help' for commands");

    let config = match std::env::args().nth(1) {
        Some(path) => HubConfig::load(&PathBuf::from(&path))
            .with_context(|| format!("loading config from {path}"))?,
        None => HubConfig::default(),
    };

    let ledger = open_ledger(&config);
    let (mut shell, mut events) = HubShell::new(Registry::builtin(), ledger, config);
    shell.add_surface(Box::new(JsonLines));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\n[hub_probe] Ctrl+C received, exiting…");
                break;
            }

            Some(event) = events.recv() => {
                shell.handle_event(event);
            }

            line = lines.next_line() => {
                let Some(line) = line.context("stdin read failed")? else {
                    eprintln!("[hub_probe] stdin closed, exiting…");
                    break;
                };

                match CommandParser::parse(&line) {
                    ProbeCommand::Exit => break,
                    ProbeCommand::Wait(ms) => {
                        let deadline = Instant::now() + Duration::from_millis(ms);
                        loop {
                            tokio::select! {
                                _ = tokio::time::sleep_until(deadline) => break,
                                Some(event) = events.recv() => {
                                    shell.handle_event(event);
                                }
                            }
                        }
                    }
                    command => run(&mut shell, command),
                }
            }
        }
    }

    shell.show_menu();
    Ok(())
}

fn run(shell: &mut HubShell, command: ProbeCommand) {
    let result = match command {
        ProbeCommand::Play(id) => shell.start_game(&id),
        ProbeCommand::Click(cell) => shell.handle_input(Input::Cell(cell)),
        ProbeCommand::Key(key) => {
            if !shell.handle_key(&key) {
                eprintln!("[hub_probe] key `{key}` ignored");
            }
            Ok(())
        }
        ProbeCommand::Press(button) => shell.handle_input(Input::Button(button)),
        ProbeCommand::Guess(text) => shell.handle_input(Input::Text(text)),
        ProbeCommand::Mode(mode) => shell.set_mode(mode),
        ProbeCommand::Favorite(id) => shell.toggle_favorite(&id).map(|_| ()),
        ProbeCommand::Menu => {
            shell.show_menu();
            Ok(())
        }
        ProbeCommand::Theme => {
            shell.toggle_theme();
            Ok(())
        }
        ProbeCommand::List => {
            for game in shell.registry().summaries() {
                let modes: Vec<&str> = game.modes.iter().map(|m| m.as_str()).collect();
                println!("{:<20} {:<22} {:?} [{}]", game.id, game.title, game.category, modes.join(", "));
            }
            Ok(())
        }
        ProbeCommand::Frame => {
            JsonLines.present(&shell.frame());
            Ok(())
        }
        ProbeCommand::Help => {
            eprintln!("{HELP}");
            Ok(())
        }
        ProbeCommand::Invalid(msg) => {
            eprintln!("[hub_probe] {msg}");
            Ok(())
        }
        ProbeCommand::Empty | ProbeCommand::Exit | ProbeCommand::Wait(_) => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("[hub_probe] {e}");
    }
}
