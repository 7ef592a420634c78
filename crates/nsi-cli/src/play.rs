use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use nsi_core::CampusData;
use nsi_engine::{GameConfig, GameEvent, GameSession};
use nsi_placement::{ItemStore, PlacementConfig, PlacementScheduler};
use tracing::debug;

use crate::render;

/// Options for one game, taken from the command line.
pub struct PlayOptions {
    pub campus: Option<PathBuf>,
    pub seed: Option<u64>,
    pub interval_secs: u64,
    pub grace_secs: u64,
}

pub fn run(options: &PlayOptions) -> Result<(), String> {
    let data = match &options.campus {
        Some(path) => CampusData::from_path(path),
        None => CampusData::builtin(),
    }
    .map_err(|e| format!("failed to load campus: {e}"))?;
    let (graph, items, puzzles) = data
        .into_parts()
        .map_err(|e| format!("invalid campus: {e}"))?;

    let mut placement = PlacementConfig::default()
        .with_interval(Duration::from_secs(options.interval_secs))
        .with_shutdown_grace(Duration::from_secs(options.grace_secs));
    if let Some(seed) = options.seed {
        placement = placement.with_seed(seed);
    }

    let store = ItemStore::new(items);
    let mut scheduler = PlacementScheduler::new(store.clone(), placement);
    scheduler
        .start()
        .map_err(|e| format!("failed to start scantron placement: {e}"))?;

    let mut session = GameSession::new(graph, store, puzzles, GameConfig::default());
    let result = command_loop(&mut session);
    scheduler.stop();
    result
}

fn command_loop(session: &mut GameSession) -> Result<(), String> {
    render::events(&session.intro(), session);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while let Some(prompt) = session.prompt() {
        render::prompt(prompt);
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            debug!("stdin closed");
            println!();
            render::events(&[GameEvent::Goodbye], session);
            break;
        }

        let events = session.handle(&line).map_err(|e| e.to_string())?;
        render::events(&events, session);
    }

    Ok(())
}
