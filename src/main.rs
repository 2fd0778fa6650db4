//! roomsim command line runner.
//!
//! Loads a level document into a room built from the stock prefabs, runs it
//! for a number of frames inside a bevy_ecs world and writes the exported
//! level state back out.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level level.json --ticks 120 --export out.json
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use futures_lite::future;
use log::{error, info};

use roomsim::events::frame::frame_log_observer;
use roomsim::game::default_prefabs;
use roomsim::resources::assets::FileAssets;
use roomsim::resources::debugmode::DebugProbe;
use roomsim::resources::room::Room;
use roomsim::resources::roomconfig::RoomConfig;
use roomsim::resources::worldtime::WorldTime;
use roomsim::systems::room::room_tick_system;
use roomsim::systems::stateconfig::StateConfig;
use roomsim::systems::time::update_world_time;

/// Run a level room headless and export its state.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Level document (JSON StateConfig).
    #[arg(long, value_name = "PATH")]
    level: PathBuf,

    /// Room configuration file.
    #[arg(long, value_name = "PATH", default_value = "./room.ini")]
    config: PathBuf,

    /// Background image, relative to the level's directory.
    #[arg(long, value_name = "PATH", default_value = "background.png")]
    background: String,

    /// Frames to simulate.
    #[arg(long, default_value_t = 60)]
    ticks: u32,

    /// Write the exported state here instead of stdout.
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = RoomConfig::with_path(&cli.config);
    config.load_from_file().ok(); // ignore errors, use defaults

    let text = std::fs::read_to_string(&cli.level)
        .map_err(|e| format!("Failed to read level {}: {}", cli.level.display(), e))?;
    let document = StateConfig::from_json(&text).map_err(|e| e.to_string())?;

    let root = cli
        .level
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let name = cli
        .level
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "room".to_string());
    let debug = config.debug;
    let tick_seconds = config.tick_seconds;

    let prefabs = default_prefabs();
    let (mut room, report) = future::block_on(Room::from_state_config(
        name,
        cli.background.clone(),
        Arc::new(FileAssets::new(root)),
        config,
        &document,
        &prefabs,
    ));
    if !report.skipped.is_empty() {
        info!("Skipped unknown types: {:?}", report.skipped);
    }
    future::block_on(room.load()).map_err(|e| e.to_string())?;

    let debug_rx = if debug {
        let (probe, rx) = DebugProbe::channel();
        room.attach_debug(probe);
        Some(rx)
    } else {
        None
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(room);
    world.spawn(Observer::new(frame_log_observer));
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(room_tick_system);

    for _ in 0..cli.ticks {
        update_world_time(&mut world, tick_seconds);
        update.run(&mut world);
        if let Some(rx) = &debug_rx {
            for event in rx.try_iter() {
                log::debug!("debug: {:?}", event);
            }
        }
    }

    let room = world.resource::<Room>();
    info!("Simulated {} frames in room '{}'", room.frame(), room.name);
    let exported = room
        .export_state_config()
        .to_json_pretty()
        .map_err(|e| e.to_string())?;

    match cli.export {
        Some(path) => std::fs::write(&path, exported)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?,
        None => println!("{exported}"),
    }
    Ok(())
}
