//! Game loop thread: runs the simulation engine at a fixed 60Hz and
//! publishes snapshots.
//!
//! The engine is created inside the thread so it never crosses threads.
//! Commands arrive via an `mpsc` channel; snapshots are stored in shared
//! state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use subspace_core::config::SimConfig;
use subspace_core::constants::{DT, TICK_RATE};
use subspace_core::state::GameStateSnapshot;
use subspace_sim::SimulationEngine;

use crate::state::GameLoopCommand;

/// Nominal wall-clock duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("subspace-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    log::info!("game loop started (seed {})", config.seed);
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&cmd_rx, &mut engine) {
            break;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick(DT);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            log::debug!("game loop fell behind, resetting tick clock");
            next_tick_time = now;
        }
    }

    log::info!(
        "game loop stopped at tick {} ({:.1}s simulated)",
        engine.time().tick,
        engine.time().elapsed_secs
    );
}

/// Queue everything pending on the channel. Returns false on shutdown.
fn drain_commands(
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    engine: &mut SimulationEngine,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}
