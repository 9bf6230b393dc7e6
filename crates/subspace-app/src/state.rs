//! Application state shared between the launcher and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use subspace_core::commands::PlayerCommand;
use subspace_core::config::SimConfig;
use subspace_core::state::GameStateSnapshot;

use crate::game_loop;

/// Commands sent from the launcher to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Errors from driving the game loop.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("simulation already running")]
    AlreadyRunning,

    #[error("simulation not started")]
    NotStarted,

    #[error("game loop disconnected")]
    Disconnected,

    #[error("shared state lock poisoned")]
    Poisoned,

    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Shared application state.
///
/// - `mpsc::Sender` sits behind a `Mutex` so the state is `Sync`
/// - `Mutex<Option<...>>` for handles that only exist once started
/// - `Arc<Mutex<...>>` for the latest snapshot, shared with the loop thread
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Join handle of the running loop thread.
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }

    /// Start the simulation. Spawns the game loop thread if not already running.
    pub fn start(&self, config: SimConfig) -> Result<(), AppError> {
        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        if tx_lock.is_some() {
            return Err(AppError::AlreadyRunning);
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())?;
        *tx_lock = Some(cmd_tx);
        *self.loop_thread.lock().map_err(|_| AppError::Poisoned)? = Some(handle);
        Ok(())
    }

    /// Send a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|_| AppError::Disconnected),
            None => Err(AppError::NotStarted),
        }
    }

    /// Latest snapshot, if the loop has ticked at least once.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, AppError> {
        let lock = self.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
        Ok(lock.clone())
    }

    /// Stop the loop thread and wait for it to exit.
    pub fn stop(&self) -> Result<(), AppError> {
        let tx = self
            .command_tx
            .lock()
            .map_err(|_| AppError::Poisoned)?
            .take()
            .ok_or(AppError::NotStarted)?;
        // A closed channel means the loop already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);

        let handle = self.loop_thread.lock().map_err(|_| AppError::Poisoned)?.take();
        if let Some(handle) = handle {
            handle.join().map_err(|_| AppError::Disconnected)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!state.is_running());
    }

    #[test]
    fn test_commands_rejected_before_start() {
        let state = AppState::new();
        assert!(matches!(
            state.send_command(PlayerCommand::Fire),
            Err(AppError::NotStarted)
        ));
        assert!(matches!(state.stop(), Err(AppError::NotStarted)));
    }

    #[test]
    fn test_start_twice_rejected() {
        let state = AppState::new();
        state.start(SimConfig::default()).unwrap();
        assert!(state.is_running());
        assert!(matches!(
            state.start(SimConfig::default()),
            Err(AppError::AlreadyRunning)
        ));
        state.stop().unwrap();
        assert!(!state.is_running());
    }
}
