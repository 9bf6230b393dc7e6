//! Headless run: command-line options, the drive loop, and the summary.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use subspace_core::config::{ConfigError, SimConfig};
use subspace_core::enums::GamePhase;
use subspace_core::state::GameStateSnapshot;

use crate::autopilot::Autopilot;
use crate::game_loop::TICK_DURATION;
use crate::state::{AppError, AppState};

/// Wall-clock run length when none is given.
pub const DEFAULT_RUN_SECS: f64 = 10.0;

/// Launcher errors.
#[derive(thiserror::Error, Debug)]
pub enum LaunchError {
    #[error("usage: subspace [config.toml] [seconds]")]
    Usage,

    #[error("invalid run length '{0}'")]
    InvalidDuration(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    App(#[from] AppError),
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchOptions {
    pub config_path: Option<PathBuf>,
    pub run_secs: f64,
}

impl LaunchOptions {
    /// Parse `[config.toml] [seconds]`. A lone numeric argument is the run length.
    pub fn from_args<I, S>(args: I) -> Result<Self, LaunchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let (config_path, secs) = match args.as_slice() {
            [] => (None, None),
            [one] if one.parse::<f64>().is_ok() => (None, Some(one.as_str())),
            [path] => (Some(PathBuf::from(path)), None),
            [path, secs] => (Some(PathBuf::from(path)), Some(secs.as_str())),
            _ => return Err(LaunchError::Usage),
        };

        let run_secs = match secs {
            None => DEFAULT_RUN_SECS,
            Some(s) => match s.parse::<f64>() {
                Ok(v) if v > 0.0 && run_deadline(v).is_some() => v,
                _ => return Err(LaunchError::InvalidDuration(s.to_string())),
            },
        };

        Ok(Self {
            config_path,
            run_secs,
        })
    }

    /// Load the configured file, or defaults when none was given.
    pub fn load_config(&self) -> Result<SimConfig, LaunchError> {
        match &self.config_path {
            Some(path) => {
                log::info!("loading config from {}", path.display());
                Ok(SimConfig::load_from_file(path)?)
            }
            None => Ok(SimConfig::default()),
        }
    }
}

/// What a headless run achieved.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub wave: u32,
    pub adversaries_destroyed: u32,
    pub projectiles_fired: u32,
    pub phase: GamePhase,
}

impl RunSummary {
    pub fn from_snapshot(snapshot: &GameStateSnapshot) -> Self {
        Self {
            ticks: snapshot.time.tick,
            elapsed_secs: snapshot.time.elapsed_secs,
            wave: snapshot.wave,
            adversaries_destroyed: snapshot.score.adversaries_destroyed,
            projectiles_fired: snapshot.score.projectiles_fired,
            phase: snapshot.phase,
        }
    }
}

/// Run the game loop for `run_secs` of wall-clock time under the autopilot.
/// Stops early on game over.
pub fn run_headless(config: SimConfig, run_secs: f64) -> Result<Option<RunSummary>, LaunchError> {
    let deadline =
        run_deadline(run_secs).ok_or_else(|| LaunchError::InvalidDuration(run_secs.to_string()))?;
    let app = AppState::new();
    app.start(config)?;

    let pilot = Autopilot::default();
    let mut last_tick = None;

    while Instant::now() < deadline {
        std::thread::sleep(TICK_DURATION);
        let Some(snapshot) = app.snapshot()? else {
            continue;
        };
        if last_tick == Some(snapshot.time.tick) {
            continue;
        }
        last_tick = Some(snapshot.time.tick);

        if snapshot.phase == GamePhase::GameOver {
            log::info!("player destroyed, ending run early");
            break;
        }
        for command in pilot.decide(&snapshot) {
            app.send_command(command)?;
        }
    }

    app.stop()?;
    let summary = app.snapshot()?.as_ref().map(RunSummary::from_snapshot);
    Ok(summary)
}

/// Wall-clock instant `run_secs` from now, if representable.
fn run_deadline(run_secs: f64) -> Option<Instant> {
    let run_for = Duration::try_from_secs_f64(run_secs).ok()?;
    Instant::now().checked_add(run_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_uses_defaults() {
        let opts = LaunchOptions::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(opts.config_path, None);
        assert_eq!(opts.run_secs, DEFAULT_RUN_SECS);
    }

    #[test]
    fn test_config_and_seconds() {
        let opts = LaunchOptions::from_args(["arena.toml", "2.5"]).unwrap();
        assert_eq!(opts.config_path, Some(PathBuf::from("arena.toml")));
        assert_eq!(opts.run_secs, 2.5);

        let opts = LaunchOptions::from_args(["arena.toml"]).unwrap();
        assert_eq!(opts.run_secs, DEFAULT_RUN_SECS);
    }

    #[test]
    fn test_lone_number_is_duration() {
        let opts = LaunchOptions::from_args(["30"]).unwrap();
        assert_eq!(opts.config_path, None);
        assert_eq!(opts.run_secs, 30.0);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(matches!(
            LaunchOptions::from_args(["a.toml", "soon"]),
            Err(LaunchError::InvalidDuration(_))
        ));
        assert!(matches!(
            LaunchOptions::from_args(["a.toml", "-1"]),
            Err(LaunchError::InvalidDuration(_))
        ));
        assert!(matches!(
            LaunchOptions::from_args(["1e20"]),
            Err(LaunchError::InvalidDuration(_))
        ));
        assert!(matches!(
            LaunchOptions::from_args(["a.toml", "inf"]),
            Err(LaunchError::InvalidDuration(_))
        ));
        assert!(matches!(
            LaunchOptions::from_args(["a", "b", "c"]),
            Err(LaunchError::Usage)
        ));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let opts = LaunchOptions::from_args(["/nonexistent/subspace.toml", "1"]).unwrap();
        assert!(matches!(opts.load_config(), Err(LaunchError::Config(_))));
    }

    #[test]
    fn test_unrepresentable_run_length_is_error() {
        assert!(matches!(
            run_headless(SimConfig::default(), 1e20),
            Err(LaunchError::InvalidDuration(_))
        ));
        assert!(matches!(
            run_headless(SimConfig::default(), f64::NAN),
            Err(LaunchError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_short_headless_run() {
        let summary = run_headless(SimConfig::default(), 0.3).unwrap().unwrap();
        assert!(summary.ticks > 0);
        assert!(summary.wave >= 1);
        assert_ne!(summary.phase, GamePhase::Paused);
    }
}
