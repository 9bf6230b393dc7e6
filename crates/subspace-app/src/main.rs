use std::process::ExitCode;

use subspace_app::launcher::{self, LaunchOptions};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match LaunchOptions::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = match options.load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match launcher::run_headless(config, options.run_secs) {
        Ok(Some(summary)) => {
            log::info!(
                "run finished: {} ticks ({:.1}s), wave {}, {} adversaries destroyed, {} projectiles fired, phase {:?}",
                summary.ticks,
                summary.elapsed_secs,
                summary.wave,
                summary.adversaries_destroyed,
                summary.projectiles_fired,
                summary.phase
            );
            ExitCode::SUCCESS
        }
        Ok(None) => {
            log::warn!("run finished before the first tick");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
