//! Writes `./icons.json` for the icons under `./png` and `./svg`.
//!
//! Usage:
//!   icon_manifest

use icon_manifest::ManifestConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ManifestConfig::default();
    match icon_manifest::generate(&config) {
        Ok(manifest) => {
            print!("{}", manifest.summary(&config.output_path));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
