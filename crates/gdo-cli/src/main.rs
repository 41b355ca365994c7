//! Command-line driver for the Universal GDO plugin.
//!
//! Loads a platform configuration, registers it with the in-process mock
//! host and toggles every discovered door a number of times, logging each
//! characteristic read and write.
//!
//! ```text
//! gdo-cli [CONFIG_PATH] [CYCLES]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gdo_accessory::{MockHost, register};
use gdo_core::{Characteristic, CharacteristicValue, PlatformConfig, TargetDoorState};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CYCLES: u32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "gdo-cli",
    version,
    about = "Drive simulated garage doors through open/close cycles"
)]
struct Args {
    /// Platform configuration JSON file (defaults to a single door)
    config_path: Option<PathBuf>,

    /// Number of toggles to run per door
    #[arg(default_value_t = DEFAULT_CYCLES)]
    cycles: u32,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config(path: Option<&Path>) -> Result<PlatformConfig> {
    match path {
        Some(path) => PlatformConfig::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => {
            info!("No configuration given, using defaults");
            Ok(PlatformConfig::default())
        }
    }
}

async fn run_cycles(host: &MockHost, display_name: &str, cycles: u32) -> Result<()> {
    for characteristic in [
        Characteristic::Manufacturer,
        Characteristic::Model,
        Characteristic::SerialNumber,
    ] {
        let value = host.get(display_name, characteristic).await?;
        info!("{display_name} {characteristic}: {value}");
    }

    for cycle in 1..=cycles {
        let target = host.get(display_name, Characteristic::TargetDoorState).await?;
        let requested = TargetDoorState::try_from(&target)?.toggled();

        info!("Cycle {cycle}/{cycles}: requesting {requested}");
        host.set(
            display_name,
            Characteristic::TargetDoorState,
            CharacteristicValue::from(requested),
        )
        .await?;

        host.get(display_name, Characteristic::CurrentDoorState).await?;
        host.get(display_name, Characteristic::ObstructionDetected).await?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = load_config(args.config_path.as_deref())?;

    let mut host = MockHost::new();
    register(&mut host, config).context("failed to register platform")?;

    let names: Vec<String> = host
        .accessories()
        .map(|accessory| accessory.display_name().to_string())
        .collect();

    for name in &names {
        run_cycles(&host, name, args.cycles)
            .await
            .with_context(|| format!("door cycle failed for {name}"))?;
    }

    info!("Completed {} cycles on {} doors", args.cycles, names.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("gdo-cli").chain(raw.iter().copied()))
    }

    #[test]
    fn test_parse_defaults() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.config_path, None);
        assert_eq!(parsed.cycles, DEFAULT_CYCLES);
    }

    #[test]
    fn test_parse_path_and_cycles() {
        let parsed = args(&["gdo.json", "5"]).unwrap();
        assert_eq!(parsed.config_path, Some(PathBuf::from("gdo.json")));
        assert_eq!(parsed.cycles, 5);
    }

    #[test]
    fn test_parse_rejects_bad_cycles() {
        assert!(args(&["gdo.json", "many"]).is_err());
        assert!(args(&["gdo.json", "-1"]).is_err());
    }

    #[test]
    fn test_parse_rejects_extra_arguments() {
        assert!(args(&["gdo.json", "1", "extra"]).is_err());
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let err = args(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_load_default_config() {
        let config = load_config(None).unwrap();
        assert_eq!(config, PlatformConfig::default());
    }

    #[test]
    fn test_load_missing_config_has_context() {
        let err = load_config(Some(Path::new("/nonexistent/gdo.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to load configuration"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_cycles_ends_where_it_started() {
        let mut host = MockHost::new();
        register(&mut host, PlatformConfig::default()).unwrap();

        run_cycles(&host, "Garage Door", 2).await.unwrap();

        let current = host
            .get("Garage Door", Characteristic::CurrentDoorState)
            .await
            .unwrap();
        assert_eq!(
            current,
            CharacteristicValue::from(gdo_core::CurrentDoorState::Closed)
        );
    }
}
