use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use utmkit::record::{read_locations_from_path, resolve_all, write_resolved};
use utmkit::{EngineConfig, Result, Transformer};

const USAGE: &str = "usage: utmkit <locations.csv> [config.json]";

fn run(csv_path: &str, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => EngineConfig::from_json_file(path)?.apply_env()?,
        None => EngineConfig::from_env()?,
    };
    let transformer = Transformer::new(config);

    let locations = read_locations_from_path(csv_path)?;
    let resolved = resolve_all(&locations, &transformer);

    let placed = resolved.iter().flatten().count();
    let fallbacks = resolved.iter().flatten().filter(|r| r.zone_fallback).count();
    let invalid = resolved.iter().flatten().filter(|r| !r.valid).count();
    info!(
        total = locations.len(),
        placed,
        fallbacks,
        invalid,
        operating_zone = %config.default_zone,
        "resolved {}",
        csv_path
    );

    write_resolved(io::stdout().lock(), &locations, &resolved)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("utmkit=info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(csv_path) = args.first() else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    match run(csv_path, args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed to resolve {}", csv_path);
            ExitCode::FAILURE
        }
    }
}
