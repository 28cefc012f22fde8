//! `scholar-stats report|top|validate-config` — file plumbing around the engine.

use std::path::{Path, PathBuf};

use scholar_stats::{parse_records, EngineConfig, Metric, ResearcherRecord, StatsEngine, Taxonomy};
use serde::Serialize;

use crate::CliError;

pub fn cmd_report(
    records_path: PathBuf,
    taxonomy_path: Option<PathBuf>,
    strict_taxonomy: bool,
    config_path: Option<PathBuf>,
    limit: Option<usize>,
    output_file: Option<PathBuf>,
    compact: bool,
) -> Result<(), CliError> {
    if output_file.as_deref() == Some(records_path.as_path()) {
        return Err(CliError::args("--output must not overwrite the records file"));
    }

    let mut config = match config_path {
        Some(path) => EngineConfig::from_toml(&read_file(&path)?)?,
        None => EngineConfig::default(),
    };
    if let Some(limit) = limit {
        config.report.top_limit = limit;
    }
    let engine = StatsEngine::new(config)?;

    let records = load_records(&records_path)?;
    let taxonomy = match taxonomy_path {
        Some(path) if strict_taxonomy => Taxonomy::from_json(&read_file(&path)?)?,
        // Malformed taxonomy degrades to zero research areas.
        Some(path) => Taxonomy::from_json_or_empty(&read_file(&path)?),
        None => {
            log::warn!("no --taxonomy given; research areas will be empty");
            Taxonomy::new()
        }
    };

    let report = engine.report(&records, &taxonomy);
    let json = to_json(&report, compact)?;

    match output_file {
        Some(path) => {
            std::fs::write(&path, format!("{json}\n"))
                .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))?;
            log::info!("wrote report for {} records to {}", records.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn cmd_top(records_path: PathBuf, metric: Metric, limit: usize, compact: bool) -> Result<(), CliError> {
    let records = load_records(&records_path)?;
    let engine = StatsEngine::default();
    let top = match metric {
        Metric::HIndex => engine.top_by_hindex(&records, limit),
        Metric::Citations => engine.top_by_citations(&records, limit),
    };
    println!("{}", to_json(&top, compact)?);
    Ok(())
}

pub fn cmd_validate_config(config_path: PathBuf) -> Result<(), CliError> {
    let engine = StatsEngine::new(EngineConfig::from_toml(&read_file(&config_path)?)?)?;
    let config = engine.config();
    eprintln!(
        "ok: {} academia / {} industry keywords, {} h-index / {} citation buckets, {} tracks, top {}",
        config.sector.academia_keywords.len(),
        config.sector.industry_keywords.len(),
        config.buckets.hindex.len(),
        config.buckets.citations.len(),
        config.taxonomy.tracks.len(),
        config.report.top_limit,
    );
    Ok(())
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))
}

fn load_records(path: &Path) -> Result<Vec<ResearcherRecord>, CliError> {
    let records = parse_records(&read_file(path)?)?;
    log::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String, CliError> {
    let result = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    result.map_err(|e| CliError::internal(format!("cannot serialize output: {e}")))
}
