use std::io::{stderr, stdout, BufWriter, IsTerminal, Write};
use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use quarterly_returns::engine::AsyncEngine;
use quarterly_returns::output::{write_rows, write_summary};
use quarterly_returns::pipeline::PipelineConfig;
use quarterly_returns::storage::ReportStorage;

const CONFIG_ENV: &str = "QUARTERLY_RETURNS_CONFIG";

#[derive(Debug, Clone, Copy)]
enum OutputMode {
    Rows,
    Summary
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: quarterly-returns [input].json|csv [rows|summary:optional] [log_level:optional] > [output].csv");
        eprintln!("Available log levels: off, error, warn, info, debug, trace (default: error)");
        eprintln!("Set {CONFIG_ENV} to a TOML file to override the pipeline configuration");
        exit(1);
    }

    let path = &args[1];
    let mode = args.get(2)
        .map(|s| parse_output_mode(s)).unwrap_or(OutputMode::Rows);
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(config_path) => PipelineConfig::load(Path::new(&config_path))?,
        None => PipelineConfig::default()
    };

    let storage = Arc::new(ReportStorage::new());
    let engine = AsyncEngine::new(storage.clone()).with_config(config);

    let timer = Instant::now();
    engine.run(path).await?;
    let duration = timer.elapsed();

    info!("Aggregated {} investors in: {duration:?}", storage.len());

    let reports = storage.sorted();
    let mut output = BufWriter::new(stdout().lock());

    match mode {
        OutputMode::Rows => write_rows(&mut output, &reports)?,
        OutputMode::Summary => write_summary(&mut output, &reports)?
    }

    output.flush()?;

    Ok(())
}

fn parse_output_mode(mode: &str) -> OutputMode {
    match mode.to_lowercase().as_str() {
        "rows" => OutputMode::Rows,
        "summary" => OutputMode::Summary,
        _ => {
            eprintln!("Invalid output mode '{}', defaulting to 'rows'", mode);
            OutputMode::Rows
        }
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        eprintln!("Invalid log level '{level}', defaulting to 'error'");
        LevelFilter::ERROR
    })
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the CSV output
    let diagnostics_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_ansi(stderr().is_terminal())
        .with_filter(level);

    tracing_subscriber::registry()
        .with(diagnostics_log)
        .init();
}
