use clap::Parser;
use std::io::{self, Write};
use stride_core::*;

#[derive(Parser)]
#[command(name = "stride", version)]
#[command(about = "Workout metrics summary for sample sensor packages", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let config_path = Config::locate();
    let config = match &config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };
    stride_core::logging::init_with_level(&config.logging.level);

    match &config_path {
        Some(path) => tracing::debug!("Loaded config from {:?}", path),
        None => tracing::debug!("No config file found, using defaults"),
    }

    let output = run(get_sample_packages(), config.output.format)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Dispatch every package in order and render the reports
///
/// Fails on the first package that cannot be dispatched; nothing is
/// rendered in that case.
fn run(packages: &[Package], format: OutputFormat) -> Result<String> {
    let mut reports = Vec::with_capacity(packages.len());
    for package in packages {
        let training = read_package(package.code, &package.data)?;
        reports.push(training.show_training_info());
    }
    tracing::info!("Computed {} reports", reports.len());

    render_reports(&reports, format)
}
