//! Run proformas for every scenario in a CSV file
//!
//! Outputs one summary row per scenario; rows that fail validation are
//! reported with their error instead of aborting the batch

use adu_proforma::{
    input::load_scenarios,
    schedule::{load_schedule, DEFAULT_SCHEDULE_PATH},
    FeeSchedule, ProformaResult, ScenarioRunner,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_scenarios", about = "Batch ADU proformas from a scenario CSV")]
struct Args {
    #[arg(long, default_value = "data/scenarios/sample_scenarios.csv")]
    scenarios: PathBuf,
    #[arg(long, help = "Fee schedule CSV (default: bundled San Diego schedule if present)")]
    schedule: Option<PathBuf>,
    #[arg(long, default_value = "scenario_results.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let schedule = resolve_schedule(args.schedule.as_deref())?;

    let scenarios = load_scenarios(&args.scenarios)
        .with_context(|| format!("Failed to load scenarios from {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::with_schedule(schedule);
    println!("Fee schedule: {}", runner.schedule().name);
    let run_start = Instant::now();
    let results = runner.run_scenarios(&scenarios);
    println!("Proformas complete in {:?}", run_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let failures = write_results(file, &results)?;

    println!("Output written to {}", args.output.display());
    println!(
        "{} succeeded, {} failed, total time {:?}",
        results.len() - failures,
        failures,
        start.elapsed()
    );
    Ok(())
}

const HEADER: [&str; 12] = [
    "ScenarioId",
    "EffectiveSizeSqFt",
    "TotalProjectCost",
    "DownPayment",
    "MonthlyMortgage",
    "MonthlyCashFlow",
    "AnnualCashFlow",
    "CashOnCashPct",
    "PaybackYears",
    "TenYearCashFlow",
    "Year10Cumulative",
    "Error",
];

/// Write one summary row per scenario, returning the number of failed rows
fn write_results<W: Write>(
    out: W,
    results: &[(&str, adu_proforma::Result<ProformaResult>)],
) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;

    let mut failures = 0;
    for (id, result) in results {
        match result {
            Ok(r) => writer.write_record([
                id.to_string(),
                format!("{:.0}", r.effective_size_sqft),
                format!("{:.2}", r.total_project_cost),
                format!("{:.2}", r.down_payment),
                format!("{:.2}", r.monthly_mortgage),
                format!("{:.2}", r.monthly_cash_flow),
                format!("{:.2}", r.annual_cash_flow),
                format!("{:.4}", r.cash_on_cash_return_pct),
                r.payback.years().map(|y| format!("{:.2}", y)).unwrap_or_default(),
                format!("{:.2}", r.total_projected_cash_flow()),
                format!("{:.2}", r.final_cumulative_cash_flow()),
                String::new(),
            ])?,
            Err(e) => {
                failures += 1;
                log::warn!("Scenario {} failed: {}", id, e);
                let mut row = vec![id.to_string()];
                row.extend(std::iter::repeat(String::new()).take(HEADER.len() - 2));
                row.push(e.to_string());
                writer.write_record(&row)?;
            }
        }
    }
    writer.flush()?;
    Ok(failures)
}

fn resolve_schedule(path: Option<&Path>) -> Result<FeeSchedule> {
    if let Some(path) = path {
        return load_schedule(path)
            .with_context(|| format!("Failed to load fee schedule {}", path.display()));
    }

    let default_path = Path::new(DEFAULT_SCHEDULE_PATH);
    if default_path.exists() {
        load_schedule(default_path)
            .with_context(|| format!("Failed to load fee schedule {}", default_path.display()))
    } else {
        Ok(FeeSchedule::san_diego_2025())
    }
}
