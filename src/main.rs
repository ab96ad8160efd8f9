//! ADU Proforma CLI
//!
//! Computes a single proforma and prints the dashboard summary

use adu_proforma::{
    schedule::{load_schedule, FeeSchedule},
    ProformaInput, ProformaResult, UnitType,
};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "adu_proforma",
    about = "Estimate costs, financing and ROI for an Accessory Dwelling Unit"
)]
struct Cli {
    #[arg(long, default_value = "detached", help = "detached, attached, conversion or jadu")]
    unit_type: UnitType,
    #[arg(long, default_value_t = 1)]
    units: u32,
    #[arg(long, default_value_t = 600.0, help = "Unit size in sq ft")]
    size: f64,
    #[arg(long, default_value_t = 350.0)]
    cost_per_sqft: f64,
    #[arg(long, default_value_t = 2200.0, help = "Monthly rent per unit")]
    rent: f64,
    #[arg(long, default_value_t = 20.0, help = "Down payment in percent")]
    down_payment: f64,
    #[arg(long, default_value_t = 7.0, help = "Loan interest rate in percent")]
    interest_rate: f64,
    #[arg(long, default_value_t = 30)]
    loan_term: u32,
    #[arg(long, default_value_t = 1.1, help = "Property tax rate in percent")]
    property_tax: f64,
    #[arg(long, default_value_t = 1200.0, help = "Annual insurance per unit")]
    insurance: f64,
    #[arg(long, default_value_t = 5.0, help = "Maintenance as percent of rent")]
    maintenance: f64,
    #[arg(long, default_value_t = 5.0, help = "Vacancy as percent of rent")]
    vacancy: f64,
    #[arg(long, default_value_t = 3.0, help = "Annual rent increase in percent")]
    rent_increase: f64,

    #[arg(long, help = "Fee schedule CSV; defaults to San Diego 2024/2025")]
    schedule: Option<PathBuf>,
    #[arg(long, help = "Clamp size to the schedule's range for the unit type")]
    clamp: bool,
    #[arg(long, help = "Write the 10-year projection to this CSV file")]
    csv: Option<PathBuf>,
    #[arg(long, help = "Print the full result as JSON instead of the summary")]
    json: bool,
}

impl Cli {
    fn input(&self) -> ProformaInput {
        ProformaInput {
            unit_type: self.unit_type,
            unit_count: self.units,
            nominal_size_sqft: self.size,
            cost_per_sqft: self.cost_per_sqft,
            monthly_rent: self.rent,
            down_payment_pct: self.down_payment,
            interest_rate_pct: self.interest_rate,
            loan_term_years: self.loan_term,
            property_tax_rate_pct: self.property_tax,
            insurance_annual: self.insurance,
            maintenance_pct: self.maintenance,
            vacancy_pct: self.vacancy,
            annual_rent_increase_pct: self.rent_increase,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    generated_at: String,
    schedule: &'a FeeSchedule,
    input: &'a ProformaInput,
    result: &'a ProformaResult,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let schedule = match &cli.schedule {
        Some(path) => load_schedule(path)
            .with_context(|| format!("Failed to load fee schedule {}", path.display()))?,
        None => FeeSchedule::san_diego_2025(),
    };

    let mut input = cli.input();
    if cli.clamp {
        input = input.clamped_to(&schedule);
    }

    let result = adu_proforma::compute_proforma(&input, &schedule)
        .context("Failed to compute proforma")?;

    if let Some(path) = &cli.csv {
        write_projection_csv(path, &result)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    if cli.json {
        let report = Report {
            generated_at: chrono::Utc::now().to_rfc3339(),
            schedule: &schedule,
            input: &input,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&schedule, &result);
    if let Some(path) = &cli.csv {
        println!("\nProjection written to: {}", path.display());
    }
    Ok(())
}

fn print_summary(schedule: &FeeSchedule, result: &ProformaResult) {
    println!("ADU Proforma v0.1.0 ({})", schedule.name);
    println!("======================\n");

    let size_note = if result.unit_count > 1 {
        format!("{} units x {:.0} sq ft", result.unit_count, result.effective_size_sqft)
    } else {
        format!("{:.0} sq ft", result.effective_size_sqft)
    };
    println!("{} ({})", result.unit_type.label(), size_note);
    println!("  {}", result.unit_type.description());
    println!(
        "  Impact fees waived: {}",
        if result.impact_fee_waived { "yes" } else { "no" }
    );
    println!();

    println!("Project Cost:");
    for item in &result.cost_breakdown {
        println!("  {:<14} {:>12}", item.category.label(), format_currency(item.amount));
    }
    println!("  {:<14} {:>12}", "Total", format_currency(result.total_project_cost));
    println!();

    println!("Financing:");
    println!("  Down Payment   {:>12}", format_currency(result.down_payment));
    println!("  Loan Amount    {:>12}", format_currency(result.loan_amount));
    println!("  Mortgage/mo    {:>12}", format_currency(result.monthly_mortgage));
    println!();

    let expenses = &result.monthly_expenses;
    println!("Monthly Operations:");
    println!("  Rent           {:>12}", format_currency(result.total_monthly_rent));
    println!("  Mortgage       {:>12}", format_currency(expenses.mortgage));
    println!("  Property Tax   {:>12}", format_currency(expenses.property_tax));
    println!("  Insurance      {:>12}", format_currency(expenses.insurance));
    println!("  Maintenance    {:>12}", format_currency(expenses.maintenance));
    println!("  Vacancy        {:>12}", format_currency(expenses.vacancy));
    println!("  Cash Flow      {:>12}", format_currency(result.monthly_cash_flow));
    println!();

    println!("Returns:");
    println!("  Annual Cash Flow  {:>12}", format_currency(result.annual_cash_flow));
    println!("  Cash-on-Cash      {:>11.1}%", result.cash_on_cash_return_pct);
    println!("  Payback           {:>12}", result.payback.to_string());
    println!(
        "  10-Year Cash Flow {:>12}",
        format_currency(result.total_projected_cash_flow())
    );
    println!();

    println!("{:>6} {:>12} {:>14} {:>14}", "Year", "Rent/mo", "Annual CF", "Cumulative");
    println!("{}", "-".repeat(50));
    for row in &result.cash_flow_projection {
        println!(
            "{:>6} {:>12} {:>14} {:>14}",
            row.year,
            format_currency(row.monthly_rent),
            format_currency(row.annual_cash_flow),
            format_currency(row.cumulative_cash_flow),
        );
    }
}

fn write_projection_csv(path: &std::path::Path, result: &ProformaResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Year", "MonthlyRent", "AnnualCashFlow", "CumulativeCashFlow"])?;
    for row in &result.cash_flow_projection {
        writer.write_record([
            row.year.to_string(),
            format!("{:.2}", row.monthly_rent),
            format!("{:.2}", row.annual_cash_flow),
            format!("{:.2}", row.cumulative_cash_flow),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Whole dollars with thousands separators, e.g. `-$1,234`
fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
