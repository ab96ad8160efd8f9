//! Load proforma scenarios from CSV

use super::{ProformaInput, UnitType};
use crate::error::Result;
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// A named set of inputs, one row of a scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub input: ProformaInput,
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioId")]
    scenario_id: String,
    #[serde(rename = "UnitType")]
    unit_type: String,
    #[serde(rename = "UnitCount")]
    unit_count: u32,
    #[serde(rename = "SizeSqFt")]
    size_sqft: f64,
    #[serde(rename = "CostPerSqFt")]
    cost_per_sqft: f64,
    #[serde(rename = "MonthlyRent")]
    monthly_rent: f64,
    #[serde(rename = "DownPaymentPct")]
    down_payment_pct: f64,
    #[serde(rename = "InterestRatePct")]
    interest_rate_pct: f64,
    #[serde(rename = "LoanTermYears")]
    loan_term_years: u32,
    #[serde(rename = "PropertyTaxRatePct")]
    property_tax_rate_pct: f64,
    #[serde(rename = "InsuranceAnnual")]
    insurance_annual: f64,
    #[serde(rename = "MaintenancePct")]
    maintenance_pct: f64,
    #[serde(rename = "VacancyPct")]
    vacancy_pct: f64,
    #[serde(rename = "AnnualRentIncreasePct")]
    annual_rent_increase_pct: f64,
}

impl CsvRow {
    fn into_scenario(self) -> Result<Scenario> {
        let unit_type: UnitType = self.unit_type.parse()?;

        Ok(Scenario {
            id: self.scenario_id,
            input: ProformaInput {
                unit_type,
                unit_count: self.unit_count,
                nominal_size_sqft: self.size_sqft,
                cost_per_sqft: self.cost_per_sqft,
                monthly_rent: self.monthly_rent,
                down_payment_pct: self.down_payment_pct,
                interest_rate_pct: self.interest_rate_pct,
                loan_term_years: self.loan_term_years,
                property_tax_rate_pct: self.property_tax_rate_pct,
                insurance_annual: self.insurance_annual,
                maintenance_pct: self.maintenance_pct,
                vacancy_pct: self.vacancy_pct,
                annual_rent_increase_pct: self.annual_rent_increase_pct,
            },
        })
    }
}

/// Load scenarios from a CSV file
///
/// Rows are parsed but not validated; validation happens per scenario when the
/// proforma is computed so one bad row does not sink a batch.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>> {
    let file = std::fs::File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader with a header row
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario()?);
    }

    log::debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProformaError;

    const HEADER: &str = "ScenarioId,UnitType,UnitCount,SizeSqFt,CostPerSqFt,MonthlyRent,DownPaymentPct,InterestRatePct,LoanTermYears,PropertyTaxRatePct,InsuranceAnnual,MaintenancePct,VacancyPct,AnnualRentIncreasePct";

    #[test]
    fn test_load_scenarios() {
        let data = format!(
            "{}\nbase,detached,1,600,350,2200,20,7,30,1.1,1200,5,5,3\nduplex-jadu,jadu,2,800,300,1700,25,6.5,15,1.1,900,5,4,2\n",
            HEADER
        );
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].id, "base");
        assert_eq!(scenarios[0].input, ProformaInput::default());
        assert_eq!(scenarios[1].input.unit_type, UnitType::Jadu);
        assert_eq!(scenarios[1].input.unit_count, 2);
        assert_eq!(scenarios[1].input.loan_term_years, 15);
    }

    #[test]
    fn test_bundled_sample_scenarios() {
        let scenarios = load_scenarios(Path::new("data/scenarios/sample_scenarios.csv")).unwrap();
        assert_eq!(scenarios.len(), 9);
        assert_eq!(scenarios[0].input, ProformaInput::default());
        assert!(scenarios.iter().all(|s| s.input.validate().is_ok()));
    }

    #[test]
    fn test_unknown_unit_type() {
        let data = format!("{}\nx,treehouse,1,600,350,2200,20,7,30,1.1,1200,5,5,3\n", HEADER);
        assert!(matches!(
            load_scenarios_from_reader(data.as_bytes()),
            Err(ProformaError::UnknownUnitType(_))
        ));
    }

    #[test]
    fn test_malformed_row() {
        let data = format!("{}\nx,detached,one,600,350,2200,20,7,30,1.1,1200,5,5,3\n", HEADER);
        assert!(matches!(
            load_scenarios_from_reader(data.as_bytes()),
            Err(ProformaError::Csv(_))
        ));
    }
}
