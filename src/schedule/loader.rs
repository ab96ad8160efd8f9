//! CSV-based fee schedule loader
//!
//! Schedules are two-column `key,value` files. Keys not present in the file keep
//! their San Diego value.

use super::{FeeSchedule, PermitFeeMode};
use crate::error::{ProformaError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default location of the bundled San Diego schedule
pub const DEFAULT_SCHEDULE_PATH: &str = "data/fee_schedules/san_diego_2025.csv";

/// Load a fee schedule from a CSV file
pub fn load_schedule(path: &Path) -> Result<FeeSchedule> {
    let file = File::open(path)?;
    let schedule = load_schedule_from_reader(file)?;
    log::debug!("Loaded fee schedule '{}' from {}", schedule.name, path.display());
    Ok(schedule)
}

/// Load a fee schedule from any CSV reader (header row `key,value`)
pub fn load_schedule_from_reader<R: Read>(reader: R) -> Result<FeeSchedule> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut schedule = FeeSchedule::san_diego_2025();

    for result in reader.records() {
        let record = result?;
        let key = record.get(0).unwrap_or("").trim();
        let value = record.get(1).unwrap_or("").trim();
        if key.is_empty() {
            continue;
        }
        apply_entry(&mut schedule, key, value)?;
    }

    schedule.validate()?;
    Ok(schedule)
}

fn apply_entry(schedule: &mut FeeSchedule, key: &str, value: &str) -> Result<()> {
    match key {
        "name" => schedule.name = value.to_string(),
        "permit_fee_mode" => {
            schedule.permit_fee_mode = PermitFeeMode::parse(value).ok_or_else(|| {
                ProformaError::Schedule(format!("Unknown permit_fee_mode: {}", value))
            })?;
        }
        _ => {
            let slot = numeric_slot(schedule, key)
                .ok_or_else(|| ProformaError::Schedule(format!("Unknown schedule key: {}", key)))?;
            *slot = value.parse().map_err(|_| {
                ProformaError::Schedule(format!("{} is not a number: {}", key, value))
            })?;
        }
    }
    Ok(())
}

fn numeric_slot<'a>(schedule: &'a mut FeeSchedule, key: &str) -> Option<&'a mut f64> {
    let slot = match key {
        "min_size_sqft" => &mut schedule.min_size_sqft,
        "max_size_sqft" => &mut schedule.max_size_sqft,
        "jadu_max_size_sqft" => &mut schedule.jadu_max_size_sqft,
        "setback_feet" => &mut schedule.setback_feet,
        "max_height_feet" => &mut schedule.max_height_feet,
        "impact_fee_waiver_threshold_sqft" => &mut schedule.impact_fee_waiver_threshold_sqft,
        "school_fee_threshold_sqft" => &mut schedule.school_fee_threshold_sqft,
        "school_fee_per_sqft" => &mut schedule.school_fee_per_sqft,
        "water_fee" => &mut schedule.water_fee,
        "sewer_fee" => &mut schedule.sewer_fee,
        "permit_fee_base" => &mut schedule.permit_fee_base,
        "permit_fee_max" => &mut schedule.permit_fee_max,
        "permit_fee_size_cap" => &mut schedule.permit_fee_size_cap,
        _ => return None,
    };
    Some(slot)
}
