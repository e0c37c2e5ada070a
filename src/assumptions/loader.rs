//! CSV-based return table loader
//!
//! Loads risk-profile return assumptions from data/assumptions/risk_returns.csv

use std::io::Read;
use std::path::Path;

use csv::Reader;
use log::{debug, info};

use super::{CategoryReturns, ReturnTable, RiskProfile};
use crate::error::{ProjectionError, Result};

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

/// File name of the return table inside the assumptions directory
pub const RISK_RETURNS_FILE: &str = "risk_returns.csv";

/// Raw CSV row matching risk_returns.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "RiskProfile")]
    risk_profile: String,
    #[serde(rename = "Tech")]
    tech: f64,
    #[serde(rename = "Complementary")]
    complementary: f64,
    #[serde(rename = "Benchmark")]
    benchmark: f64,
}

impl CsvRow {
    fn into_entry(self) -> Result<(RiskProfile, CategoryReturns)> {
        let profile: RiskProfile = self.risk_profile.parse()?;

        for (field, rate) in [
            ("Tech", self.tech),
            ("Complementary", self.complementary),
            ("Benchmark", self.benchmark),
        ] {
            if !rate.is_finite() {
                return Err(ProjectionError::invalid_parameter(
                    field,
                    format!("non-finite rate for {}", profile),
                ));
            }
        }

        Ok((
            profile,
            CategoryReturns::new(self.tech, self.complementary, self.benchmark),
        ))
    }
}

/// Load a return table from any reader (e.g., string buffer, network stream)
pub fn load_return_table_from_reader<R: Read>(reader: R) -> Result<ReturnTable> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let entry = row.into_entry()?;
        debug!("loaded returns for {}: {:?}", entry.0, entry.1);
        rows.push(entry);
    }

    Ok(ReturnTable::from_rows(rows))
}

/// Load the return table from risk_returns.csv in the given directory
pub fn load_return_table(dir: &Path) -> Result<ReturnTable> {
    let path = dir.join(RISK_RETURNS_FILE);
    let file = std::fs::File::open(&path)?;
    let table = load_return_table_from_reader(file)?;
    info!("Loaded {} risk profiles from {}", table.len(), path.display());
    Ok(table)
}

/// Load the return table from the default location
pub fn load_default_return_table() -> Result<ReturnTable> {
    load_return_table(Path::new(DEFAULT_ASSUMPTIONS_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_load_default_return_table() {
        let result = load_default_return_table();
        assert!(result.is_ok(), "Failed to load return table: {:?}", result.err());

        let table = result.unwrap();
        assert_eq!(table.len(), 3);

        let high = table.get(RiskProfile::High).unwrap();
        assert_relative_eq!(high.tech, 0.15);
        assert_relative_eq!(high.benchmark, 0.10);
    }

    #[test]
    fn test_load_from_reader() {
        let data = "RiskProfile,Tech,Complementary,Benchmark\nlow,0.05,0.03,0.04\n";
        let table = load_return_table_from_reader(data.as_bytes()).unwrap();

        assert_eq!(table.len(), 1);
        assert_relative_eq!(table.get(RiskProfile::Low).unwrap().complementary, 0.03);
        assert!(table.get(RiskProfile::Medium).is_err());
    }

    #[test]
    fn test_unknown_profile_rejected() {
        let data = "RiskProfile,Tech,Complementary,Benchmark\nExtreme,0.30,0.10,0.08\n";
        let err = load_return_table_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::UnknownRiskProfile(_)));
    }

    #[test]
    fn test_malformed_rate_rejected() {
        let data = "RiskProfile,Tech,Complementary,Benchmark\nHigh,abc,0.10,0.08\n";
        let err = load_return_table_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::Csv(_)));
    }
}
