//! Load investor profiles from a profiles CSV

use std::io::Read;
use std::path::Path;

use csv::Reader;
use log::info;

use super::data::{parse_symbol_list, InvestorProfile, PortfolioParameters};
use crate::error::Result;

/// Raw CSV row matching profiles.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "FirstName")]
    first_name: String,
    #[serde(rename = "LastName")]
    last_name: String,
    #[serde(rename = "InitialInvestment")]
    initial_investment: f64,
    #[serde(rename = "MonthlyContribution", default)]
    monthly_contribution: f64,
    #[serde(rename = "TechAllocation")]
    tech_allocation: f64,
    #[serde(rename = "ComplementaryAllocation")]
    complementary_allocation: f64,
    #[serde(rename = "InvestmentDuration")]
    investment_duration: u32,
    #[serde(rename = "RiskTolerance")]
    risk_tolerance: String,
    #[serde(rename = "TechEtfs", default)]
    tech_etfs: String,
    #[serde(rename = "ComplementaryEtfs", default)]
    complementary_etfs: String,
}

impl CsvRow {
    fn to_profile(self) -> Result<InvestorProfile> {
        let parameters = PortfolioParameters {
            initial_investment: self.initial_investment,
            monthly_contribution: self.monthly_contribution,
            investment_duration: self.investment_duration,
            tech_allocation: self.tech_allocation,
            complementary_allocation: self.complementary_allocation,
            risk_profile: self.risk_tolerance.parse()?,
        };
        parameters.validate()?;

        Ok(InvestorProfile {
            first_name: self.first_name,
            last_name: self.last_name,
            parameters,
            tech_etfs: parse_symbol_list(&self.tech_etfs),
            complementary_etfs: parse_symbol_list(&self.complementary_etfs),
        })
    }
}

/// Load all profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<InvestorProfile>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let profiles = load_profiles_from_reader(file)?;
    info!("Loaded {} investor profiles from {}", profiles.len(), path.display());
    Ok(profiles)
}

/// Load profiles from any reader (e.g., string buffer, network stream)
pub fn load_profiles_from_reader<R: Read>(reader: R) -> Result<Vec<InvestorProfile>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut profiles = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        profiles.push(row.to_profile()?);
    }

    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::RiskProfile;
    use crate::error::ProjectionError;

    const HEADER: &str = "FirstName,LastName,InitialInvestment,MonthlyContribution,TechAllocation,ComplementaryAllocation,InvestmentDuration,RiskTolerance,TechEtfs,ComplementaryEtfs\n";

    #[test]
    fn test_load_sample_profiles() {
        let profiles = load_profiles("data/profiles.csv").expect("Failed to load profiles");
        assert_eq!(profiles.len(), 3);

        let first = &profiles[0];
        assert_eq!(first.full_name(), "Thandi Nkosi");
        assert_eq!(first.parameters.risk_profile, RiskProfile::Medium);
        assert_eq!(first.tech_etfs, vec!["XLK", "VGT", "SOXX"]);
        assert_eq!(first.complementary_etfs, vec!["XLV", "XLF"]);
    }

    #[test]
    fn test_load_from_reader() {
        let data = format!("{}Jo,Smith,5000,100,0.6,0.4,3,high,\"ftec, smh\",\n", HEADER);
        let profiles = load_profiles_from_reader(data.as_bytes()).unwrap();

        assert_eq!(profiles.len(), 1);
        let p = &profiles[0];
        assert_eq!(p.parameters.investment_duration, 3);
        assert_eq!(p.parameters.risk_profile, RiskProfile::High);
        assert_eq!(p.tech_etfs, vec!["FTEC", "SMH"]);
        assert!(p.complementary_etfs.is_empty());
    }

    #[test]
    fn test_bad_risk_tolerance() {
        let data = format!("{}Jo,Smith,5000,100,0.6,0.4,3,Reckless,XLK,XLV\n", HEADER);
        let err = load_profiles_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::UnknownRiskProfile(_)));
    }

    #[test]
    fn test_allocations_validated() {
        let data = format!("{}Jo,Smith,5000,100,0.6,0.6,3,Low,XLK,XLV\n", HEADER);
        let err = load_profiles_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidParameter { .. }));
    }
}
