//! Portfolio parameters and investor profile records

use serde::{Deserialize, Serialize};

use crate::assumptions::RiskProfile;
use crate::error::{ProjectionError, Result};

/// Mandate default: share of the portfolio held in tech ETFs
pub const DEFAULT_TECH_ALLOCATION: f64 = 0.7;

/// Mandate default: share of the portfolio held in complementary sector ETFs
pub const DEFAULT_COMPLEMENTARY_ALLOCATION: f64 = 0.3;

/// Default investment horizon in years
pub const DEFAULT_INVESTMENT_HORIZON: u32 = 5;

/// Tolerance applied when checking that allocations sum to one
pub const ALLOCATION_TOLERANCE: f64 = 1e-6;

/// Financial inputs driving a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioParameters {
    /// Lump sum invested at year 0
    pub initial_investment: f64,

    /// Contribution made every month
    pub monthly_contribution: f64,

    /// Projection horizon in whole years
    pub investment_duration: u32,

    /// Fraction of the portfolio in tech ETFs
    pub tech_allocation: f64,

    /// Fraction of the portfolio in complementary ETFs
    pub complementary_allocation: f64,

    pub risk_profile: RiskProfile,
}

impl PortfolioParameters {
    /// Parameters on the default 70/30 mandate over the default horizon
    pub fn new(initial_investment: f64, monthly_contribution: f64, risk_profile: RiskProfile) -> Self {
        Self {
            initial_investment,
            monthly_contribution,
            investment_duration: DEFAULT_INVESTMENT_HORIZON,
            tech_allocation: DEFAULT_TECH_ALLOCATION,
            complementary_allocation: DEFAULT_COMPLEMENTARY_ALLOCATION,
            risk_profile,
        }
    }

    pub fn with_duration(mut self, years: u32) -> Self {
        self.investment_duration = years;
        self
    }

    /// Set the tech share; the complementary share takes the remainder
    pub fn with_tech_allocation(mut self, tech_allocation: f64) -> Self {
        self.tech_allocation = tech_allocation;
        self.complementary_allocation = 1.0 - tech_allocation;
        self
    }

    /// Contributions per year (monthly x 12)
    pub fn annual_contribution(&self) -> f64 {
        self.monthly_contribution * 12.0
    }

    /// Check the invariants the engine relies on
    pub fn validate(&self) -> Result<()> {
        if !self.initial_investment.is_finite() || self.initial_investment < 0.0 {
            return Err(ProjectionError::invalid_parameter(
                "initial_investment",
                format!("must be a non-negative amount, got {}", self.initial_investment),
            ));
        }

        if !self.monthly_contribution.is_finite() || self.monthly_contribution < 0.0 {
            return Err(ProjectionError::invalid_parameter(
                "monthly_contribution",
                format!("must be a non-negative amount, got {}", self.monthly_contribution),
            ));
        }

        if self.investment_duration == 0 {
            return Err(ProjectionError::invalid_parameter(
                "investment_duration",
                "must be at least one year",
            ));
        }

        for (field, value) in [
            ("tech_allocation", self.tech_allocation),
            ("complementary_allocation", self.complementary_allocation),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ProjectionError::invalid_parameter(
                    field,
                    format!("must lie in [0, 1], got {}", value),
                ));
            }
        }

        let total = self.tech_allocation + self.complementary_allocation;
        if (total - 1.0).abs() > ALLOCATION_TOLERANCE {
            return Err(ProjectionError::invalid_parameter(
                "allocation",
                format!("tech and complementary allocations sum to {}, expected 1", total),
            ));
        }

        Ok(())
    }
}

impl Default for PortfolioParameters {
    fn default() -> Self {
        Self::new(100_000.0, 0.0, RiskProfile::Medium)
    }
}

/// An investor and the ETFs chosen for each sleeve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub first_name: String,
    pub last_name: String,
    pub parameters: PortfolioParameters,
    pub tech_etfs: Vec<String>,
    pub complementary_etfs: Vec<String>,
}

impl InvestorProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Current portfolio value; no market prices are tracked so this is the
    /// amount initially invested
    pub fn portfolio_value(&self) -> f64 {
        self.parameters.initial_investment
    }
}

/// Parse a comma-separated ticker list ("xlk, VGT,,soxx" -> [XLK, VGT, SOXX])
pub fn parse_symbol_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_follow_mandate() {
        let params = PortfolioParameters::default();
        assert_relative_eq!(params.tech_allocation, 0.7);
        assert_relative_eq!(params.complementary_allocation, 0.3);
        assert_eq!(params.investment_duration, 5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_annual_contribution() {
        let params = PortfolioParameters::new(10_000.0, 250.0, RiskProfile::Low);
        assert_relative_eq!(params.annual_contribution(), 3_000.0);
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        let base = PortfolioParameters::default();

        let mut p = base.clone();
        p.initial_investment = -1.0;
        assert!(matches!(
            p.validate(),
            Err(ProjectionError::InvalidParameter { ref field, .. }) if field == "initial_investment"
        ));

        let mut p = base.clone();
        p.monthly_contribution = f64::NAN;
        assert!(p.validate().is_err());

        let p = base.clone().with_duration(0);
        assert!(matches!(
            p.validate(),
            Err(ProjectionError::InvalidParameter { ref field, .. }) if field == "investment_duration"
        ));

        let mut p = base.clone();
        p.tech_allocation = 0.6;
        p.complementary_allocation = 0.3;
        assert!(matches!(
            p.validate(),
            Err(ProjectionError::InvalidParameter { ref field, .. }) if field == "allocation"
        ));

        let mut p = base;
        p.tech_allocation = 1.2;
        p.complementary_allocation = -0.2;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_zero_initial_investment_is_valid() {
        let params = PortfolioParameters::new(0.0, 0.0, RiskProfile::High);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_with_tech_allocation_keeps_sum() {
        let params = PortfolioParameters::default().with_tech_allocation(0.65);
        assert_relative_eq!(params.complementary_allocation, 0.35, epsilon = 1e-12);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_parse_symbol_list() {
        assert_eq!(parse_symbol_list("xlk, VGT,,soxx "), vec!["XLK", "VGT", "SOXX"]);
        assert!(parse_symbol_list("").is_empty());
        assert!(parse_symbol_list(" , ").is_empty());
    }
}
