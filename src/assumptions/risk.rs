//! Risk profiles and the annual return table they select

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Named bucket selecting a fixed set of assumed annual returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RiskProfile {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskProfile {
    /// All profiles, lowest risk first
    pub const ALL: [RiskProfile; 3] = [RiskProfile::Low, RiskProfile::Medium, RiskProfile::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Low => "Low",
            RiskProfile::Medium => "Medium",
            RiskProfile::High => "High",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskProfile::Low),
            "medium" => Ok(RiskProfile::Medium),
            "high" => Ok(RiskProfile::High),
            _ => Err(ProjectionError::UnknownRiskProfile(s.to_string())),
        }
    }
}

/// Annual return assumptions for one risk profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryReturns {
    /// Tech ETF sleeve
    pub tech: f64,
    /// Complementary (non-tech sector) ETF sleeve
    pub complementary: f64,
    /// S&P 500 benchmark
    pub benchmark: f64,
}

impl CategoryReturns {
    pub fn new(tech: f64, complementary: f64, benchmark: f64) -> Self {
        Self {
            tech,
            complementary,
            benchmark,
        }
    }

    /// Allocation-weighted return of the two portfolio sleeves
    pub fn blended(&self, tech_allocation: f64, complementary_allocation: f64) -> f64 {
        self.tech * tech_allocation + self.complementary * complementary_allocation
    }
}

/// Read-only mapping from risk profile to its return assumptions
#[derive(Debug, Clone)]
pub struct ReturnTable {
    rates: HashMap<RiskProfile, CategoryReturns>,
}

impl ReturnTable {
    /// Build a table from explicit rows; later rows replace earlier ones
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (RiskProfile, CategoryReturns)>,
    {
        Self {
            rates: rows.into_iter().collect(),
        }
    }

    /// Built-in assumptions used by the dashboard
    pub fn default_assumptions() -> Self {
        Self::from_rows([
            (RiskProfile::Low, CategoryReturns::new(0.08, 0.05, 0.06)),
            (RiskProfile::Medium, CategoryReturns::new(0.12, 0.07, 0.08)),
            (RiskProfile::High, CategoryReturns::new(0.15, 0.09, 0.10)),
        ])
    }

    /// Look up the returns for a profile
    pub fn get(&self, profile: RiskProfile) -> Result<&CategoryReturns> {
        self.rates
            .get(&profile)
            .ok_or(ProjectionError::MissingRiskProfile(profile))
    }

    pub fn contains(&self, profile: RiskProfile) -> bool {
        self.rates.contains_key(&profile)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for ReturnTable {
    fn default() -> Self {
        Self::default_assumptions()
    }
}
