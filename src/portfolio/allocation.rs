//! Category and per-ETF allocation splits

use serde::{Deserialize, Serialize};

use super::catalog::EtfCategory;
use super::data::{InvestorProfile, PortfolioParameters};

/// Share of the portfolio held by one sleeve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    pub category: EtfCategory,
    pub allocation: f64,
}

/// Share and currency value held in a single ETF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtfAllocation {
    pub symbol: String,
    pub category: EtfCategory,
    pub allocation: f64,
    pub value: f64,
}

/// Tech and complementary sleeve weights, tech first
pub fn category_allocations(params: &PortfolioParameters) -> Vec<CategoryAllocation> {
    vec![
        CategoryAllocation {
            category: EtfCategory::Tech,
            allocation: params.tech_allocation,
        },
        CategoryAllocation {
            category: EtfCategory::Complementary,
            allocation: params.complementary_allocation,
        },
    ]
}

/// Split each sleeve equally across its ETFs and value the holdings at
/// `portfolio_value`. Empty when the profile lists no ETFs at all.
pub fn etf_allocations(profile: &InvestorProfile, portfolio_value: f64) -> Vec<EtfAllocation> {
    if profile.tech_etfs.is_empty() && profile.complementary_etfs.is_empty() {
        return Vec::new();
    }

    let params = &profile.parameters;
    let tech_each = params.tech_allocation / profile.tech_etfs.len().max(1) as f64;
    let complementary_each =
        params.complementary_allocation / profile.complementary_etfs.len().max(1) as f64;

    let tech = profile.tech_etfs.iter().map(|symbol| (symbol, EtfCategory::Tech, tech_each));
    let complementary = profile
        .complementary_etfs
        .iter()
        .map(|symbol| (symbol, EtfCategory::Complementary, complementary_each));

    tech.chain(complementary)
        .map(|(symbol, category, allocation)| EtfAllocation {
            symbol: symbol.clone(),
            category,
            allocation,
            value: portfolio_value * allocation,
        })
        .collect()
}
