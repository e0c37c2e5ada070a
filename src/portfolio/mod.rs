//! Portfolio parameters, investor profiles, ETF catalogue and allocation

mod data;
mod allocation;
pub mod catalog;
pub mod loader;

pub use data::{
    parse_symbol_list, InvestorProfile, PortfolioParameters, ALLOCATION_TOLERANCE,
    DEFAULT_COMPLEMENTARY_ALLOCATION, DEFAULT_INVESTMENT_HORIZON, DEFAULT_TECH_ALLOCATION,
};
pub use allocation::{category_allocations, etf_allocations, CategoryAllocation, EtfAllocation};
pub use catalog::{etf_details, EtfCategory, EtfInfo};
pub use loader::{load_profiles, load_profiles_from_reader};
