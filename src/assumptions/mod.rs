//! Return assumptions keyed by risk profile

mod risk;
pub mod loader;

pub use risk::{CategoryReturns, ReturnTable, RiskProfile};
pub use loader::{load_default_return_table, load_return_table, load_return_table_from_reader};
