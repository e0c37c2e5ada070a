//! Catalogue of the tech and complementary ETFs offered to investors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Expense ratio assumed for symbols missing from the catalogue
pub const UNKNOWN_EXPENSE_RATIO: f64 = 0.0050;

/// Portfolio sleeve an ETF belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EtfCategory {
    Tech,
    Complementary,
    Unknown,
}

impl EtfCategory {
    /// Label used in allocation tables
    pub fn label(&self) -> &'static str {
        match self {
            EtfCategory::Tech => "Tech ETFs",
            EtfCategory::Complementary => "Complementary ETFs",
            EtfCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for EtfCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Reference data for a single fund
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtfInfo {
    pub symbol: String,
    pub name: String,
    pub category: EtfCategory,
    /// S&P 500 sector, complementary funds only
    pub sector: Option<String>,
    pub expense_ratio: f64,
}

// (symbol, name, expense ratio)
const TECH_ETFS: [(&str, &str, f64); 15] = [
    ("XLK", "Technology Select Sector SPDR Fund", 0.0010),
    ("VGT", "Vanguard Information Technology ETF", 0.0010),
    ("IYW", "iShares U.S. Technology ETF", 0.0041),
    ("FTEC", "Fidelity MSCI Information Technology Index ETF", 0.0008),
    ("IGM", "iShares Expanded Tech Sector ETF", 0.0046),
    ("QTEC", "First Trust NASDAQ-100 Technology Sector Index Fund", 0.0057),
    ("RYT", "Invesco S&P 500 Equal Weight Technology ETF", 0.0040),
    ("PSI", "Invesco Dynamic Semiconductors ETF", 0.0057),
    ("SOXX", "iShares Semiconductor ETF", 0.0035),
    ("SMH", "VanEck Semiconductor ETF", 0.0035),
    ("TECL", "Direxion Daily Technology Bull 3X Shares", 0.0095),
    ("ARKW", "ARK Next Generation Internet ETF", 0.0075),
    ("SKYY", "First Trust Cloud Computing ETF", 0.0060),
    ("CIBR", "First Trust NASDAQ Cybersecurity ETF", 0.0060),
    ("HACK", "ETFMG Prime Cyber Security ETF", 0.0060),
];

// (symbol, name, sector, expense ratio)
const COMPLEMENTARY_ETFS: [(&str, &str, &str, f64); 15] = [
    ("XLE", "Energy Select Sector SPDR Fund", "Energy", 0.0010),
    ("XLB", "Materials Select Sector SPDR Fund", "Materials", 0.0010),
    ("XLI", "Industrial Select Sector SPDR Fund", "Industrials", 0.0010),
    ("XLY", "Consumer Discretionary Select Sector SPDR Fund", "Consumer Discretionary", 0.0010),
    ("XLP", "Consumer Staples Select Sector SPDR Fund", "Consumer Staples", 0.0010),
    ("XLV", "Health Care Select Sector SPDR Fund", "Healthcare", 0.0010),
    ("XLF", "Financial Select Sector SPDR Fund", "Financials", 0.0010),
    ("XLRE", "Real Estate Select Sector SPDR Fund", "Real Estate", 0.0010),
    ("XLC", "Communication Services Select Sector SPDR Fund", "Communication Services", 0.0010),
    ("XLU", "Utilities Select Sector SPDR Fund", "Utilities", 0.0010),
    ("VDE", "Vanguard Energy ETF", "Energy", 0.0010),
    ("VAW", "Vanguard Materials ETF", "Materials", 0.0010),
    ("VIS", "Vanguard Industrials ETF", "Industrials", 0.0010),
    ("VCR", "Vanguard Consumer Discretionary ETF", "Consumer Discretionary", 0.0010),
    ("VDC", "Vanguard Consumer Staples ETF", "Consumer Staples", 0.0010),
];

/// Funds eligible for the tech sleeve
pub fn tech_etfs() -> Vec<EtfInfo> {
    TECH_ETFS
        .iter()
        .map(|&(symbol, name, expense_ratio)| EtfInfo {
            symbol: symbol.to_string(),
            name: name.to_string(),
            category: EtfCategory::Tech,
            sector: None,
            expense_ratio,
        })
        .collect()
}

/// Non-tech sector funds eligible for the complementary sleeve
pub fn complementary_etfs() -> Vec<EtfInfo> {
    COMPLEMENTARY_ETFS
        .iter()
        .map(|&(symbol, name, sector, expense_ratio)| EtfInfo {
            symbol: symbol.to_string(),
            name: name.to_string(),
            category: EtfCategory::Complementary,
            sector: Some(sector.to_string()),
            expense_ratio,
        })
        .collect()
}

/// Look up a fund by ticker, falling back to a placeholder for unlisted symbols
pub fn etf_details(symbol: &str) -> EtfInfo {
    let symbol = symbol.trim().to_ascii_uppercase();

    tech_etfs()
        .into_iter()
        .chain(complementary_etfs())
        .find(|etf| etf.symbol == symbol)
        .unwrap_or_else(|| EtfInfo {
            name: format!("Unknown ETF ({})", symbol),
            symbol,
            category: EtfCategory::Unknown,
            sector: None,
            expense_ratio: UNKNOWN_EXPENSE_RATIO,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_catalogue_sizes() {
        assert_eq!(tech_etfs().len(), 15);
        assert_eq!(complementary_etfs().len(), 15);
        assert!(complementary_etfs().iter().all(|e| e.sector.is_some()));
    }

    #[test]
    fn test_lookup_known_symbols() {
        let xlk = etf_details("xlk ");
        assert_eq!(xlk.symbol, "XLK");
        assert_eq!(xlk.category, EtfCategory::Tech);

        let xlv = etf_details("XLV");
        assert_eq!(xlv.category, EtfCategory::Complementary);
        assert_eq!(xlv.sector.as_deref(), Some("Healthcare"));
    }

    #[test]
    fn test_lookup_unknown_symbol() {
        let etf = etf_details("ZZZ");
        assert_eq!(etf.category, EtfCategory::Unknown);
        assert_eq!(etf.name, "Unknown ETF (ZZZ)");
        assert_relative_eq!(etf.expense_ratio, UNKNOWN_EXPENSE_RATIO);
    }
}
