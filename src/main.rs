//! Portfolio Projection CLI
//!
//! Command-line interface for running portfolio projections

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use log::info;
use serde::Serialize;

use portfolio_projection::assumptions::{load_return_table, ReturnTable, RiskProfile};
use portfolio_projection::portfolio::{
    category_allocations, etf_details, load_profiles, parse_symbol_list, CategoryAllocation,
    InvestorProfile, PortfolioParameters, DEFAULT_INVESTMENT_HORIZON, DEFAULT_TECH_ALLOCATION,
};
use portfolio_projection::projection::{ContributionTiming, ProjectionConfig, ProjectionSummary};
use portfolio_projection::scenario::{ProfileProjection, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(name = "portfolio_projection", version, about = "Project a tech-tilted ETF portfolio against the S&P 500")]
struct Args {
    /// Initial investment amount
    #[arg(long, default_value_t = 100_000.0)]
    initial: f64,

    /// Monthly contribution amount
    #[arg(long, default_value_t = 0.0)]
    monthly: f64,

    /// Investment horizon in years
    #[arg(long, default_value_t = DEFAULT_INVESTMENT_HORIZON)]
    years: u32,

    /// Risk profile (Low, Medium, High)
    #[arg(long, default_value = "Medium")]
    risk: String,

    /// Fraction allocated to tech ETFs; the remainder goes to complementary ETFs
    #[arg(long, default_value_t = DEFAULT_TECH_ALLOCATION)]
    tech_allocation: f64,

    /// Comma-separated tech ETF tickers
    #[arg(long, default_value = "")]
    tech_etfs: String,

    /// Comma-separated complementary ETF tickers
    #[arg(long, default_value = "")]
    complementary_etfs: String,

    /// Directory holding risk_returns.csv (built-in table when omitted)
    #[arg(long)]
    returns: Option<PathBuf>,

    /// Profiles CSV to project as a batch instead of the flags above
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Credit contributions at the start of each year
    #[arg(long)]
    beginning_of_period: bool,

    /// Target average annual alpha
    #[arg(long, default_value_t = 0.01)]
    alpha_target: f64,

    /// Print a JSON report instead of tables
    #[arg(long)]
    json: bool,
}

/// JSON report for a single projection
#[derive(Debug, Serialize)]
struct Report<'a> {
    generated_at: DateTime<Utc>,
    category_allocations: Vec<CategoryAllocation>,
    summary: ProjectionSummary,
    #[serde(flatten)]
    projection: &'a ProfileProjection,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let returns = match &args.returns {
        Some(dir) => load_return_table(dir)
            .with_context(|| format!("loading return table from {}", dir.display()))?,
        None => ReturnTable::default_assumptions(),
    };
    let runner = ScenarioRunner::with_returns(returns);

    let config = ProjectionConfig {
        contribution_timing: if args.beginning_of_period {
            ContributionTiming::BeginningOfPeriod
        } else {
            ContributionTiming::EndOfPeriod
        },
        alpha_target: args.alpha_target,
    };

    if let Some(path) = &args.profiles {
        return run_batch(&runner, path, config, args.json);
    }

    let risk_profile: RiskProfile = args.risk.parse()?;
    let parameters = PortfolioParameters::new(args.initial, args.monthly, risk_profile)
        .with_duration(args.years)
        .with_tech_allocation(args.tech_allocation);

    let profile = InvestorProfile {
        first_name: String::new(),
        last_name: String::new(),
        parameters,
        tech_etfs: parse_symbol_list(&args.tech_etfs),
        complementary_etfs: parse_symbol_list(&args.complementary_etfs),
    };

    let projection = runner
        .run_profile(&profile, config)
        .context("running projection")?;

    if args.json {
        let report = Report {
            generated_at: Utc::now(),
            category_allocations: category_allocations(&profile.parameters),
            summary: projection.result.summary(),
            projection: &projection,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_projection(&projection);
    }

    Ok(())
}

fn run_batch(runner: &ScenarioRunner, path: &Path, config: ProjectionConfig, json: bool) -> Result<()> {
    let profiles = load_profiles(path)
        .with_context(|| format!("loading profiles from {}", path.display()))?;
    if profiles.is_empty() {
        bail!("no profiles found in {}", path.display());
    }

    let results = runner.run_batch(&profiles, config);
    info!("Projected {} profiles", results.len());

    if json {
        let summaries: Vec<_> = results
            .iter()
            .zip(&profiles)
            .map(|(r, p)| {
                serde_json::json!({
                    "name": p.full_name(),
                    "summary": r.as_ref().ok().map(|x| x.result.summary()),
                    "error": r.as_ref().err().map(|e| e.to_string()),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{:<24} {:>7} {:>5} {:>16} {:>16} {:>10} {:>7}",
        "Investor", "Risk", "Yrs", "Portfolio", "S&P 500", "Avg Alpha", "Target");
    println!("{}", "-".repeat(92));

    for (profile, result) in profiles.iter().zip(&results) {
        match result {
            Ok(projection) => {
                let s = projection.result.summary();
                println!("{:<24} {:>7} {:>5} {:>16.2} {:>16.2} {:>9.2}% {:>7}",
                    profile.full_name(),
                    profile.parameters.risk_profile,
                    s.years,
                    s.final_portfolio_value,
                    s.final_benchmark_value,
                    s.average_annual_alpha * 100.0,
                    if s.meets_alpha_target { "met" } else { "missed" },
                );
            }
            Err(e) => println!("{:<24} error: {}", profile.full_name(), e),
        }
    }

    Ok(())
}

fn print_projection(projection: &ProfileProjection) {
    let params = &projection.profile.parameters;
    let result = &projection.result;

    println!("Portfolio Projection");
    println!("====================\n");
    println!("  Initial Investment:   {:.2}", params.initial_investment);
    println!("  Monthly Contribution: {:.2}", params.monthly_contribution);
    println!("  Horizon:              {} years", params.investment_duration);
    println!("  Risk Profile:         {}", params.risk_profile);
    println!("  Allocation:           {:.0}% tech / {:.0}% complementary",
        params.tech_allocation * 100.0, params.complementary_allocation * 100.0);
    println!("  Blended Return:       {:.2}%", result.blended_return * 100.0);
    println!("  Benchmark Return:     {:.2}%", result.benchmark_return * 100.0);
    println!();

    println!("{:>4} {:>16} {:>16} {:>16} {:>10} {:>10}",
        "Year", "Portfolio", "S&P 500", "Contributions", "Alpha", "Cum Alpha");
    println!("{}", "-".repeat(77));
    for (point, alpha) in result.points.iter().zip(&result.alpha) {
        println!("{:>4} {:>16.2} {:>16.2} {:>16.2} {:>9.2}% {:>9.2}%",
            point.year,
            point.portfolio_value,
            point.benchmark_value,
            point.contributions_value,
            alpha.yearly_alpha * 100.0,
            alpha.cumulative_alpha * 100.0,
        );
    }

    if !projection.etf_allocations.is_empty() {
        println!("\nETF Allocation:");
        for etf in &projection.etf_allocations {
            let details = etf_details(&etf.symbol);
            println!("  {:<6} {:<50} {:<20} {:>6.2}% {:>14.2}",
                etf.symbol, details.name, etf.category, etf.allocation * 100.0, etf.value);
        }
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Projected Final Value: {:.2}", summary.final_portfolio_value);
    println!("  S&P 500 Final Value:   {:.2}", summary.final_benchmark_value);
    println!("  Total Contributions:   {:.2}", summary.total_contributions);
    println!("  Projected Profit:      {:.2}", summary.projected_profit);
    println!("  Portfolio CAGR:        {:.2}%", summary.portfolio_cagr * 100.0);
    println!("  Cumulative Alpha:      {:.2}%", summary.cumulative_alpha * 100.0);
    println!("  Average Annual Alpha:  {:.2}% (target {:.2}%, {})",
        summary.average_annual_alpha * 100.0,
        result.alpha_target * 100.0,
        if summary.meets_alpha_target { "met" } else { "missed" },
    );
}
