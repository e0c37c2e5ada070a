//! Scenario runner for batch projections
//!
//! Holds one return table and runs many projections against it, either for
//! a batch of investor profiles or across every risk profile.

use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::assumptions::{ReturnTable, RiskProfile};
use crate::error::Result;
use crate::portfolio::{etf_allocations, EtfAllocation, InvestorProfile, PortfolioParameters};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Projection of one investor profile together with its holdings split
#[derive(Debug, Clone, Serialize)]
pub struct ProfileProjection {
    pub profile: InvestorProfile,
    pub etf_allocations: Vec<EtfAllocation>,
    pub result: ProjectionResult,
}

/// Pre-loaded scenario runner for batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// for (profile, result) in runner.compare_risk_profiles(&params, ProjectionConfig::default())? {
///     println!("{}: {:.2}", profile, result.summary().final_portfolio_value);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    returns: ReturnTable,
}

impl ScenarioRunner {
    /// Create runner with the built-in return table
    pub fn new() -> Self {
        Self {
            returns: ReturnTable::default_assumptions(),
        }
    }

    /// Create runner with a pre-built or loaded return table
    pub fn with_returns(returns: ReturnTable) -> Self {
        Self { returns }
    }

    pub fn returns(&self) -> &ReturnTable {
        &self.returns
    }

    fn engine(&self, config: ProjectionConfig) -> ProjectionEngine {
        ProjectionEngine::new(self.returns.clone(), config)
    }

    /// Run a single projection with the given config
    pub fn run(&self, params: &PortfolioParameters, config: ProjectionConfig) -> Result<ProjectionResult> {
        self.engine(config).project(params)
    }

    /// Project one investor profile and split its current value across its ETFs
    pub fn run_profile(&self, profile: &InvestorProfile, config: ProjectionConfig) -> Result<ProfileProjection> {
        let result = self.engine(config).project(&profile.parameters)?;
        Ok(ProfileProjection {
            etf_allocations: etf_allocations(profile, profile.portfolio_value()),
            profile: profile.clone(),
            result,
        })
    }

    /// Project many profiles in parallel; one result per profile, input order kept
    pub fn run_batch(&self, profiles: &[InvestorProfile], config: ProjectionConfig) -> Vec<Result<ProfileProjection>> {
        let engine = self.engine(config);
        info!("Running batch of {} profiles", profiles.len());

        profiles
            .par_iter()
            .map(|profile| -> Result<ProfileProjection> {
                let result = engine.project(&profile.parameters).map_err(|e| {
                    warn!("Projection failed for {}: {}", profile.full_name(), e);
                    e
                })?;
                Ok(ProfileProjection {
                    etf_allocations: etf_allocations(profile, profile.portfolio_value()),
                    profile: profile.clone(),
                    result,
                })
            })
            .collect()
    }

    /// Project the same parameters under each risk profile, lowest risk first
    pub fn compare_risk_profiles(
        &self,
        params: &PortfolioParameters,
        config: ProjectionConfig,
    ) -> Result<Vec<(RiskProfile, ProjectionResult)>> {
        let engine = self.engine(config);

        RiskProfile::ALL
            .iter()
            .map(|&risk_profile| -> Result<(RiskProfile, ProjectionResult)> {
                let scenario = PortfolioParameters {
                    risk_profile,
                    ..params.clone()
                };
                Ok((risk_profile, engine.project(&scenario)?))
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
