//! Simulation driver
//!
//! Generates one workload per trial and runs every selected policy against it.
//! Trials are independent and run in parallel; within a trial the policies
//! share one immutable workload and also run in parallel. Results are always
//! reported in trial order and configured policy order.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::geometry::DiskGeometry;
use crate::schedule::{Policy, PolicyOutcome};
use crate::workload::{Workload, WorkloadGenerator};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Validated simulation parameters
#[derive(Debug, Clone)]
pub struct Simulation {
    geometry: DiskGeometry,
    head: u64,
    requests: usize,
    trials: usize,
    seed: Option<u64>,
    policies: Vec<Policy>,
}

/// Results of a single trial
#[derive(Debug, Clone, Serialize)]
pub struct TrialReport {
    pub trial: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip)]
    pub workload: Workload,
    pub results: Vec<PolicyOutcome>,
}

/// Per-policy aggregate across trials
#[derive(Debug, Clone, Serialize)]
pub struct PolicySummary {
    #[serde(serialize_with = "crate::schedule::serialize_policy_name")]
    pub policy: Policy,
    pub mean_movement: f64,
    pub min_movement: u64,
    pub max_movement: u64,
}

/// Parameters echoed into the report
#[derive(Debug, Clone, Serialize)]
pub struct ReportConfig {
    pub cylinders: u64,
    pub head: u64,
    pub requests: usize,
    pub trials: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Complete simulation output
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub config: ReportConfig,
    pub trials: Vec<TrialReport>,
    pub summary: Vec<PolicySummary>,
}

impl Simulation {
    pub fn new(
        geometry: DiskGeometry,
        head: u64,
        requests: usize,
        policies: Vec<Policy>,
    ) -> Result<Self, SimError> {
        geometry.check(head)?;
        if requests == 0 {
            return Err(SimError::InvalidWorkloadSize(requests));
        }
        Ok(Self {
            geometry,
            head,
            requests,
            trials: 1,
            seed: None,
            policies,
        })
    }

    /// Build from a configuration; fails on any invalid value
    pub fn from_config(config: &SimConfig) -> crate::Result<Self> {
        let geometry = crate::config::validator::validate_disk(&config.disk)?;
        crate::config::validator::validate_workload(&config.workload)?;
        let head = crate::config::validator::validate_schedule(&config.schedule, &geometry)?;

        Ok(Self {
            geometry,
            head,
            requests: config.workload.requests,
            trials: config.workload.trials,
            seed: config.workload.seed,
            policies: config.schedule.policies.clone(),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials.max(1);
        self
    }

    pub fn geometry(&self) -> &DiskGeometry {
        &self.geometry
    }

    pub fn head(&self) -> u64 {
        self.head
    }

    /// Seed for trial `trial`: consecutive seeds from the base seed
    fn trial_seed(&self, trial: usize) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(trial as u64))
    }

    /// Run every policy against an existing workload
    pub fn evaluate(&self, workload: &Workload) -> Result<Vec<PolicyOutcome>, SimError> {
        self.policies
            .par_iter()
            .map(|policy| policy.evaluate(workload, self.head, &self.geometry))
            .collect()
    }

    /// Generate a workload and evaluate it
    pub fn run_trial(&self, trial: usize) -> Result<TrialReport, SimError> {
        let seed = self.trial_seed(trial);
        let mut generator = match seed {
            Some(seed) => WorkloadGenerator::with_seed(seed),
            None => WorkloadGenerator::new(),
        };

        let workload = generator.generate(self.requests, &self.geometry)?;
        debug!(trial, ?seed, requests = workload.len(), "generated workload");

        let results = self.evaluate(&workload)?;
        for outcome in &results {
            debug!(trial, policy = %outcome.policy, total = outcome.total_movement, "policy finished");
        }

        Ok(TrialReport {
            trial,
            seed,
            workload,
            results,
        })
    }

    /// Run all trials and summarize
    pub fn run(&self) -> Result<SimulationReport, SimError> {
        debug!(
            trials = self.trials,
            requests = self.requests,
            head = self.head,
            cylinders = self.geometry.size(),
            "starting simulation"
        );

        let trials: Vec<TrialReport> = (0..self.trials)
            .into_par_iter()
            .map(|trial| self.run_trial(trial))
            .collect::<Result<Vec<_>, SimError>>()?;

        let summary = summarize(&self.policies, &trials);

        Ok(SimulationReport {
            config: ReportConfig {
                cylinders: self.geometry.size(),
                head: self.head,
                requests: self.requests,
                trials: self.trials,
                seed: self.seed,
            },
            trials,
            summary,
        })
    }
}

fn summarize(policies: &[Policy], trials: &[TrialReport]) -> Vec<PolicySummary> {
    let mut summary: Vec<PolicySummary> = Vec::with_capacity(policies.len());

    for &policy in policies {
        if summary.iter().any(|s| s.policy == policy) {
            continue;
        }

        let totals: Vec<u64> = trials
            .iter()
            .flat_map(|t| t.results.iter())
            .filter(|outcome| outcome.policy == policy)
            .map(|outcome| outcome.total_movement)
            .collect();

        if totals.is_empty() {
            continue;
        }

        let sum: u128 = totals.iter().map(|&total| u128::from(total)).sum();
        summary.push(PolicySummary {
            policy,
            mean_movement: sum as f64 / totals.len() as f64,
            min_movement: totals.iter().copied().min().unwrap_or(0),
            max_movement: totals.iter().copied().max().unwrap_or(0),
        });
    }

    summary
}
