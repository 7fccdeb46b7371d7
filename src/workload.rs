//! Synthetic cylinder-request workloads
//!
//! A [`Workload`] is an ordered, immutable list of cylinder requests. Arrival
//! order matters to FCFS; SCAN and C-SCAN sort a private copy. The
//! [`WorkloadGenerator`] samples requests from a [`Distribution`] and has no
//! console side effects; printing a preview is the reporter's job.

use crate::distribution::uniform::UniformDistribution;
use crate::distribution::Distribution;
use crate::error::SimError;
use crate::geometry::DiskGeometry;
use std::sync::Arc;

/// Ordered sequence of cylinder requests
///
/// Cloning is cheap and shares the underlying requests; there is no way to
/// mutate a workload after it has been built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    requests: Arc<[u64]>,
}

impl Workload {
    /// Build a workload from explicit requests, validating each against `geometry`
    pub fn from_requests(requests: Vec<u64>, geometry: &DiskGeometry) -> Result<Self, SimError> {
        for &request in &requests {
            geometry.check(request)?;
        }
        Ok(Self {
            requests: requests.into(),
        })
    }

    /// Requests in arrival order
    #[inline]
    pub fn requests(&self) -> &[u64] {
        &self.requests
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Split into a head and tail preview of at most `edge` requests each
    ///
    /// Returns `None` for the tail when the whole workload fits in `2 * edge`
    /// requests, in which case the head slice holds every request.
    pub fn preview(&self, edge: usize) -> (&[u64], Option<&[u64]>) {
        let len = self.requests.len();
        if len <= edge.saturating_mul(2) {
            (&self.requests[..], None)
        } else {
            (&self.requests[..edge], Some(&self.requests[len - edge..]))
        }
    }
}

/// Produces workloads by sampling a distribution
pub struct WorkloadGenerator {
    distribution: Box<dyn Distribution>,
}

impl WorkloadGenerator {
    /// Uniform generator seeded from entropy
    pub fn new() -> Self {
        Self::with_distribution(Box::new(UniformDistribution::new()))
    }

    /// Uniform generator with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_distribution(Box::new(UniformDistribution::with_seed(seed)))
    }

    pub fn with_distribution(distribution: Box<dyn Distribution>) -> Self {
        Self { distribution }
    }

    /// Generate `count` requests drawn independently from `[0, geometry.size())`
    pub fn generate(&mut self, count: usize, geometry: &DiskGeometry) -> Result<Workload, SimError> {
        if count == 0 {
            return Err(SimError::InvalidWorkloadSize(count));
        }

        let requests: Vec<u64> = (0..count)
            .map(|_| self.distribution.next_cylinder(geometry))
            .collect();

        Ok(Workload {
            requests: requests.into(),
        })
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}
