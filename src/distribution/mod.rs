//! Request samplers
//!
//! A [`Distribution`] picks the cylinder for each generated request. The
//! workload generator owns one and never touches the random source directly.
//!
//! ```
//! use seekpulse::distribution::{uniform::UniformDistribution, Distribution};
//! use seekpulse::DiskGeometry;
//!
//! let geometry = DiskGeometry::new(5000).unwrap();
//! let mut dist = UniformDistribution::with_seed(7);
//! assert!(geometry.contains(dist.next_cylinder(&geometry)));
//! ```

use crate::geometry::DiskGeometry;

/// Source of cylinder numbers for synthetic requests
///
/// Implementations are `Send` so a generator can move onto a rayon worker.
/// Each trial builds its own instance.
pub trait Distribution: Send {
    /// Next cylinder in `[0, geometry.last_cylinder()]`
    fn next_cylinder(&mut self, geometry: &DiskGeometry) -> u64;
}

pub mod uniform;
