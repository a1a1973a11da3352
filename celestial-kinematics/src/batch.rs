//! Jacobians for many observations at once.
//!
//! Every observation is independent, so with the `parallel` feature the work
//! is spread over the rayon thread pool. Output order always matches input
//! order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::jacobian::{full_jacobian, reduced_jacobian};
use crate::Observation;
use celestial_core::{Matrix4, Matrix6};

pub fn full_jacobians(observations: &[Observation]) -> Vec<Matrix6> {
    tracing::trace!(count = observations.len(), "computing full jacobians");

    #[cfg(feature = "parallel")]
    {
        observations.par_iter().map(full_jacobian).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        observations.iter().map(full_jacobian).collect()
    }
}

pub fn reduced_jacobians(observations: &[Observation]) -> Vec<Matrix4> {
    tracing::trace!(count = observations.len(), "computing reduced jacobians");

    #[cfg(feature = "parallel")]
    {
        observations.par_iter().map(reduced_jacobian).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        observations.iter().map(reduced_jacobian).collect()
    }
}
