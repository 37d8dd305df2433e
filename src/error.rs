use thiserror::Error;

/// Reasons a [`Planner`](crate::planner::Planner) cannot be built for the requested size.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    #[error("transform size must be at least 1")]
    Empty,
    #[error("transform size {num_points} is not a power of 2")]
    NotPowerOfTwo { num_points: usize },
}
