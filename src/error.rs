//! Error types for the clustering engines
//!
//! Both engines validate their inputs up front and abort the whole run on a
//! violation, so callers never see a partially merged collection.

use thiserror::Error;

/// Errors raised by the clustering engines and the cluster model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("cannot compute the centroid of an empty point set")]
    EmptyPointSet,

    #[error("target cluster count {target} is outside the valid range 1..={available}")]
    TargetOutOfRange { target: usize, available: usize },

    #[error("seed count {requested} exceeds the {available} available points")]
    TooFewPoints { requested: usize, available: usize },

    #[error("{unassigned} points cannot be assigned without any seed clusters")]
    NoSeedClusters { unassigned: usize },
}

pub type Result<T> = std::result::Result<T, ClusterError>;
