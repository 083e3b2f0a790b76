use thiserror::Error;

use crate::combination::NodeId;

/// Everything that can go wrong while building or querying a candidate set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Couldn't allocate memory for {requested} records")]
    OutOfMemory { requested: usize },

    #[error("Only {available} candidates available, {requested} requested")]
    InsufficientCandidates { requested: usize, available: usize },

    #[error("Invalid target resistance: {0}")]
    InvalidTarget(f64),

    #[error("Zero-valued resistor in a parallel combination")]
    DivisionByZero,

    #[error("Invalid resistance value: {0}")]
    InvalidResistance(f64),

    #[error("No node with id {0}")]
    UnknownNode(NodeId),

    #[error("Could not parse target value: {0}")]
    TargetParse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
