use thiserror::Error;

/// Errors raised by the network model and the swarm optimizer.
///
/// Both variants are final for the current run: nothing here is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Invalid construction parameters (node count, range, swarm size, bounds...).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A node index outside `[0, len)` was passed to a network query.
    #[error("node index {index} out of range for a network of {len} nodes")]
    IndexRange { index: usize, len: usize },
}

impl RouteError {
    pub fn config(msg: impl Into<String>) -> Self {
        RouteError::Configuration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
