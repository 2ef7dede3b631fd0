//! Error types for input validation

use thiserror::Error;

/// Errors raised at the crate's input boundaries.
///
/// Only boundary validation fails hard. Recoverable conditions
/// (coincident waypoints, malformed zone tokens, targets without a
/// position) are handled where they occur and never surface here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigationError {
    /// A route needs at least two waypoints to form a leg
    #[error("Route requires at least {expected} waypoints, got {actual}")]
    TooFewWaypoints { expected: usize, actual: usize },

    /// Routing mode token from the host configuration is not recognized
    #[error("Unknown routing mode: {0}")]
    UnknownRoutingMode(String),
}
