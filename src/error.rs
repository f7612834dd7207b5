//! Error type for subnet calculations.

use thiserror::Error;

/// Errors returned by [`crate::calculate`] and the parsing helpers.
///
/// There is a single kind: the input could not be turned into a valid
/// IPv4 address and prefix length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    #[error("invalid CIDR notation: {0}")]
    InvalidInput(String),
}

impl SubnetError {
    pub(crate) fn invalid(detail: impl Into<String>) -> Self {
        SubnetError::InvalidInput(detail.into())
    }
}
