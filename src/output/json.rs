//! JSON output for subnet details.

use crate::models::SubnetInfo;

/// Pretty printed JSON for a [`SubnetInfo`].
///
/// Addresses are dotted strings, the class is its letter, and an
/// inapplicable usable range leaves `usable_first`/`usable_last` null.
pub fn subnet_json(info: &SubnetInfo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(info)
}
