//! Domain models for the subnet calculator.
//!
//! - [`Ipv4Cidr`] - IPv4 address with CIDR prefix length, plus mask helpers
//! - [`SubnetInfo`] - the derived subnet details and [`calculate`]

mod ipv4;
mod subnet_info;

// Re-export public types
pub use ipv4::{
    binary_to_cidr, decrement_octets, increment_octets, is_private, mask_to_binary, IpClass,
    Ipv4Cidr, Octets, MAX_LENGTH,
};
pub use subnet_info::{calculate, SubnetInfo, USABLE_RANGE_NA};
