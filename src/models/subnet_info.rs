//! Subnet details derived from a single CIDR string.

use super::ipv4::{
    decrement_octets, increment_octets, is_private, mask_to_binary, IpClass, Ipv4Cidr,
};
use crate::error::SubnetError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Shown in place of the usable range for `/31` and `/32`.
pub const USABLE_RANGE_NA: &str = "N/A (too small for usable hosts)";

/// Everything computed for one `address/prefix` input.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetInfo {
    /// The address as given, host bits included.
    pub ip: Ipv4Addr,
    /// Prefix length (0-32).
    pub cidr: u8,
    /// `"<network> - <broadcast>"`.
    pub address_range: String,
    /// Total addresses in the subnet, `2^(32 - cidr)`.
    pub num_hosts: u64,
    pub network_addr: Ipv4Addr,
    pub broadcast_addr: Ipv4Addr,
    /// `"<first> - <last>"`, or [`USABLE_RANGE_NA`].
    pub usable_range: String,
    pub usable_first: Option<Ipv4Addr>,
    pub usable_last: Option<Ipv4Addr>,
    pub usable_hosts: u64,
    pub subnet_mask: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
    pub subnet_mask_bin: String,
    pub wildcard_mask_bin: String,
    pub ip_class: IpClass,
    pub is_private: bool,
}

impl SubnetInfo {
    /// "Private" or "Public".
    pub fn ip_type(&self) -> &'static str {
        if self.is_private {
            "Private"
        } else {
            "Public"
        }
    }
}

/// Compute subnet details from CIDR notation such as `"192.168.0.0/24"`.
///
/// # Examples
/// ```
/// let info = bitsplitter::calculate("192.168.0.0/24").unwrap();
/// assert_eq!(info.usable_range, "192.168.0.1 - 192.168.0.254");
/// ```
pub fn calculate(input: &str) -> Result<SubnetInfo, SubnetError> {
    let cidr = Ipv4Cidr::new(input)?;
    log::debug!("calculate({input}) parsed as {cidr}");
    Ok(SubnetInfo::from(cidr))
}

impl From<Ipv4Cidr> for SubnetInfo {
    fn from(cidr: Ipv4Cidr) -> Self {
        let len = cidr.prefix_len();
        let network = cidr.network();
        let broadcast = cidr.broadcast();
        let usable_hosts = cidr.num_usable_hosts();

        let (usable_first, usable_last, usable_range) = if usable_hosts > 0 {
            let first = Ipv4Addr::from(increment_octets(network.octets()));
            let last = Ipv4Addr::from(decrement_octets(broadcast.octets()));
            (Some(first), Some(last), format!("{first} - {last}"))
        } else {
            log::trace!("{cidr} has no usable hosts");
            (None, None, USABLE_RANGE_NA.to_string())
        };

        SubnetInfo {
            ip: cidr.addr(),
            cidr: len,
            address_range: format!("{network} - {broadcast}"),
            num_hosts: cidr.num_hosts(),
            network_addr: network,
            broadcast_addr: broadcast,
            usable_range,
            usable_first,
            usable_last,
            usable_hosts,
            subnet_mask: Ipv4Addr::from(cidr.subnet_mask()),
            wildcard_mask: Ipv4Addr::from(cidr.wildcard_mask()),
            subnet_mask_bin: mask_to_binary(cidr.subnet_mask()),
            wildcard_mask_bin: mask_to_binary(cidr.wildcard_mask()),
            ip_class: IpClass::of(cidr.addr()),
            is_private: is_private(cidr.addr()),
        }
    }
}
