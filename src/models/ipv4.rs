//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4Cidr`] for a parsed `address/prefix` pair, along with the
//! mask arithmetic and classification helpers the subnet calculation uses.

use crate::error::SubnetError;
use itertools::Itertools;
use regex::Regex;
use serde::Serialize;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// An IPv4 address as four ordered octets, most significant first.
pub type Octets = [u8; 4];

/// Prefix lengths are plain decimal digits, leading zeros allowed.
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

fn check_len(len: u32) -> Result<u8, SubnetError> {
    u8::try_from(len)
        .ok()
        .filter(|len| *len <= MAX_LENGTH)
        .ok_or_else(|| {
            SubnetError::invalid(format!("prefix length {len} is greater than {MAX_LENGTH}"))
        })
}

/// Mask bits for a prefix length already known to be in range.
fn mask_bits(len: u8) -> u32 {
    u32::MAX.checked_shl(u32::from(MAX_LENGTH - len)).unwrap_or(0)
}

/// Add one to an address, carrying from the last octet leftward.
///
/// Wraps rather than clamps: `255.255.255.255` becomes `0.0.0.0`.
pub fn increment_octets(octets: Octets) -> Octets {
    let mut next = octets;
    for octet in next.iter_mut().rev() {
        if *octet < u8::MAX {
            *octet += 1;
            break;
        }
        *octet = 0;
    }
    next
}

/// Subtract one from an address, borrowing from the last octet leftward.
///
/// Wraps rather than clamps: `0.0.0.0` becomes `255.255.255.255`.
pub fn decrement_octets(octets: Octets) -> Octets {
    let mut prev = octets;
    for octet in prev.iter_mut().rev() {
        if *octet > 0 {
            *octet -= 1;
            break;
        }
        *octet = u8::MAX;
    }
    prev
}

/// Render a mask as four dot separated, zero padded binary groups.
///
/// ```
/// use bitsplitter::models::mask_to_binary;
/// assert_eq!(mask_to_binary(0xFFFFFF00), "11111111.11111111.11111111.00000000");
/// ```
pub fn mask_to_binary(mask: u32) -> String {
    mask.to_be_bytes()
        .iter()
        .map(|b| format!("{b:08b}"))
        .join(".")
}

/// Read a binary mask string (as produced by [`mask_to_binary`]) back into
/// a prefix length. Only contiguous masks are accepted.
pub fn binary_to_cidr(binary: &str) -> Result<u8, SubnetError> {
    let groups: Vec<&str> = binary.trim().split('.').collect();
    if groups.len() != 4 || groups.iter().any(|g| g.len() != 8) {
        return Err(SubnetError::invalid(format!(
            "binary mask must be four 8-bit groups: {binary}"
        )));
    }
    let mut bytes: Octets = [0; 4];
    for (byte, group) in bytes.iter_mut().zip(&groups) {
        *byte = u8::from_str_radix(group, 2)
            .map_err(|_| SubnetError::invalid(format!("invalid binary group {group}")))?;
    }
    let mask = u32::from_be_bytes(bytes);
    let len = mask.leading_ones() as u8;
    if mask_bits(len) != mask {
        return Err(SubnetError::invalid(format!(
            "mask is not contiguous: {binary}"
        )));
    }
    Ok(len)
}

/// Legacy classful address category, taken from the first octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum IpClass {
    A,
    B,
    C,
    D,
    E,
}

impl IpClass {
    pub fn of(addr: Ipv4Addr) -> IpClass {
        match addr.octets()[0] {
            0..=127 => IpClass::A,
            128..=191 => IpClass::B,
            192..=223 => IpClass::C,
            224..=239 => IpClass::D,
            _ => IpClass::E,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::D => "D",
            IpClass::E => "E",
        }
    }
}

impl std::fmt::Display for IpClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ranges treated as private: RFC 1918 plus loopback and link-local.
const PRIVATE_RANGES: [(Ipv4Addr, u8); 5] = [
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
    (Ipv4Addr::new(127, 0, 0, 0), 8),
    (Ipv4Addr::new(169, 254, 0, 0), 16),
];

/// True if the address sits in one of the private ranges.
pub fn is_private(addr: Ipv4Addr) -> bool {
    let bits = u32::from(addr);
    PRIVATE_RANGES
        .iter()
        .any(|(net, len)| bits & mask_bits(*len) == u32::from(*net))
}

/// IPv4 address with CIDR prefix length.
///
/// The address keeps its host bits as given; use [`Ipv4Cidr::network`] for
/// the masked form. The prefix length is always in `0..=32`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Cidr {
    addr: Ipv4Addr,
    len: u8,
}

impl Ipv4Cidr {
    /// Create a new [`Ipv4Cidr`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4Cidr, SubnetError> {
        let addr_cidr = addr_cidr.trim();
        let (addr_part, len_part) = addr_cidr
            .split_once('/')
            .ok_or_else(|| SubnetError::invalid(format!("missing '/' in {addr_cidr:?}")))?;

        let addr: Ipv4Addr = addr_part
            .parse()
            .map_err(|_| SubnetError::invalid(format!("invalid IPv4 address {addr_part:?}")))?;

        if !get_prefix_regex().is_match(len_part) {
            return Err(SubnetError::invalid(format!(
                "invalid prefix length {len_part:?}"
            )));
        }
        let len: u32 = len_part
            .parse()
            .map_err(|_| SubnetError::invalid(format!("invalid prefix length {len_part:?}")))?;
        let len = check_len(len)?;
        Ok(Ipv4Cidr { addr, len })
    }

    /// Build from an address and prefix length, rejecting lengths over 32.
    pub fn from_parts(addr: Ipv4Addr, len: u8) -> Result<Ipv4Cidr, SubnetError> {
        let len = check_len(u32::from(len))?;
        Ok(Ipv4Cidr { addr, len })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    pub fn subnet_mask(&self) -> u32 {
        mask_bits(self.len)
    }

    pub fn wildcard_mask(&self) -> u32 {
        !self.subnet_mask()
    }

    /// Lowest address in the subnet (all host bits zero).
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.subnet_mask())
    }

    /// Highest address in the subnet (all host bits one).
    pub fn broadcast(&self) -> Ipv4Addr {
        let network = self.network().octets();
        let wildcard = self.wildcard_mask().to_be_bytes();
        let mut broadcast: Octets = [0; 4];
        for (i, octet) in broadcast.iter_mut().enumerate() {
            *octet = network[i] | wildcard[i];
        }
        Ipv4Addr::from(broadcast)
    }

    /// Total number of addresses covered, `2^(32 - len)`.
    ///
    /// Counted in a u64 so that `/0` reports all 4294967296 addresses.
    pub fn num_hosts(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.len)
    }

    /// Number of assignable host addresses, excluding network and broadcast.
    ///
    /// `/31` and `/32` have none.
    pub fn num_usable_hosts(&self) -> u64 {
        self.num_hosts().saturating_sub(2)
    }
}

impl std::fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}
