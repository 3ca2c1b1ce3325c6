//! IPv4 address and CIDR bit arithmetic.
//!
//! Plain functions over `u32` addresses, shared by [`NetworkDescriptor`](super::NetworkDescriptor)
//! and [`describe`](super::describe).

use itertools::Itertools;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Returns `None` when `len` is longer than [`MAX_LENGTH`].
///
/// # Examples
/// ```
/// use cidr_summary::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// assert_eq!(get_cidr_mask(33), None);
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        return None;
    }
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    Some(mask as u32)
}

/// Get the network address of `addr` under `mask` (host bits cleared).
pub fn cut_addr(addr: u32, mask: u32) -> u32 {
    addr & mask
}

/// Calculate the broadcast address of `addr` under `mask` (host bits set).
pub fn broadcast_addr(addr: u32, mask: u32) -> u32 {
    cut_addr(addr, mask) | !mask
}

/// Number of addresses covered by a prefix, `2^(32 - len)`.
///
/// A `/0` holds 2^32 addresses, which is why this is a u64.
pub fn num_addresses(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Dotted decimal form, e.g. `255.255.255.0`.
pub fn to_dotted(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Dotted binary form with every octet padded to 8 bits,
/// e.g. `11111111.11111111.11111111.00000000`.
pub fn to_binary_dotted(addr: u32) -> String {
    Ipv4Addr::from(addr)
        .octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}
