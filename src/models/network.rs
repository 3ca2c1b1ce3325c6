//! IPv4 network in CIDR notation.
//!
//! [`NetworkDescriptor`] is built once by [`parse`] and never changes. Host
//! bits present in the input are dropped, so `192.168.1.5/24` and
//! `192.168.1.0/24` describe the same network.

use super::error::{ParseError, ParseErrorReason};
use super::ipv4::{broadcast_addr, cut_addr, get_cidr_mask, num_addresses, MAX_LENGTH};
use super::reserved::is_private_range;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A normalized IPv4 network.
///
/// Ordering is by network address first, then prefix length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NetworkDescriptor {
    base: u32,
    prefix: u8,
    netmask: u32,
}

/// Parse `a.b.c.d/n` into a [`NetworkDescriptor`].
///
/// Octets are plain decimal without leading zeros, the prefix is decimal in
/// `0..=32`. Nothing is trimmed: surrounding whitespace is rejected like any
/// other stray character.
///
/// # Examples
/// ```
/// use cidr_summary::models::parse;
/// let net = parse("192.168.1.5/24").unwrap();
/// assert_eq!(net.to_string(), "192.168.1.0/24");
/// ```
pub fn parse(cidr_text: &str) -> Result<NetworkDescriptor, ParseError> {
    let fail = |reason| ParseError::new(cidr_text, reason);

    let (addr_str, prefix_str) = match cidr_text.split_once('/') {
        Some(parts) => parts,
        None => {
            // still report a bad address first when there is one
            parse_addr(cidr_text).map_err(fail)?;
            return Err(fail(ParseErrorReason::InvalidPrefix));
        }
    };

    let addr = parse_addr(addr_str).map_err(fail)?;
    let prefix = parse_prefix(prefix_str).map_err(fail)?;

    Ok(NetworkDescriptor::new(addr, prefix))
}

fn parse_addr(addr_str: &str) -> Result<u32, ParseErrorReason> {
    let parts: Vec<&str> = addr_str.split('.').collect();
    if parts.len() != 4 {
        return Err(ParseErrorReason::MalformedAddress);
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        *octet = parse_octet(part)?;
    }
    Ok(u32::from(Ipv4Addr::from(octets)))
}

fn parse_octet(part: &str) -> Result<u8, ParseErrorReason> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseErrorReason::MalformedAddress);
    }
    // "010" could be read as octal, refuse to guess
    if part.len() > 1 && part.starts_with('0') {
        return Err(ParseErrorReason::MalformedAddress);
    }
    // without leading zeros, four or more digits is at least 1000
    if part.len() > 3 {
        return Err(ParseErrorReason::OctetOutOfRange);
    }
    let value: u16 = part
        .parse()
        .map_err(|_| ParseErrorReason::MalformedAddress)?;
    u8::try_from(value).map_err(|_| ParseErrorReason::OctetOutOfRange)
}

fn parse_prefix(prefix_str: &str) -> Result<u8, ParseErrorReason> {
    if prefix_str.is_empty() || !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseErrorReason::InvalidPrefix);
    }
    // digits only, so the only way to fail is overflow
    let value: u32 = prefix_str
        .parse()
        .map_err(|_| ParseErrorReason::PrefixOutOfRange)?;
    match u8::try_from(value) {
        Ok(len) if len <= MAX_LENGTH => Ok(len),
        _ => Err(ParseErrorReason::PrefixOutOfRange),
    }
}

impl NetworkDescriptor {
    /// Build from any address inside the network; host bits are cleared.
    ///
    /// Prefix lengths above 32 are clamped to 32.
    pub fn new(addr: u32, prefix: u8) -> Self {
        let prefix = prefix.min(MAX_LENGTH);
        let netmask = get_cidr_mask(prefix).unwrap_or(u32::MAX);
        NetworkDescriptor {
            base: cut_addr(addr, netmask),
            prefix,
            netmask,
        }
    }

    /// Network address as u32.
    pub fn base_address(&self) -> u32 {
        self.base
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix
    }

    pub fn netmask(&self) -> u32 {
        self.netmask
    }

    /// Highest address in the network.
    pub fn broadcast_address(&self) -> u32 {
        broadcast_addr(self.base, self.netmask)
    }

    /// Total addresses in the network, network and broadcast included.
    pub fn num_addresses(&self) -> u64 {
        num_addresses(self.prefix)
    }

    pub fn is_private(&self) -> bool {
        is_private_range(self.base, self.broadcast_address())
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base)
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.broadcast_address())
    }
}

impl FromStr for NetworkDescriptor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl std::fmt::Display for NetworkDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.lo(), self.prefix)
    }
}

impl Serialize for NetworkDescriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for NetworkDescriptor {
    fn deserialize<D>(deserializer: D) -> Result<NetworkDescriptor, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(input: &str) -> ParseErrorReason {
        parse(input).unwrap_err().reason
    }

    #[test]
    fn test_parse_normalizes_host_bits() {
        let net = parse("192.168.1.5/24").unwrap();
        assert_eq!(net.lo(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(net.hi(), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(net.prefix_length(), 24);
        assert_eq!(net.netmask(), 0xFFFFFF00);
        assert_eq!(net.num_addresses(), 256);
        assert!(net.is_private());
        assert_eq!(net, parse("192.168.1.0/24").unwrap());
    }

    #[test]
    fn test_parse_edges() {
        let all = parse("0.0.0.0/0").unwrap();
        assert_eq!(all.num_addresses(), 1 << 32);
        assert_eq!(all.hi(), Ipv4Addr::new(255, 255, 255, 255));
        assert!(!all.is_private());

        let host = parse("8.8.8.8/32").unwrap();
        assert_eq!(host.lo(), host.hi());
        assert_eq!(host.num_addresses(), 1);
        assert!(!host.is_private());

        let any_host = parse("255.255.255.255/0").unwrap();
        assert_eq!(any_host, all);
    }

    #[test]
    fn test_count_matches_range() {
        for len in 0..=MAX_LENGTH {
            let net = NetworkDescriptor::new(0xC0A8_0105, len);
            let span = (net.broadcast_address() - net.base_address()) as u64 + 1;
            assert_eq!(net.num_addresses(), span, "prefix /{len}");
        }
    }

    #[test]
    fn test_public_network() {
        assert!(!parse("8.8.8.0/24").unwrap().is_private());
    }

    #[test]
    fn test_malformed_address() {
        assert_eq!(reason("10.0.0/8"), ParseErrorReason::MalformedAddress);
        assert_eq!(reason("10.0.0.0.0/8"), ParseErrorReason::MalformedAddress);
        assert_eq!(reason("10..0.0/8"), ParseErrorReason::MalformedAddress);
        assert_eq!(reason("10.0.0.x/8"), ParseErrorReason::MalformedAddress);
        assert_eq!(reason("10.0.0.-1/8"), ParseErrorReason::MalformedAddress);
        assert_eq!(reason("010.0.0.0/8"), ParseErrorReason::MalformedAddress);
        assert_eq!(reason(" 10.0.0.0/8"), ParseErrorReason::MalformedAddress);
        assert_eq!(reason("/8"), ParseErrorReason::MalformedAddress);
        assert_eq!(reason(""), ParseErrorReason::MalformedAddress);
        assert_eq!(reason("not-an-ip"), ParseErrorReason::MalformedAddress);
    }

    #[test]
    fn test_octet_out_of_range() {
        assert_eq!(reason("999.0.0.0/8"), ParseErrorReason::OctetOutOfRange);
        assert_eq!(reason("10.0.0.256/32"), ParseErrorReason::OctetOutOfRange);
        assert_eq!(reason("1000.0.0.0/8"), ParseErrorReason::OctetOutOfRange);
        assert_eq!(
            reason("99999999999999999999.0.0.0/8"),
            ParseErrorReason::OctetOutOfRange
        );
    }

    #[test]
    fn test_invalid_prefix() {
        assert_eq!(reason("10.0.0.0"), ParseErrorReason::InvalidPrefix);
        assert_eq!(reason("10.0.0.0/"), ParseErrorReason::InvalidPrefix);
        assert_eq!(reason("10.0.0.0/abc"), ParseErrorReason::InvalidPrefix);
        assert_eq!(reason("10.0.0.0/-1"), ParseErrorReason::InvalidPrefix);
        assert_eq!(reason("10.0.0.0/24 "), ParseErrorReason::InvalidPrefix);
        assert_eq!(reason("10.0.0.0/24/8"), ParseErrorReason::InvalidPrefix);
        assert_eq!(reason("10.0.0.0/255.0.0.0"), ParseErrorReason::InvalidPrefix);
    }

    #[test]
    fn test_prefix_out_of_range() {
        assert_eq!(reason("10.0.0.0/33"), ParseErrorReason::PrefixOutOfRange);
        assert_eq!(reason("10.0.0.0/256"), ParseErrorReason::PrefixOutOfRange);
        assert_eq!(
            reason("10.0.0.0/99999999999999999999"),
            ParseErrorReason::PrefixOutOfRange
        );
    }

    #[test]
    fn test_error_keeps_input() {
        let err = parse("10.0.0.0/33").unwrap_err();
        assert_eq!(err.input, "10.0.0.0/33");
    }

    #[test]
    fn test_from_str_and_display() {
        let net: NetworkDescriptor = "172.20.3.4/12".parse().unwrap();
        assert_eq!(net.to_string(), "172.16.0.0/12");
        assert!("172.20.3.4/40".parse::<NetworkDescriptor>().is_err());
    }

    #[test]
    fn test_ord() {
        let a = parse("10.0.0.0/8").unwrap();
        let b = parse("10.0.0.0/24").unwrap();
        let c = parse("10.0.1.0/24").unwrap();
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
    }

    #[test]
    fn test_serde_as_cidr_string() {
        let net = parse("10.1.2.3/16").unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, r#""10.1.0.0/16""#);

        let back: NetworkDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);

        let bad = serde_json::from_str::<NetworkDescriptor>(r#""10.1.0.0/40""#);
        assert!(bad.unwrap_err().to_string().contains("PREFIX_OUT_OF_RANGE"));
    }
}
