//! Special-purpose IPv4 blocks that are not globally routable.
//!
//! Mirrors the IANA IPv4 special-purpose address registry entries marked
//! "globally reachable: false".

/// `(network, prefix length)` of every non-global block.
const PRIVATE_BLOCKS: [(u32, u8); 13] = [
    (0x0000_0000, 8),  // 0.0.0.0/8 "this network"
    (0x0A00_0000, 8),  // 10.0.0.0/8 RFC 1918
    (0x7F00_0000, 8),  // 127.0.0.0/8 loopback
    (0xA9FE_0000, 16), // 169.254.0.0/16 link-local
    (0xAC10_0000, 12), // 172.16.0.0/12 RFC 1918
    (0xC000_0000, 24), // 192.0.0.0/24 IETF protocol assignments
    (0xC000_0200, 24), // 192.0.2.0/24 TEST-NET-1
    (0xC0A8_0000, 16), // 192.168.0.0/16 RFC 1918
    (0xC612_0000, 15), // 198.18.0.0/15 benchmarking
    (0xC633_6400, 24), // 198.51.100.0/24 TEST-NET-2
    (0xCB00_7100, 24), // 203.0.113.0/24 TEST-NET-3
    (0xF000_0000, 4),  // 240.0.0.0/4 reserved
    (0xFFFF_FFFF, 32), // 255.255.255.255/32 limited broadcast
];

/// Globally reachable hosts carved out of 192.0.0.0/24 (PCP and TURN anycast).
const GLOBAL_EXCEPTIONS: [u32; 2] = [0xC000_0009, 0xC000_000A];

fn block_contains(block: (u32, u8), addr: u32) -> bool {
    let (network, len) = block;
    let mask = super::get_cidr_mask(len).unwrap_or(u32::MAX);
    addr & mask == network
}

/// True when `[base, broadcast]` sits entirely inside one non-global block.
///
/// The blocks are aligned, so checking both ends against the same block is
/// enough to cover every address between them.
pub fn is_private_range(base: u32, broadcast: u32) -> bool {
    let in_block = PRIVATE_BLOCKS
        .iter()
        .any(|&block| block_contains(block, base) && block_contains(block, broadcast));
    in_block
        && !GLOBAL_EXCEPTIONS
            .iter()
            .any(|&host| host == base || host == broadcast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn range(a: [u8; 4], b: [u8; 4]) -> bool {
        is_private_range(u32::from(Ipv4Addr::from(a)), u32::from(Ipv4Addr::from(b)))
    }

    #[test]
    fn test_rfc1918() {
        assert!(range([10, 0, 0, 0], [10, 255, 255, 255]));
        assert!(range([172, 16, 0, 0], [172, 31, 255, 255]));
        assert!(range([192, 168, 1, 0], [192, 168, 1, 255]));
        assert!(!range([172, 32, 0, 0], [172, 32, 0, 255]));
    }

    #[test]
    fn test_loopback_and_link_local() {
        assert!(range([127, 0, 0, 1], [127, 0, 0, 1]));
        assert!(range([169, 254, 10, 0], [169, 254, 10, 255]));
    }

    #[test]
    fn test_public_ranges() {
        assert!(!range([8, 8, 8, 0], [8, 8, 8, 255]));
        assert!(!range([1, 1, 1, 1], [1, 1, 1, 1]));
        // shared address space is neither private nor global
        assert!(!range([100, 64, 0, 0], [100, 127, 255, 255]));
    }

    #[test]
    fn test_range_spanning_blocks_is_not_private() {
        // 10.0.0.0/7 covers 10/8 and the public 11/8
        assert!(!range([10, 0, 0, 0], [11, 255, 255, 255]));
        // 0.0.0.0/0 is everything
        assert!(!range([0, 0, 0, 0], [255, 255, 255, 255]));
    }

    #[test]
    fn test_global_exceptions() {
        assert!(range([192, 0, 0, 8], [192, 0, 0, 8]));
        assert!(!range([192, 0, 0, 9], [192, 0, 0, 9]));
        assert!(!range([192, 0, 0, 10], [192, 0, 0, 10]));
    }
}
