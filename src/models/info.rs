//! Plain facts about a network, ready for any renderer.

use super::ipv4::{to_binary_dotted, to_dotted};
use super::NetworkDescriptor;
use serde::Serialize;

/// Everything a renderer needs to show one network. Contains no markup.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Normalized `a.b.c.d/n`.
    pub cidr: String,
    pub prefix_length: u8,
    pub is_private: bool,
    /// e.g. `255.255.255.0`
    pub netmask_dotted: String,
    /// e.g. `11111111.11111111.11111111.00000000`
    pub netmask_binary: String,
    pub num_addresses: u64,
    pub network_address_dotted: String,
    pub broadcast_address_dotted: String,
}

/// Derive the displayable facts of `network`.
pub fn describe(network: &NetworkDescriptor) -> NetworkInfo {
    NetworkInfo {
        cidr: network.to_string(),
        prefix_length: network.prefix_length(),
        is_private: network.is_private(),
        netmask_dotted: to_dotted(network.netmask()),
        netmask_binary: to_binary_dotted(network.netmask()),
        num_addresses: network.num_addresses(),
        network_address_dotted: to_dotted(network.base_address()),
        broadcast_address_dotted: to_dotted(network.broadcast_address()),
    }
}
