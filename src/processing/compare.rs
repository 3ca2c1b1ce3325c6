//! Containment and size comparison between two networks.

use crate::models::NetworkDescriptor;
use serde::Serialize;

/// How big `inner` is next to `outer`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct RelativeSize {
    /// `inner` addresses as a percentage of `outer` addresses. Exceeds 100
    /// when `inner` is the larger network.
    pub percentage: f64,
    /// How many networks of `inner`'s size fit numerically in `outer`.
    pub capacity_ratio: u64,
}

/// Outcome of checking one network against another.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub is_subnet: bool,
    #[serde(flatten)]
    pub relative_size: RelativeSize,
}

/// True when every address of `inner` lies inside `outer`.
///
/// Every network is a subnet of itself.
pub fn is_subnet_of(inner: &NetworkDescriptor, outer: &NetworkDescriptor) -> bool {
    outer.prefix_length() <= inner.prefix_length()
        && inner.base_address() & outer.netmask() == outer.base_address()
}

/// Compare address counts. Does not check containment.
pub fn relative_size(inner: &NetworkDescriptor, outer: &NetworkDescriptor) -> RelativeSize {
    let inner_count = inner.num_addresses();
    let outer_count = outer.num_addresses();
    RelativeSize {
        percentage: inner_count as f64 / outer_count as f64 * 100.0,
        capacity_ratio: outer_count / inner_count,
    }
}

/// Containment and relative size in one go.
pub fn compare(inner: &NetworkDescriptor, outer: &NetworkDescriptor) -> Comparison {
    Comparison {
        is_subnet: is_subnet_of(inner, outer),
        relative_size: relative_size(inner, outer),
    }
}
