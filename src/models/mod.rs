//! Domain models for CIDR summaries.
//!
//! This module contains the core data structures used throughout the application:
//! - [`NetworkDescriptor`] - normalized IPv4 network built by [`parse`]
//! - [`NetworkInfo`] - displayable facts produced by [`describe`]
//! - [`ParseError`] - why a CIDR string was rejected

mod error;
mod info;
mod ipv4;
mod network;
mod reserved;

// Re-export public types
pub use error::{ParseError, ParseErrorReason};
pub use info::{describe, NetworkInfo};
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, num_addresses, to_binary_dotted, to_dotted,
    MAX_LENGTH,
};
pub use network::{parse, NetworkDescriptor};
pub use reserved::is_private_range;
