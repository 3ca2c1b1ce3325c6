//! Network comparison logic.
//!
//! This module contains the operations that relate two networks:
//! - [`is_subnet_of`] - containment check
//! - [`relative_size`] - percentage and capacity ratio
//! - [`compare`] - both of the above as a [`Comparison`]

mod compare;

// Re-export public functions
pub use compare::{compare, is_subnet_of, relative_size, Comparison, RelativeSize};
