//! Summaries of IPv4 networks in CIDR notation.
//!
//! [`parse`] turns `a.b.c.d/n` into a [`NetworkDescriptor`], [`describe`]
//! derives the displayable facts and [`compare`] relates two networks.
//! [`run`] wires these to an [`output::Renderer`].

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use output::Renderer;
use thiserror::Error;

pub use models::{describe, parse, NetworkDescriptor, NetworkInfo, ParseError, ParseErrorReason};
pub use processing::{compare, is_subnet_of, relative_size, Comparison, RelativeSize};

/// Failures surfaced at the command line boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Render `network`, and when `other` is given render it too and check it as
/// a subnet of `network`.
///
/// Both inputs are parsed before anything is rendered, so a bad second
/// network produces no partial output.
pub fn run(network: &str, other: Option<&str>, renderer: &mut dyn Renderer) -> Result<(), AppError> {
    log::info!("#Start run() network={network} other={other:?}");

    let outer = parse(network)?;
    let inner = other.map(parse).transpose()?;

    let outer_info = describe(&outer);
    renderer.network(&outer_info)?;

    if let Some(inner) = inner {
        let inner_info = describe(&inner);
        renderer.network(&inner_info)?;

        let comparison = compare(&inner, &outer);
        log::debug!(
            "{inner} in {outer}: subnet={} ratio={}",
            comparison.is_subnet,
            comparison.relative_size.capacity_ratio
        );
        renderer.summary(&inner_info, &outer_info, &comparison)?;
    }

    renderer.finish()?;
    Ok(())
}
