//! Output formatting for network summaries.
//!
//! Renderers are handed to [`crate::run`] explicitly; nothing here is global.
//! - [`terminal`] - colored text for humans
//! - [`json`] - one JSON document for scripts

mod json;
mod terminal;

use crate::models::NetworkInfo;
use crate::processing::Comparison;
use std::io;

pub use json::JsonRenderer;
pub use terminal::{center_field, group_thousands, TerminalRenderer};

/// Presentation sink for computed network facts.
pub trait Renderer {
    /// Show one network.
    fn network(&mut self, info: &NetworkInfo) -> io::Result<()>;

    /// Show how `inner` relates to `outer`.
    fn summary(
        &mut self,
        inner: &NetworkInfo,
        outer: &NetworkInfo,
        comparison: &Comparison,
    ) -> io::Result<()>;

    /// Flush anything buffered. Called once after the last network.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
