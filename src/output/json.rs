//! JSON output, one document per run.

use super::Renderer;
use crate::models::NetworkInfo;
use crate::processing::Comparison;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize, Debug)]
struct Summary {
    inner: String,
    outer: String,
    #[serde(flatten)]
    comparison: Comparison,
}

#[derive(Serialize, Debug, Default)]
struct Report {
    networks: Vec<NetworkInfo>,
    summary: Option<Summary>,
}

/// Collects everything and writes a single pretty printed document on
/// [`Renderer::finish`].
pub struct JsonRenderer<W: Write> {
    out: W,
    report: Report,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        JsonRenderer {
            out,
            report: Report::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn network(&mut self, info: &NetworkInfo) -> io::Result<()> {
        self.report.networks.push(info.clone());
        Ok(())
    }

    fn summary(
        &mut self,
        inner: &NetworkInfo,
        outer: &NetworkInfo,
        comparison: &Comparison,
    ) -> io::Result<()> {
        self.report.summary = Some(Summary {
            inner: inner.cidr.clone(),
            outer: outer.cidr.clone(),
            comparison: *comparison,
        });
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &self.report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
