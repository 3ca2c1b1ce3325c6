//! Terminal output with colors.

use super::Renderer;
use crate::models::NetworkInfo;
use crate::processing::Comparison;
use colored::Colorize;
use std::io::{self, Write};

const SYSTEM_WIDTH: usize = 12;
const OCTET_WIDTH: usize = 10;
const SEPARATOR_WIDTH: usize = 60;

/// Center a value in a field of `width` characters.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// The value unchanged when it is already wider than `width`
pub fn center_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:^width$}")
}

/// Format a count with `,` between groups of three digits, e.g. `65,536`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Writes a human readable report to any [`Write`] sink.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        TerminalRenderer { out }
    }

    /// Give back the sink, mostly useful in tests.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn mask_table(&mut self, info: &NetworkInfo) -> io::Result<()> {
        let header: String = ["First", "Second", "Third", "Fourth"]
            .iter()
            .map(|h| center_field(h, OCTET_WIDTH))
            .collect();
        writeln!(
            self.out,
            "{}{}",
            format!("{:<SYSTEM_WIDTH$}", "System").magenta().bold(),
            header.magenta().bold()
        )?;

        let rows = [
            ("Decimal", &info.netmask_dotted),
            ("Binary", &info.netmask_binary),
        ];
        for (system, value) in rows {
            let cells: String = value
                .split('.')
                .map(|octet| center_field(octet, OCTET_WIDTH))
                .collect();
            writeln!(
                self.out,
                "{}{}",
                format!("{system:<SYSTEM_WIDTH$}").dimmed(),
                cells
            )?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn network(&mut self, info: &NetworkInfo) -> io::Result<()> {
        let kind = if info.is_private { "private" } else { "public" };
        writeln!(
            self.out,
            "{} {} {}",
            "The network".green().bold(),
            info.cidr.cyan().bold(),
            format!("is {kind}:").green().bold()
        )?;
        writeln!(self.out, "Mask: {}", info.netmask_dotted.yellow().bold())?;
        writeln!(
            self.out,
            "Total addresses: {}",
            group_thousands(info.num_addresses).bold()
        )?;
        writeln!(
            self.out,
            "IP ranges: {} -> {}",
            info.network_address_dotted.bold(),
            info.broadcast_address_dotted.bold()
        )?;
        self.mask_table(info)?;
        writeln!(self.out, "{}", "─".repeat(SEPARATOR_WIDTH).red().bold())
    }

    fn summary(
        &mut self,
        inner: &NetworkInfo,
        outer: &NetworkInfo,
        comparison: &Comparison,
    ) -> io::Result<()> {
        writeln!(self.out, "{}", "Summary:".red().bold())?;
        if !comparison.is_subnet {
            return writeln!(
                self.out,
                "The network {} is not a subnet of {}.",
                inner.cidr.cyan().bold(),
                outer.cidr.cyan().bold()
            );
        }

        let size = &comparison.relative_size;
        writeln!(
            self.out,
            "The network {} is a subnet of {}.",
            inner.cidr.cyan().bold(),
            outer.cidr.cyan().bold()
        )?;
        writeln!(
            self.out,
            "- {} represents {} of the network {}.",
            inner.cidr.cyan().bold(),
            format!("{:.4}%", size.percentage).magenta().bold(),
            outer.cidr.cyan().bold()
        )?;
        writeln!(
            self.out,
            "- You can fit {} networks like {} in {}.",
            size.capacity_ratio.to_string().bold(),
            inner.cidr.cyan().bold(),
            outer.cidr.cyan().bold()
        )
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
