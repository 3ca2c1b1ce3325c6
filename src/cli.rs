//! Command line arguments.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cidr-summary")]
#[command(version)]
#[command(about = "Show mask, range and size of an IPv4 network, optionally checking a second one against it.")]
pub struct CommandLine {
    /// Network in CIDR notation, e.g. 10.0.0.0/16
    pub network: String,
    /// Second network, checked as a subnet of the first
    pub other: Option<String>,
    /// Print one JSON document instead of colored text
    #[arg(long)]
    pub json: bool,
    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
