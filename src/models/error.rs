//! CIDR parse failures.

use thiserror::Error;

/// Why a CIDR string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorReason {
    /// The address part is not four dot separated decimal octets.
    MalformedAddress,
    /// An octet is a well formed number above 255.
    OctetOutOfRange,
    /// The prefix is missing, empty or not a decimal number.
    InvalidPrefix,
    /// The prefix is a number above 32.
    PrefixOutOfRange,
}

impl ParseErrorReason {
    /// Stable upper-case code, e.g. `PREFIX_OUT_OF_RANGE`.
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorReason::MalformedAddress => "MALFORMED_ADDRESS",
            ParseErrorReason::OctetOutOfRange => "OCTET_OUT_OF_RANGE",
            ParseErrorReason::InvalidPrefix => "INVALID_PREFIX",
            ParseErrorReason::PrefixOutOfRange => "PREFIX_OUT_OF_RANGE",
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            ParseErrorReason::MalformedAddress => "address must be four decimal octets a.b.c.d",
            ParseErrorReason::OctetOutOfRange => "octet must be between 0 and 255",
            ParseErrorReason::InvalidPrefix => "prefix length must follow '/' as a decimal number",
            ParseErrorReason::PrefixOutOfRange => "prefix length must be between 0 and 32",
        }
    }
}

impl std::fmt::Display for ParseErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.describe(), self.code())
    }
}

/// A CIDR string that could not be turned into a network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid network '{input}': {reason}")]
pub struct ParseError {
    /// The text exactly as it was handed to the parser.
    pub input: String,
    pub reason: ParseErrorReason,
}

impl ParseError {
    pub fn new(input: &str, reason: ParseErrorReason) -> Self {
        ParseError {
            input: input.to_string(),
            reason,
        }
    }
}
