// 🏷️ Tax Type - Closed set of tax-category labels
//
// "A tax type is a VALUE drawn from a closed set, not a free-form string"
//
// Problem solved:
// - A record's "tax type" field must only ever hold a recognized label
// - The stable string identifiers ("gst", "vatNumber") never drift
// - Invalid labels cannot be constructed, only rejected at the boundary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// TAX TYPE
// ============================================================================

/// Category of tax identifier recognized by the system.
///
/// The set is closed: exactly two members, fixed at compile time, never
/// extended at runtime. Each variant maps to a stable string identifier
/// that consumers store and exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxType {
    /// Goods and Services Tax identifier ("gst")
    #[serde(rename = "gst")]
    Gst,

    /// Value Added Tax registration number ("vatNumber")
    #[serde(rename = "vatNumber")]
    Vat,
}

impl TaxType {
    /// Every member of the closed set, in declaration order.
    pub const ALL: [TaxType; 2] = [TaxType::Gst, TaxType::Vat];

    /// Stable string identifier for this tax type.
    ///
    /// These are the exact strings consumers persist and compare against;
    /// they are part of the public contract and never change.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxType::Gst => "gst",
            TaxType::Vat => "vatNumber",
        }
    }

    /// Check whether a candidate string is a valid tax-type value.
    ///
    /// Case-sensitive exact match only: `"GST"`, `"Vat"` and `"vat_number"`
    /// are all rejected.
    pub fn is_valid(candidate: &str) -> bool {
        Self::ALL.iter().any(|t| t.as_str() == candidate)
    }
}

impl fmt::Display for TaxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Error for a candidate string that is not a recognized tax-type value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTaxTypeError {
    pub candidate: String,
}

impl fmt::Display for ParseTaxTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid tax type {:?} (expected \"gst\" or \"vatNumber\")",
            self.candidate
        )
    }
}

impl std::error::Error for ParseTaxTypeError {}

impl FromStr for TaxType {
    type Err = ParseTaxTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gst" => Ok(TaxType::Gst),
            "vatNumber" => Ok(TaxType::Vat),
            other => Err(ParseTaxTypeError {
                candidate: other.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for TaxType {
    type Error = ParseTaxTypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ============================================================================
// TESTS
// ============================================================================
