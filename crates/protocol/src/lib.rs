//! Rendering-agnostic result types shared between the index, the resolver,
//! and whatever front end delivers the answer to the user.

use serde::{Deserialize, Serialize};

/// Top of the 24-bit address space the label tables target.
pub const MAX_ADDRESS: u32 = 0xFF_FFFF;

/// A defined address adjacent to a queried, undefined one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    pub address: u32,
    /// Names at `address`, in table order.
    pub names: Vec<String>,
    /// Absolute distance from the queried address.
    pub offset: u32,
}

/// A fuzzy name candidate ranked by edit distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub address: u32,
    pub distance: usize,
}

/// Terminal result of one reverse-lookup query.
///
/// Every query maps to exactly one variant; per-query failures are variants
/// here, never errors that escape the resolver. `Straddle`, `CaseFold`, and
/// `Suggestions` are successful answers with lower confidence, not failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// The query contained no token at all.
    EmptyInput,
    /// The token looked like an address but could not be decoded.
    ParseFailure { token: String },
    /// The decoded address exceeds [`MAX_ADDRESS`].
    TooLarge { token: String, value: u64 },
    /// The address is defined; `names` holds every label at it, table order.
    ExactAddress {
        token: String,
        address: u32,
        /// The token was plain decimal notation (the renderer echoes the
        /// canonical hex form for these).
        decimal_input: bool,
        names: Vec<String>,
    },
    /// The address is undefined but has at least one defined neighbor.
    Straddle {
        token: String,
        address: u32,
        decimal_input: bool,
        before: Option<Neighbor>,
        after: Option<Neighbor>,
    },
    /// Undefined address with no neighbor on either side. Cannot happen with
    /// a non-empty table, but it is an answer, not a crash.
    NoNeighbors { token: String, address: u32 },
    /// Case-sensitive name hit.
    ExactName { name: String, address: u32 },
    /// No exact name, but one matches ignoring case.
    CaseFold {
        token: String,
        name: String,
        address: u32,
    },
    /// Nearest-spelled names, non-decreasing edit distance.
    Suggestions {
        token: String,
        candidates: Vec<Suggestion>,
    },
    /// Name query against an empty table.
    NoData { token: String },
    /// Unexpected fault caught at the resolver boundary.
    InternalError { detail: String },
}

impl LookupOutcome {
    /// True when the query hit an address shared by several names.
    #[must_use]
    pub fn is_alias(&self) -> bool {
        matches!(self, Self::ExactAddress { names, .. } if names.len() > 1)
    }

    /// True for the two full-confidence answers.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::ExactAddress { .. } | Self::ExactName { .. })
    }
}

/// Terminal result of one code-point conversion query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AsciiOutcome {
    /// The query contained no token at all.
    EmptyInput,
    /// Numeric input decoded to one character.
    Char { codepoint: u32, text: String },
    /// Textual input expanded to its scalar values, order preserved.
    Codepoints { text: String, codepoints: Vec<u32> },
    /// Numeric input that is not a Unicode scalar value (surrogate range,
    /// beyond U+10FFFF, or beyond `u32` entirely).
    InvalidCodepoint { codepoint: u64 },
}

/// Canonical display form of an address: `$` plus uppercase hex.
#[must_use]
pub fn canonical_hex(value: u64) -> String {
    format!("${value:X}")
}
