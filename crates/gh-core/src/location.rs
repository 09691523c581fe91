//! Grid addressing: `H<row>-P<position>`.
//!
//! A greenhouse is a grid of rows (`H`, *hilera*) each holding plants at
//! numbered positions (`P`).  Irrigation tasks and plant ids both use the
//! canonical token form `H<row>-P<position>`, e.g. `H1-P2`.
//!
//! Parsing is strict: an uppercase `H`, one or more ASCII digits, a single
//! `-`, an uppercase `P`, one or more ASCII digits, and nothing else.
//! Whitespace stripping is the caller's job (see `gh-plan`).

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// A (row, position) cell of the planting grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row:      u32,
    pub position: u32,
}

impl Location {
    #[inline]
    pub const fn new(row: u32, position: u32) -> Self {
        Self { row, position }
    }

    /// Dash-less form used in movement descriptions: `H1P2`.
    pub fn compact(&self) -> String {
        format!("H{}P{}", self.row, self.position)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}-P{}", self.row, self.position)
    }
}

impl FromStr for Location {
    type Err = CoreError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| CoreError::MalformedLocation {
            token: token.to_owned(),
            reason,
        };

        let (row_part, pos_part) = token
            .split_once('-')
            .ok_or_else(|| malformed("expected `H<row>-P<position>`"))?;

        let row_digits = row_part
            .strip_prefix('H')
            .ok_or_else(|| malformed("row must start with `H`"))?;
        let pos_digits = pos_part
            .strip_prefix('P')
            .ok_or_else(|| malformed("position must start with `P`"))?;

        let row = parse_index(row_digits).ok_or_else(|| malformed("row is not a valid number"))?;
        let position =
            parse_index(pos_digits).ok_or_else(|| malformed("position is not a valid number"))?;

        Ok(Self { row, position })
    }
}

/// Digits only; rejects signs, empty strings, and `u32` overflow.
fn parse_index(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
