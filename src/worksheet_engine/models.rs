use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ---------------------------------------------------------------------------
// Grid primitives
// ---------------------------------------------------------------------------

/// Cells per side of the worksheet grid (10×10 = the "100 cells").
pub const GRID_SIZE: usize = 10;

/// An ordered row of exactly ten operands: either the top row or the left
/// column of the grid.
pub type OperandSet = [u8; GRID_SIZE];

/// Row-major answer grid. `cells[row][col]` is `None` on a problem-only
/// sheet and `Some(answer)` when the answer page was requested.
pub type AnswerGrid = [[Option<i32>; GRID_SIZE]; GRID_SIZE];

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// The arithmetic operation a worksheet drills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    /// The symbol drawn in the corner cell of the grid.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition       => "+",
            Operation::Subtraction    => "-",
            Operation::Multiplication => "×",
        }
    }

    /// Compute one cell answer from a top-row and a left-column operand.
    ///
    /// Widened to `i32` so the function is total over all `u8` pairs; the
    /// generator's operand ranges additionally keep every subtraction
    /// result non-negative.
    pub fn apply(self, top: u8, side: u8) -> i32 {
        let (a, b) = (i32::from(top), i32::from(side));
        match self {
            Operation::Addition       => a + b,
            Operation::Subtraction    => a - b,
            Operation::Multiplication => a * b,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Addition       => "Addition",
            Operation::Subtraction    => "Subtraction",
            Operation::Multiplication => "Multiplication",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Parse the lowercase operation names used on the command line.
    ///
    /// Anything else ("divide", typos, empty input) fails with
    /// [`Error::InvalidOperation`] before any model is built.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "addition"       => Ok(Operation::Addition),
            "subtraction"    => Ok(Operation::Subtraction),
            "multiplication" => Ok(Operation::Multiplication),
            other            => Err(Error::InvalidOperation(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Worksheet request / model types
// ---------------------------------------------------------------------------

/// Fixed label of the problem page when no custom title is given.
pub const WORKSHEET_TITLE: &str = "Hyakumasu Keisan (100-cell calculation)";

/// Fixed label of the answer page when no custom title is given.
pub const ANSWER_KEY_TITLE: &str = "Hyakumasu Keisan (Answer Key)";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetRequest {
    pub operation: Operation,
    /// Also fill in the answer grid (rendered as a second page).
    pub include_answers: bool,
    /// Custom worksheet title; `None` uses [`WORKSHEET_TITLE`].
    pub title: Option<String>,
    /// Fixed seed for reproducible sheets; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl WorksheetRequest {
    /// Minimal constructor: problem page only, default title, entropy seed.
    pub fn new(operation: Operation) -> Self {
        WorksheetRequest {
            operation,
            include_answers: false,
            title: None,
            rng_seed: None,
        }
    }
}

/// One fully specified worksheet, ready to hand to a renderer.
///
/// Built fresh per request and immutable afterwards; the renderer only
/// borrows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetModel {
    /// Operation prefix plus eight hex digits ("AD-1F2E3D4C"). Printed in
    /// the page footer so an answer key can be matched to the problem
    /// sheet it was generated with.
    pub sheet_id: String,
    /// Label of the problem page.
    pub title: String,
    /// Label of the answer page (always distinct from `title`).
    pub answer_title: String,
    pub operation: Operation,
    pub top_operands: OperandSet,
    pub side_operands: OperandSet,
    pub include_answers: bool,
    pub cells: AnswerGrid,
}
