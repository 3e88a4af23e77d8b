//! # keisan_drill_gen
//!
//! A fully offline hyakumasu keisan ("100-cell calculation") worksheet
//! generator.
//!
//! This library generates randomised 10×10 arithmetic drill grids: ten
//! operands across the top, ten down the left column, one operation per
//! sheet. A model optionally carries the computed answers for a second
//! page, and the bundled renderer turns any model into a printable A4 PDF.
//!
//! ## How it works
//!
//! 1. Create a [`WorksheetRequest`] with an operation, an answers flag, an
//!    optional custom title, and an optional RNG seed.
//! 2. Call [`generate_worksheet`] — the engine shuffles each operand row
//!    (a Fisher-Yates permutation of a fixed range), fills the answer grid
//!    when asked to, and assembles an immutable [`WorksheetModel`].
//! 3. Hand the model to [`render_worksheet`] for in-memory PDF bytes, or
//!    [`save_worksheet`] to write the file directly.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same sheet every time — useful for tests and for printing a problem
//!   sheet together with its matching answer key.
//! - **Safe subtraction**: subtraction sheets draw minuends from 10..=19
//!   and subtrahends from 1..=10, so every answer stays at or above zero.
//! - **Sheet IDs**: each model carries a `sheet_id` (e.g. `"AD-1F2E3D4C"`),
//!   printed in the page footer, that ties an answer key back to its sheet.
//!
//! ## Quick start
//!
//! ```rust
//! use keisan_drill_gen::{generate_worksheet, Operation, WorksheetRequest};
//!
//! // Minimal — only the operation is required (problems only, entropy seed):
//! let sheet = generate_worksheet(WorksheetRequest::new(Operation::Addition));
//! println!("{}: {}", sheet.sheet_id, sheet.title);
//!
//! // Full control — set every field:
//! let sheet = generate_worksheet(WorksheetRequest {
//!     operation: Operation::Subtraction,
//!     include_answers: true,
//!     title: Some("Friday drill".to_string()),
//!     rng_seed: Some(42),
//! });
//! for row in &sheet.cells {
//!     assert!(row.iter().all(|cell| cell.unwrap() >= 0));
//! }
//! ```
//!
//! Rendering writes the fixed-layout PDF, one or two pages:
//!
//! ```no_run
//! use keisan_drill_gen::{generate_worksheet, save_worksheet, Operation, WorksheetRequest};
//! # fn main() -> keisan_drill_gen::Result<()> {
//! let sheet = generate_worksheet(WorksheetRequest::new(Operation::Multiplication));
//! save_worksheet(&sheet, None, std::path::Path::new("hyakumasu-keisan.pdf"))?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod render;
pub mod worksheet_engine;

// Convenience re-exports so callers can use `keisan_drill_gen::generate_worksheet`
// directly without reaching into `worksheet_engine::`.
pub use error::{Error, Result};
pub use render::{render_worksheet, save_worksheet};
pub use worksheet_engine::{
    answer_grid, generate_worksheet, AnswerGrid, Operation, OperandSet, WorksheetModel,
    WorksheetRequest, ANSWER_KEY_TITLE, GRID_SIZE, WORKSHEET_TITLE,
};

#[cfg(test)]
mod tests;
