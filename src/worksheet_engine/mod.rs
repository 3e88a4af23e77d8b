//! Core worksheet engine — operand generation and answer computation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: operation, request/model structs, grid aliases |
//! | `operands`  | Fixed operand ranges with Fisher-Yates shuffle and deterministic seeding |
//! | `generator` | Single entry point `generate_worksheet()` — assembles the model |

pub mod generator;
pub mod models;
pub mod operands;

// Re-export the public API surface so callers can use
// `worksheet_engine::generate_worksheet` without reaching into sub-modules.
pub use generator::{answer_grid, generate_worksheet};
pub use models::{
    AnswerGrid, OperandSet, Operation, WorksheetModel, WorksheetRequest,
    ANSWER_KEY_TITLE, GRID_SIZE, WORKSHEET_TITLE,
};
