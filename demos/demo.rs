//! Terminal walkthrough of the worksheet engine.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `keisan_drill_gen` works end to end:
//!
//! 1. **Problem page vs answer page** — the same addition sheet is generated
//!    twice (same seed = same operands), first problems-only and then with
//!    the answer grid filled in, showing that only the cells differ.
//!
//! 2. **All three operations** — one sheet per operation with fixed seeds,
//!    so the output is deterministic and reproducible.
//!
//! ## Key concepts demonstrated
//!
//! - `WorksheetRequest::new(operation)` — minimal one-argument constructor.
//!   Defaults: problems only, fixed heading, entropy seed.
//! - `rng_seed: Some(u64)` makes the output fully deterministic.
//! - Subtraction sheets draw their top row from 10..=19, so no cell is
//!   ever negative.
//! - The model printed at the end is exactly what the CLI emits with
//!   `--json`.

use keisan_drill_gen::{generate_worksheet, Operation, WorksheetModel, WorksheetRequest};

/// Pretty-print one sheet as a text grid.
///
/// Shows: operation, title, sheet ID, the operand headers, and either the
/// answers or a dot per unsolved cell.
fn print_sheet(sheet: &WorksheetModel) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{} — {}]  ID: {}", sheet.operation, sheet.title, sheet.sheet_id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    print!("  {:>3} |", sheet.operation.symbol());
    for top in sheet.top_operands {
        print!(" {top:>3}");
    }
    println!();
    println!("  ----+{}", "-".repeat(4 * sheet.top_operands.len()));
    for (row, side) in sheet.side_operands.iter().enumerate() {
        print!("  {side:>3} |");
        for cell in sheet.cells[row] {
            match cell {
                Some(answer) => print!(" {answer:>3}"),
                None         => print!("   ."),
            }
        }
        println!();
    }
    println!();
}

fn main() {
    // ── Minimal API ────────────────────────────────────────────────────────
    // WorksheetRequest::new() only requires the operation — everything else
    // defaults (problems only, fixed heading, entropy seed).
    println!();
    println!("══ Minimal API: WorksheetRequest::new() ══");
    println!();
    let sheet = generate_worksheet(WorksheetRequest::new(Operation::Addition));
    println!("  Fresh sheet: {}  ID: {}", sheet.title, sheet.sheet_id);
    println!();

    // ── Problem page vs answer page ──────────────────────────────────────────
    // Same operation + same seed = same operands and same sheet ID.
    // Only the cells change between the two models.
    println!();
    println!("══ Problems vs answers: Addition seed=4004 ══");
    println!();
    let problems = generate_worksheet(WorksheetRequest {
        operation: Operation::Addition,
        include_answers: false,
        title: None,
        rng_seed: Some(4004),
    });
    print_sheet(&problems);
    let answers = generate_worksheet(WorksheetRequest {
        operation: Operation::Addition,
        include_answers: true,
        title: None,
        rng_seed: Some(4004),
    });
    print_sheet(&answers);

    // ── All three operations ─────────────────────────────────────────────────
    // One answered sheet per operation, fixed seed for reproducible output.
    println!();
    println!("══ All three operations (answer grids) ══");
    println!();

    let operations = [
        (Operation::Addition,       1001u64),
        (Operation::Subtraction,    2002),
        (Operation::Multiplication, 3003),
    ];

    for (operation, seed) in operations {
        let sheet = generate_worksheet(WorksheetRequest {
            operation,
            include_answers: true,
            title: None,
            rng_seed: Some(seed),
        });
        print_sheet(&sheet);
    }

    // ── JSON surface ─────────────────────────────────────────────────────────
    // The same document the CLI emits with --json, ready for external tools.
    println!();
    println!("══ Model as JSON (what --json prints) ══");
    println!();

    let sheet = generate_worksheet(WorksheetRequest {
        operation: Operation::Multiplication,
        include_answers: false,
        title: Some("Demo sheet".to_string()),
        rng_seed: Some(7),
    });
    match serde_json::to_string_pretty(&sheet) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("serialization failed: {err}"),
    }
}
