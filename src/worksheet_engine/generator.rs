use rand::{rngs::StdRng, SeedableRng};
use rand::RngCore;

use crate::worksheet_engine::{
    models::{
        AnswerGrid, OperandSet, Operation, WorksheetModel, WorksheetRequest,
        ANSWER_KEY_TITLE, GRID_SIZE, WORKSHEET_TITLE,
    },
    operands,
};

/// Generate a unique sheet ID from operation + RNG.
fn make_sheet_id(operation: Operation, rng: &mut impl RngCore) -> String {
    let prefix = match operation {
        Operation::Addition       => "AD",
        Operation::Subtraction    => "SU",
        Operation::Multiplication => "MU",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Compute the full answer grid for explicit operand rows:
/// `grid[row][col] = top[col] <op> side[row]`.
///
/// Exposed separately from [`generate_worksheet`] so fixed operand rows
/// can be solved too (re-printing the answer key of a saved sheet).
pub fn answer_grid(operation: Operation, top: &OperandSet, side: &OperandSet) -> AnswerGrid {
    let mut cells: AnswerGrid = [[None; GRID_SIZE]; GRID_SIZE];
    for (row, side_value) in side.iter().enumerate() {
        for (col, top_value) in top.iter().enumerate() {
            cells[row][col] = Some(operation.apply(*top_value, *side_value));
        }
    }
    cells
}

/// Core entry point: build one immutable [`WorksheetModel`] from a request.
///
/// The RNG call order is fixed (sheet id, then top operands, then side
/// operands) so a given seed always reproduces the same sheet.
pub fn generate_worksheet(request: WorksheetRequest) -> WorksheetModel {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let sheet_id = make_sheet_id(request.operation, &mut rng);
    let (top_operands, side_operands) = operands::operand_sets(&mut rng, request.operation);

    let (title, answer_title) = match request.title {
        Some(custom) => {
            let answer_title = format!("{custom} (Answer Key)");
            (custom, answer_title)
        }
        None => (WORKSHEET_TITLE.to_string(), ANSWER_KEY_TITLE.to_string()),
    };

    let cells = if request.include_answers {
        answer_grid(request.operation, &top_operands, &side_operands)
    } else {
        [[None; GRID_SIZE]; GRID_SIZE]
    };

    WorksheetModel {
        sheet_id,
        title,
        answer_title,
        operation: request.operation,
        top_operands,
        side_operands,
        include_answers: request.include_answers,
        cells,
    }
}
