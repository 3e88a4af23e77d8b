use rand::Rng;

use crate::worksheet_engine::models::{OperandSet, Operation};

/// First value of the shared single-digit range (1..=10) used for addition
/// and multiplication rows, and for subtraction's left column.
pub const SINGLE_DIGIT_START: u8 = 1;

/// First value of the minuend range (10..=19) used for subtraction's top
/// row. Every minuend is ≥ every subtrahend, so no cell can go negative.
pub const MINUEND_START: u8 = 10;

/// In-place Fisher-Yates shuffle: uniform over all permutations, O(n).
fn fisher_yates<R: Rng>(rng: &mut R, values: &mut [u8]) {
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
}

/// Build one operand row: the ten values `start..start + 10`, shuffled.
///
/// The result is always a permutation of the fixed range, so each value
/// of the range appears exactly once (the classic 100-cell sheet has no
/// duplicate header numbers).
pub fn shuffled_range<R: Rng>(rng: &mut R, start: u8) -> OperandSet {
    let mut values: OperandSet = std::array::from_fn(|i| start + i as u8);
    fisher_yates(rng, &mut values);
    values
}

/// Draw the top-row and left-column operands for `operation`.
///
/// Addition and multiplication share the single-digit range on both axes;
/// subtraction pairs the minuend range on top with the single-digit range
/// on the side. The top row is drawn before the side column.
pub fn operand_sets<R: Rng>(rng: &mut R, operation: Operation) -> (OperandSet, OperandSet) {
    let (top_start, side_start) = match operation {
        Operation::Addition | Operation::Multiplication => {
            (SINGLE_DIGIT_START, SINGLE_DIGIT_START)
        }
        Operation::Subtraction => (MINUEND_START, SINGLE_DIGIT_START),
    };
    let top = shuffled_range(rng, top_start);
    let side = shuffled_range(rng, side_start);
    (top, side)
}
