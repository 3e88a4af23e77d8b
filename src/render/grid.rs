//! Page geometry and grid drawing.
//!
//! All absolute values come from the worksheet's fixed layout: A4 paper,
//! grid origin 15 mm from the left and 40 mm from the top, 18 mm square
//! cells, title baseline 25 mm from the top. printpdf's origin is the
//! bottom-left corner, so vertical positions are flipped through
//! [`from_top`].

use printpdf::{Color, IndirectFontRef, Line, Mm, PdfLayerReference, Point, Rgb};

use crate::worksheet_engine::models::{WorksheetModel, GRID_SIZE};

/// A4 portrait, in millimetres.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Grid origin, measured from the top-left corner of the page.
pub const GRID_LEFT_MM: f32 = 15.0;
pub const GRID_TOP_MM: f32 = 40.0;

/// Side length of one grid cell.
pub const CELL_SIZE_MM: f32 = 18.0;

/// Ruled cells per side: the operand header row/column plus the 10×10
/// problem cells.
pub const RULED_CELLS: usize = GRID_SIZE + 1;

/// Title baseline, measured from the top of the page.
pub const TITLE_TOP_MM: f32 = 25.0;

pub const TITLE_FONT_SIZE: f32 = 24.0;
pub const GRID_FONT_SIZE: f32 = 14.0;
pub const FOOTER_FONT_SIZE: f32 = 8.0;

/// Baseline drop below the cell's vertical centre that optically centres
/// 14 pt digits in an 18 mm cell.
const BASELINE_DROP_MM: f32 = 5.0;

/// Stroke width of the grid rules.
const RULE_WIDTH_MM: f32 = 0.2;

/// Average glyph advance in em; close enough to centre digits and short
/// labels without consulting real font metrics.
const AVG_GLYPH_EM: f32 = 0.55;

/// Points to millimetres.
const PT_TO_MM: f32 = 0.3528;

/// Convert a distance from the top edge into printpdf's bottom-left space.
pub fn from_top(mm: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - mm)
}

/// Approximate rendered width of `text` at `font_size` points.
fn approx_width_mm(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * AVG_GLYPH_EM * font_size * PT_TO_MM
}

/// Horizontal centre of ruled-grid column `col` (0 is the header column).
fn cell_center_x(col: usize) -> f32 {
    GRID_LEFT_MM + col as f32 * CELL_SIZE_MM + CELL_SIZE_MM / 2.0
}

/// Text baseline for ruled-grid row `row`, in from-top millimetres.
fn cell_baseline(row: usize) -> f32 {
    GRID_TOP_MM + row as f32 * CELL_SIZE_MM + CELL_SIZE_MM / 2.0 + BASELINE_DROP_MM
}

/// Place `text` horizontally centred on `center_x` with its baseline
/// `baseline_from_top` millimetres below the top edge.
fn centered_text(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    font_size: f32,
    center_x: f32,
    baseline_from_top: f32,
) {
    let x = center_x - approx_width_mm(text, font_size) / 2.0;
    layer.use_text(text, font_size, Mm(x), from_top(baseline_from_top), font);
}

fn straight_line(layer: &PdfLayerReference, x1: f32, y1_from_top: f32, x2: f32, y2_from_top: f32) {
    let points = vec![
        (Point::new(Mm(x1), from_top(y1_from_top)), false),
        (Point::new(Mm(x2), from_top(y2_from_top)), false),
    ];
    layer.add_line(Line {
        points,
        is_closed: false,
    });
}

/// Page title, centred on the page width.
pub fn draw_title(layer: &PdfLayerReference, font: &IndirectFontRef, title: &str) {
    centered_text(layer, font, title, TITLE_FONT_SIZE, PAGE_WIDTH_MM / 2.0, TITLE_TOP_MM);
}

/// Rule the 11×11 grid as horizontal and vertical line sweeps.
pub fn draw_grid_rules(layer: &PdfLayerReference) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.set_outline_thickness(RULE_WIDTH_MM);

    let right = GRID_LEFT_MM + RULED_CELLS as f32 * CELL_SIZE_MM;
    let bottom = GRID_TOP_MM + RULED_CELLS as f32 * CELL_SIZE_MM;

    for i in 0..=RULED_CELLS {
        let y = GRID_TOP_MM + i as f32 * CELL_SIZE_MM;
        straight_line(layer, GRID_LEFT_MM, y, right, y);
    }
    for j in 0..=RULED_CELLS {
        let x = GRID_LEFT_MM + j as f32 * CELL_SIZE_MM;
        straight_line(layer, x, GRID_TOP_MM, x, bottom);
    }
}

/// Operation symbol in the corner cell plus the two operand headers.
pub fn draw_operands(layer: &PdfLayerReference, font: &IndirectFontRef, model: &WorksheetModel) {
    centered_text(
        layer,
        font,
        model.operation.symbol(),
        GRID_FONT_SIZE,
        cell_center_x(0),
        cell_baseline(0),
    );

    for (col, value) in model.top_operands.iter().enumerate() {
        centered_text(
            layer,
            font,
            &value.to_string(),
            GRID_FONT_SIZE,
            cell_center_x(col + 1),
            cell_baseline(0),
        );
    }
    for (row, value) in model.side_operands.iter().enumerate() {
        centered_text(
            layer,
            font,
            &value.to_string(),
            GRID_FONT_SIZE,
            cell_center_x(0),
            cell_baseline(row + 1),
        );
    }
}

/// Fill the 10×10 problem cells with the computed answers. Empty cells
/// (problem pages) draw nothing.
pub fn draw_answers(layer: &PdfLayerReference, font: &IndirectFontRef, model: &WorksheetModel) {
    for (row, row_cells) in model.cells.iter().enumerate() {
        for (col, cell) in row_cells.iter().enumerate() {
            if let Some(answer) = cell {
                centered_text(
                    layer,
                    font,
                    &answer.to_string(),
                    GRID_FONT_SIZE,
                    cell_center_x(col + 1),
                    cell_baseline(row + 1),
                );
            }
        }
    }
}

/// Sheet ID in small type at the bottom-right corner.
pub fn draw_footer(layer: &PdfLayerReference, font: &IndirectFontRef, sheet_id: &str) {
    let label = format!("Sheet {sheet_id}");
    let x = PAGE_WIDTH_MM - GRID_LEFT_MM - approx_width_mm(&label, FOOTER_FONT_SIZE);
    layer.use_text(label, FOOTER_FONT_SIZE, Mm(x), Mm(10.0), font);
}
