//! PDF rendering of a [`WorksheetModel`].
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `grid` | Page geometry and the line/text drawing primitives |
//! | `font` | Builtin/file/URL font resolution with a process-wide cache |
//!
//! The worksheet engine knows nothing about PDFs; this module consumes an
//! immutable model and produces the document bytes (or a named file). The
//! problem page is always drawn; the answer-key page is appended only when
//! the model carries computed answers.

pub mod font;
pub mod grid;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::worksheet_engine::models::WorksheetModel;

/// Title in the PDF info dictionary, not the page heading.
const DOCUMENT_TITLE: &str = "Hyakumasu Keisan";
const LAYER_NAME: &str = "Layer 1";

enum Page {
    Problems,
    Answers,
}

fn load_font(doc: &PdfDocumentReference, custom: Option<&str>) -> Result<IndirectFontRef> {
    match font::resolve(custom)? {
        Some(bytes) => doc
            .add_external_font(bytes.as_slice())
            .map_err(|e| Error::FontLoad(e.to_string())),
        None => doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Error::FontLoad(e.to_string())),
    }
}

fn draw_page(layer: &PdfLayerReference, font: &IndirectFontRef, model: &WorksheetModel, page: Page) {
    let title = match page {
        Page::Problems => &model.title,
        Page::Answers => &model.answer_title,
    };
    grid::draw_title(layer, font, title);
    grid::draw_grid_rules(layer);
    grid::draw_operands(layer, font, model);
    if matches!(page, Page::Answers) {
        grid::draw_answers(layer, font, model);
    }
    grid::draw_footer(layer, font, &model.sheet_id);
}

fn build_document(model: &WorksheetModel, custom_font: Option<&str>) -> Result<PdfDocumentReference> {
    let (doc, page, layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(grid::PAGE_WIDTH_MM),
        Mm(grid::PAGE_HEIGHT_MM),
        LAYER_NAME,
    );

    let font = load_font(&doc, custom_font)?;
    if custom_font.is_none()
        && (font::outside_builtin_encoding(&model.title)
            || (model.include_answers && font::outside_builtin_encoding(&model.answer_title)))
    {
        warn!("worksheet title needs glyphs the builtin font cannot encode; embed a TTF font for full coverage");
    }

    draw_page(&doc.get_page(page).get_layer(layer), &font, model, Page::Problems);

    if model.include_answers {
        let (answer_page, answer_layer) =
            doc.add_page(Mm(grid::PAGE_WIDTH_MM), Mm(grid::PAGE_HEIGHT_MM), LAYER_NAME);
        draw_page(
            &doc.get_page(answer_page).get_layer(answer_layer),
            &font,
            model,
            Page::Answers,
        );
    }

    let pages = 1 + usize::from(model.include_answers);
    debug!("assembled sheet {} ({pages} page document)", model.sheet_id);
    Ok(doc)
}

/// Render `model` to in-memory PDF bytes.
pub fn render_worksheet(model: &WorksheetModel, custom_font: Option<&str>) -> Result<Vec<u8>> {
    build_document(model, custom_font)?
        .save_to_bytes()
        .map_err(|e| Error::Render(e.to_string()))
}

/// Render `model` and write the PDF to `path`.
pub fn save_worksheet(model: &WorksheetModel, custom_font: Option<&str>, path: &Path) -> Result<()> {
    let doc = build_document(model, custom_font)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer).map_err(|e| Error::Render(e.to_string()))?;
    info!("saved worksheet {} to {}", model.sheet_id, path.display());
    Ok(())
}
