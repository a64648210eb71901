use tracing::info;

use flightquote_core::models::quotation::Quotation;

use crate::assets::AssetStore;
use crate::canvas::{PdfCanvas, LETTER};
use crate::compose::render_document;
use crate::error::ExportError;
use crate::styles::DocumentStyles;

pub const CONTENT_TYPE: &str = "application/pdf";
pub const SUGGESTED_FILENAME: &str = "flight_quotation.pdf";
const DOCUMENT_TITLE: &str = "Flight Quotation";

/// Render `quotation` to a complete PDF document.
pub fn generate_pdf(
    quotation: &Quotation,
    styles: &DocumentStyles,
    assets: &AssetStore,
) -> Result<Vec<u8>, ExportError> {
    let mut canvas = PdfCanvas::new(DOCUMENT_TITLE, LETTER)?;
    let summary = render_document(&mut canvas, quotation, styles, assets)?;
    let bytes = canvas.finish()?;

    info!(
        theme = %styles.theme,
        groups = quotation.flights.len(),
        pages = summary.pages,
        bytes = bytes.len(),
        "quotation rendered"
    );
    Ok(bytes)
}
