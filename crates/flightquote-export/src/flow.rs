//! Pagination state machine.
//!
//! A [`LayoutCursor`] is returned by every drawing routine and passed to the
//! next one; nothing keeps an implicit "current y". [`PageFlow`] owns the
//! canvas for one document and calls the registered [`PageChrome`] on every
//! page transition: footer on the outgoing page, header on the incoming one.

use tracing::debug;

use crate::assets::ImageCache;
use crate::canvas::Canvas;
use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Where the next widget starts drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub page_index: usize,
    pub y: f32,
}

impl LayoutCursor {
    pub fn advance(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }
}

/// Recurring page furniture, invoked by [`PageFlow`] on page transitions.
pub trait PageChrome {
    /// Draw the header at the top of the current page and return the `y`
    /// where body content may begin.
    fn render_header(&self, canvas: &mut dyn Canvas) -> Result<f32, ExportError>;

    /// Draw the footer band at the bottom of the current page.
    fn render_footer(&self, canvas: &mut dyn Canvas) -> Result<(), ExportError>;
}

/// Totals reported once a document is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowSummary {
    pub pages: usize,
    pub page_breaks: usize,
}

pub struct PageFlow<'a> {
    canvas: &'a mut dyn Canvas,
    chrome: &'a dyn PageChrome,
    styles: &'a DocumentStyles,
    images: &'a ImageCache<'a>,
    page_breaks: usize,
}

impl<'a> PageFlow<'a> {
    pub fn new(
        canvas: &'a mut dyn Canvas,
        chrome: &'a dyn PageChrome,
        styles: &'a DocumentStyles,
        images: &'a ImageCache<'a>,
    ) -> Self {
        Self {
            canvas,
            chrome,
            styles,
            images,
            page_breaks: 0,
        }
    }

    /// Render the first page's header and return the body start.
    pub fn start(&mut self) -> Result<LayoutCursor, ExportError> {
        let y = self.chrome.render_header(self.canvas)?;
        Ok(LayoutCursor {
            page_index: self.canvas.page_index(),
            y,
        })
    }

    pub fn canvas(&mut self) -> &mut dyn Canvas {
        &mut *self.canvas
    }

    pub fn styles(&self) -> &'a DocumentStyles {
        self.styles
    }

    pub fn images(&self) -> &'a ImageCache<'a> {
        self.images
    }

    pub fn page_width(&self) -> f32 {
        self.canvas.page_size().width
    }

    /// Lowest `y` body content may reach on any page.
    pub fn bottom_limit(&self) -> f32 {
        self.canvas.page_size().height - self.styles.page.bottom_margin
    }

    pub fn fits(&self, cursor: LayoutCursor, height: f32) -> bool {
        cursor.y + height <= self.bottom_limit()
    }

    /// Footer on the outgoing page, new page, header on the incoming one.
    pub fn break_page(&mut self, cursor: LayoutCursor) -> Result<LayoutCursor, ExportError> {
        self.check_current(cursor)?;
        self.chrome.render_footer(self.canvas)?;
        self.canvas.new_page()?;
        let y = self.chrome.render_header(self.canvas)?;
        self.page_breaks += 1;

        let next = LayoutCursor {
            page_index: self.canvas.page_index(),
            y,
        };
        debug!(page = next.page_index + 1, y, "page break");
        Ok(next)
    }

    /// Break the page unless `height` more points fit below `cursor`.
    ///
    /// Errors if the block would not fit even on a fresh page, since
    /// breaking again could never make room for it.
    pub fn ensure_room(
        &mut self,
        cursor: LayoutCursor,
        height: f32,
    ) -> Result<LayoutCursor, ExportError> {
        self.check_current(cursor)?;
        if self.fits(cursor, height) {
            return Ok(cursor);
        }
        let next = self.break_page(cursor)?;
        if !self.fits(next, height) {
            return Err(ExportError::Layout(format!(
                "block of {height}pt does not fit below the page header at y={}",
                next.y
            )));
        }
        Ok(next)
    }

    /// Close the document: footer on the final page, exactly once.
    pub fn finish(self, cursor: LayoutCursor) -> Result<FlowSummary, ExportError> {
        self.check_current(cursor)?;
        self.chrome.render_footer(self.canvas)?;
        Ok(FlowSummary {
            pages: self.canvas.page_index() + 1,
            page_breaks: self.page_breaks,
        })
    }

    fn check_current(&self, cursor: LayoutCursor) -> Result<(), ExportError> {
        let current = self.canvas.page_index();
        if cursor.page_index != current {
            return Err(ExportError::Layout(format!(
                "stale cursor for page {} while drawing page {current}",
                cursor.page_index
            )));
        }
        Ok(())
    }
}
