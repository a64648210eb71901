use crate::assets::ImageCache;
use crate::canvas::{Align, Canvas, Point, Rect, Stroke, TextStyle};
use crate::error::ExportError;
use crate::flow::PageChrome;
use crate::styles::DocumentStyles;

/// The quotation template's header (logo, title, divider) and footer band.
pub struct TemplateChrome<'a> {
    styles: &'a DocumentStyles,
    images: &'a ImageCache<'a>,
}

impl<'a> TemplateChrome<'a> {
    pub fn new(styles: &'a DocumentStyles, images: &'a ImageCache<'a>) -> Self {
        Self { styles, images }
    }
}

impl PageChrome for TemplateChrome<'_> {
    fn render_header(&self, canvas: &mut dyn Canvas) -> Result<f32, ExportError> {
        let header = &self.styles.header;
        let palette = &self.styles.palette;
        let margin = self.styles.page.margin;
        let right = canvas.page_size().width - margin;
        let content_width = right - margin;
        let mut y = margin;

        match self.images.logo() {
            Some(logo) => {
                let frame = logo.fit_within(Rect::new(
                    margin,
                    y,
                    header.logo_width,
                    header.logo_max_height,
                ));
                // Left-aligned, top-anchored.
                let frame = Rect::new(margin, y, frame.width, frame.height);
                canvas.image(&logo, frame)?;
                y += header.logo_advance;

                canvas.text(
                    &header.title,
                    Point::new(margin, y),
                    content_width,
                    Align::Left,
                    TextStyle::bold(header.title_size, palette.title),
                )?;
                y += header.title_advance;

                canvas.line(
                    Point::new(margin, y),
                    Point::new(right, y),
                    Stroke::new(palette.brand, header.divider_width),
                )?;
            }
            None => {
                canvas.text(
                    &header.fallback_text,
                    Point::new(margin, y),
                    content_width,
                    Align::Left,
                    TextStyle::regular(header.fallback_size, palette.brand),
                )?;
                y += header.fallback_advance;

                canvas.line(
                    Point::new(margin, y),
                    Point::new(right, y),
                    Stroke::new(palette.brand, header.fallback_divider_width),
                )?;
            }
        }

        Ok(y + header.divider_gap)
    }

    fn render_footer(&self, canvas: &mut dyn Canvas) -> Result<(), ExportError> {
        let footer = &self.styles.footer;
        let page = canvas.page_size();
        let band = Rect::new(
            footer.inset,
            page.height - footer.inset - footer.height,
            page.width - footer.inset * 2.0,
            footer.height,
        );

        match self.images.footer() {
            Some(image) => canvas.image(&image, band),
            None => canvas.text(
                &footer.fallback_text,
                Point::new(band.x, band.y),
                band.width,
                Align::Center,
                TextStyle::regular(footer.fallback_size, self.styles.palette.footer_text),
            ),
        }
    }
}
