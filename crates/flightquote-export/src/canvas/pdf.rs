use std::collections::HashMap;
use std::io::BufWriter;

use lopdf::{Object, ObjectId};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef, Line,
    Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Polygon, Px, Rgb,
};

use tracing::debug;

use crate::assets::ImageAsset;
use crate::error::ExportError;

use super::{
    approx_text_width, check_point, check_rect, check_stroke, check_text_box, fit_text, Align,
    BoxStyle, Canvas, Color, Fill, FontWeight, PageSize, Point, Rect, Stroke, TextStyle,
};

const PT_TO_MM: f32 = 0.352_777_78;
const LAYER_NAME: &str = "Layer 1";
/// Fixed so identical input yields an identical document body.
const DOCUMENT_ID: &str = "flightquotationdocument000000000";
/// Distance from the top of a line box to the baseline, in ems.
const BASELINE_RATIO: f32 = 0.8;
const GRADIENT_BANDS: usize = 16;
const ARC_STEPS: usize = 6;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// printpdf-backed canvas using the built-in Helvetica faces.
pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: Fonts,
    page: PageSize,
    page_index: usize,
}

impl PdfCanvas {
    pub fn new(title: &str, page: PageSize) -> Result<Self, ExportError> {
        let (doc, first_page, first_layer) = PdfDocument::new(
            title,
            Mm(page.width * PT_TO_MM),
            Mm(page.height * PT_TO_MM),
            LAYER_NAME,
        );
        let doc = doc.with_document_id(DOCUMENT_ID.to_string());

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| ExportError::Pdf(e.to_string()))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| ExportError::Pdf(e.to_string()))?,
        };
        let layer = doc.get_page(first_page).get_layer(first_layer);

        Ok(Self {
            doc,
            layer,
            fonts,
            page,
            page_index: 0,
        })
    }

    /// Serialize the document. Consumes the canvas; no page can follow.
    pub fn finish(self) -> Result<Vec<u8>, ExportError> {
        let PdfCanvas { doc, .. } = self;
        let mut writer = BufWriter::new(Vec::new());
        doc.save(&mut writer)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        share_identical_images(&bytes)
    }

    fn pdf_point(&self, x: f32, y: f32) -> printpdf::Point {
        printpdf::Point::new(Mm(x * PT_TO_MM), Mm((self.page.height - y) * PT_TO_MM))
    }

    fn polygon(&self, outline: &[(f32, f32)], mode: PaintMode) {
        let ring = outline
            .iter()
            .map(|&(x, y)| (self.pdf_point(x, y), false))
            .collect();
        self.layer.add_polygon(Polygon {
            rings: vec![ring],
            mode,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn set_stroke(&self, stroke: Stroke) {
        self.layer.set_outline_color(pdf_color(stroke.color));
        self.layer.set_outline_thickness(stroke.width);
    }

    fn font(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.fonts.regular,
            FontWeight::Bold => &self.fonts.bold,
        }
    }
}

impl Canvas for PdfCanvas {
    fn page_size(&self) -> PageSize {
        self.page
    }

    fn page_index(&self) -> usize {
        self.page_index
    }

    fn draw_rect(&mut self, rect: Rect, style: BoxStyle) -> Result<(), ExportError> {
        check_rect(rect)?;
        let radius = style.radius.max(0.0).min(rect.width / 2.0).min(rect.height / 2.0);

        match style.fill {
            Fill::Solid(color) => {
                self.layer.set_fill_color(pdf_color(color));
                self.polygon(&rounded_outline(rect, radius), PaintMode::Fill);
            }
            Fill::VerticalGradient { top, bottom } => {
                // No shading patterns in the built-in API: paint thin bands,
                // each inset to follow the rounded corners.
                let band = rect.height / GRADIENT_BANDS as f32;
                for i in 0..GRADIENT_BANDS {
                    let y0 = rect.y + band * i as f32;
                    let mid = band * (i as f32 + 0.5);
                    let inset = corner_inset(mid, rect.height, radius);
                    let t = i as f32 / (GRADIENT_BANDS - 1) as f32;
                    self.layer.set_fill_color(pdf_color(top.mix(bottom, t)));
                    // Overlap bands slightly to avoid hairline seams.
                    let strip = Rect::new(
                        rect.x + inset,
                        y0,
                        rect.width - inset * 2.0,
                        (band + 0.25).min(rect.bottom() - y0),
                    );
                    self.polygon(&rounded_outline(strip, 0.0), PaintMode::Fill);
                }
            }
        }

        if let Some(stroke) = style.stroke {
            check_stroke(stroke)?;
            self.set_stroke(stroke);
            let points = rounded_outline(rect, radius)
                .into_iter()
                .map(|(x, y)| (self.pdf_point(x, y), false))
                .collect();
            self.layer.add_line(Line {
                points,
                is_closed: true,
            });
        }
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), ExportError> {
        check_point(from)?;
        check_point(to)?;
        check_stroke(stroke)?;
        self.set_stroke(stroke);
        self.layer.add_line(Line {
            points: vec![
                (self.pdf_point(from.x, from.y), false),
                (self.pdf_point(to.x, to.y), false),
            ],
            is_closed: false,
        });
        Ok(())
    }

    fn text(
        &mut self,
        text: &str,
        origin: Point,
        width: f32,
        align: Align,
        style: TextStyle,
    ) -> Result<(), ExportError> {
        check_text_box(origin, width, style)?;
        let fitted = fit_text(text, width, style.size, style.weight);
        if fitted.is_empty() {
            return Ok(());
        }

        let slack = (width - approx_text_width(&fitted, style.size, style.weight)).max(0.0);
        let x = match align {
            Align::Left => origin.x,
            Align::Center => origin.x + slack / 2.0,
            Align::Right => origin.x + slack,
        };
        let baseline = origin.y + style.size * BASELINE_RATIO;

        self.layer.set_fill_color(pdf_color(style.color));
        self.layer.use_text(
            fitted,
            style.size,
            Mm(x * PT_TO_MM),
            Mm((self.page.height - baseline) * PT_TO_MM),
            self.font(style.weight),
        );
        Ok(())
    }

    fn image(&mut self, image: &ImageAsset, frame: Rect) -> Result<(), ExportError> {
        check_rect(frame)?;
        if frame.width == 0.0 || frame.height == 0.0 {
            return Ok(());
        }

        let xobject = ImageXObject {
            width: Px(image.width as usize),
            height: Px(image.height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: image.rgb.clone(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        };

        // At 72 dpi one pixel is one point; scale from there to the frame.
        Image::from(xobject).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(frame.x * PT_TO_MM)),
                translate_y: Some(Mm((self.page.height - frame.bottom()) * PT_TO_MM)),
                scale_x: Some(frame.width / image.width as f32),
                scale_y: Some(frame.height / image.height as f32),
                dpi: Some(72.0),
                ..Default::default()
            },
        );
        Ok(())
    }

    fn new_page(&mut self) -> Result<(), ExportError> {
        let (page, layer) = self.doc.add_page(
            Mm(self.page.width * PT_TO_MM),
            Mm(self.page.height * PT_TO_MM),
            LAYER_NAME,
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.page_index += 1;
        Ok(())
    }
}

fn pdf_color(color: Color) -> printpdf::Color {
    printpdf::Color::Rgb(Rgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        None,
    ))
}

/// printpdf embeds an image stream per draw call. Point every page at
/// the first copy of each distinct image and drop the rest.
fn share_identical_images(bytes: &[u8]) -> Result<Vec<u8>, ExportError> {
    let mut doc =
        lopdf::Document::load_mem(bytes).map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut redirects: HashMap<ObjectId, ObjectId> = HashMap::new();
    {
        let mut first_seen: HashMap<(i64, i64, &[u8]), ObjectId> = HashMap::new();
        for (&id, object) in &doc.objects {
            let Object::Stream(stream) = object else {
                continue;
            };
            let dict = &stream.dict;
            let is_image = dict
                .get(b"Subtype")
                .and_then(Object::as_name)
                .is_ok_and(|name| name == b"Image");
            if !is_image {
                continue;
            }
            let (Ok(width), Ok(height)) = (
                dict.get(b"Width").and_then(Object::as_i64),
                dict.get(b"Height").and_then(Object::as_i64),
            ) else {
                continue;
            };
            let canonical = *first_seen
                .entry((width, height, stream.content.as_slice()))
                .or_insert(id);
            if canonical != id {
                redirects.insert(id, canonical);
            }
        }
    }
    if redirects.is_empty() {
        return Ok(bytes.to_vec());
    }

    for object in doc.objects.values_mut() {
        redirect_references(object, &redirects);
    }
    for duplicate in redirects.keys() {
        doc.objects.remove(duplicate);
    }
    debug!(removed = redirects.len(), "shared duplicate image streams");

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(out)
}

fn redirect_references(object: &mut Object, redirects: &HashMap<ObjectId, ObjectId>) {
    match object {
        Object::Reference(id) => {
            if let Some(target) = redirects.get(id) {
                *id = *target;
            }
        }
        Object::Array(items) => {
            for item in items {
                redirect_references(item, redirects);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter_mut() {
                redirect_references(value, redirects);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter_mut() {
                redirect_references(value, redirects);
            }
        }
        _ => {}
    }
}

/// Horizontal inset of a rounded box at vertical offset `v` from its top.
fn corner_inset(v: f32, height: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    let dy = if v < radius {
        radius - v
    } else if v > height - radius {
        v - (height - radius)
    } else {
        return 0.0;
    };
    radius - (radius * radius - dy * dy).max(0.0).sqrt()
}

/// Outline of a rectangle with circular corners, clockwise from the
/// top-left, in top-left-origin coordinates.
fn rounded_outline(rect: Rect, radius: f32) -> Vec<(f32, f32)> {
    if radius <= 0.0 {
        return vec![
            (rect.x, rect.y),
            (rect.right(), rect.y),
            (rect.right(), rect.bottom()),
            (rect.x, rect.bottom()),
        ];
    }

    use std::f32::consts::{FRAC_PI_2, PI};
    let corners = [
        (rect.x + radius, rect.y + radius, PI),
        (rect.right() - radius, rect.y + radius, PI + FRAC_PI_2),
        (rect.right() - radius, rect.bottom() - radius, 0.0),
        (rect.x + radius, rect.bottom() - radius, FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(corners.len() * (ARC_STEPS + 1));
    for (cx, cy, start) in corners {
        for step in 0..=ARC_STEPS {
            let angle = start + FRAC_PI_2 * step as f32 / ARC_STEPS as f32;
            points.push((cx + radius * angle.cos(), cy + radius * angle.sin()));
        }
    }
    points
}
