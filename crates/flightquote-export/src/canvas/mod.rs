//! Drawing surface abstraction.
//!
//! All coordinates are PDF points with the origin at the top-left corner of
//! the page and `y` growing downwards, the way the template is designed.
//! Backends flip axes and convert units themselves.

pub mod pdf;
pub mod recording;

use crate::assets::ImageAsset;
use crate::error::ExportError;

pub use pdf::PdfCanvas;
pub use recording::{DrawOp, RecordingCanvas};

/// US Letter, the page size the template is laid out for.
pub const LETTER: PageSize = PageSize {
    width: 612.0,
    height: 792.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `t` is clamped to `0.0..=1.0`.
    pub fn mix(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::rgb(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Top-to-bottom linear gradient.
    VerticalGradient { top: Color, bottom: Color },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Fill, optional outline and corner radius of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    pub fill: Fill,
    pub stroke: Option<Stroke>,
    pub radius: f32,
}

impl BoxStyle {
    pub const fn solid(color: Color) -> Self {
        Self {
            fill: Fill::Solid(color),
            stroke: None,
            radius: 0.0,
        }
    }

    pub const fn outlined(self, stroke: Stroke) -> Self {
        Self {
            stroke: Some(stroke),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color,
}

impl TextStyle {
    pub const fn regular(size: f32, color: Color) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            color,
        }
    }

    pub const fn bold(size: f32, color: Color) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
            color,
        }
    }
}

/// A page-oriented drawing surface.
///
/// Text placed with `text` is positioned by the top of its line box inside
/// a box of `width` points; fitting the string into that box (clipping or
/// truncating) is the canvas's job, not the caller's.
pub trait Canvas {
    fn page_size(&self) -> PageSize;

    /// Zero-based index of the page currently being drawn.
    fn page_index(&self) -> usize;

    fn draw_rect(&mut self, rect: Rect, style: BoxStyle) -> Result<(), ExportError>;

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), ExportError>;

    fn text(
        &mut self,
        text: &str,
        origin: Point,
        width: f32,
        align: Align,
        style: TextStyle,
    ) -> Result<(), ExportError>;

    /// Draw `image` stretched to `frame`. Aspect fitting is done by callers.
    fn image(&mut self, image: &ImageAsset, frame: Rect) -> Result<(), ExportError>;

    /// Finish the current page and continue on a fresh one.
    fn new_page(&mut self) -> Result<(), ExportError>;
}

pub(crate) fn check_point(point: Point) -> Result<(), ExportError> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(ExportError::Geometry(format!(
            "non-finite point ({}, {})",
            point.x, point.y
        )))
    }
}

pub(crate) fn check_rect(rect: Rect) -> Result<(), ExportError> {
    check_point(Point::new(rect.x, rect.y))?;
    if !(rect.width.is_finite() && rect.height.is_finite()) || rect.width < 0.0 || rect.height < 0.0
    {
        return Err(ExportError::Geometry(format!(
            "invalid rectangle size {}x{}",
            rect.width, rect.height
        )));
    }
    Ok(())
}

pub(crate) fn check_text_box(origin: Point, width: f32, style: TextStyle) -> Result<(), ExportError> {
    check_point(origin)?;
    if !width.is_finite() || width < 0.0 {
        return Err(ExportError::Geometry(format!("invalid text box width {width}")));
    }
    if !style.size.is_finite() || style.size <= 0.0 {
        return Err(ExportError::Geometry(format!("invalid font size {}", style.size)));
    }
    Ok(())
}

pub(crate) fn check_stroke(stroke: Stroke) -> Result<(), ExportError> {
    if stroke.width.is_finite() && stroke.width >= 0.0 {
        Ok(())
    } else {
        Err(ExportError::Geometry(format!("invalid stroke width {}", stroke.width)))
    }
}

/// Approximate Helvetica advance width in points.
///
/// Built-in PDF fonts carry no metrics we can query, so widths are
/// estimated from per-class averages of the standard AFM tables.
pub fn approx_text_width(text: &str, size: f32, weight: FontWeight) -> f32 {
    text.chars().map(|c| approx_char_width(c, size, weight)).sum()
}

pub fn approx_char_width(c: char, size: f32, weight: FontWeight) -> f32 {
    let em = match c {
        ' ' | '.' | ',' | ':' | ';' | '!' | '\'' | '|' | 'i' | 'j' | 'l' => 0.278,
        'f' | 't' | 'r' | '(' | ')' | '-' | '/' | 'I' => 0.333,
        'm' | 'M' | 'W' => 0.833,
        'w' => 0.722,
        '0'..='9' | 'a'..='z' => 0.556,
        'A'..='Z' => 0.667,
        _ => 0.6,
    };
    let bold_factor = match weight {
        FontWeight::Regular => 1.0,
        FontWeight::Bold => 1.06,
    };
    em * size * bold_factor
}

pub const ELLIPSIS: &str = "...";

/// Clip `text` to `width`, ending in an ellipsis when anything was cut.
/// Returns an empty string when not even the ellipsis fits.
pub fn fit_text(text: &str, width: f32, size: f32, weight: FontWeight) -> String {
    let mut used = 0.0;
    let mut cut = None;
    let budget = width - approx_text_width(ELLIPSIS, size, weight);
    for (index, c) in text.char_indices() {
        used += approx_char_width(c, size, weight);
        if cut.is_none() && used > budget {
            cut = Some(index);
        }
        if used > width {
            break;
        }
    }
    match cut {
        _ if used <= width => text.to_string(),
        Some(end) if budget >= 0.0 => format!("{}{ELLIPSIS}", &text[..end]),
        _ => String::new(),
    }
}
