use crate::assets::ImageAsset;
use crate::error::ExportError;

use super::{
    check_point, check_rect, check_stroke, check_text_box, Align, BoxStyle, Canvas, PageSize,
    Point, Rect, Stroke, TextStyle, LETTER,
};

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        rect: Rect,
        style: BoxStyle,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        text: String,
        origin: Point,
        width: f32,
        align: Align,
        style: TextStyle,
    },
    Image {
        name: String,
        frame: Rect,
    },
    NewPage,
}

/// Canvas that keeps a log of primitives instead of producing bytes.
///
/// Applies the same geometry checks as the PDF backend, so a layout that
/// records cleanly also renders cleanly.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    page: PageSize,
    page_index: usize,
    ops: Vec<DrawOp>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new(LETTER)
    }
}

impl RecordingCanvas {
    pub fn new(page: PageSize) -> Self {
        Self {
            page,
            page_index: 0,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    pub fn page_count(&self) -> usize {
        self.page_index + 1
    }

    /// Ops grouped per page, split at every `NewPage`.
    pub fn pages(&self) -> Vec<&[DrawOp]> {
        self.ops
            .split(|op| matches!(op, DrawOp::NewPage))
            .collect()
    }

    /// Every text run in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Names of every image drawn, in drawing order.
    pub fn images(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Image { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn page_size(&self) -> PageSize {
        self.page
    }

    fn page_index(&self) -> usize {
        self.page_index
    }

    fn draw_rect(&mut self, rect: Rect, style: BoxStyle) -> Result<(), ExportError> {
        check_rect(rect)?;
        if let Some(stroke) = style.stroke {
            check_stroke(stroke)?;
        }
        self.ops.push(DrawOp::Rect { rect, style });
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) -> Result<(), ExportError> {
        check_point(from)?;
        check_point(to)?;
        check_stroke(stroke)?;
        self.ops.push(DrawOp::Line { from, to, stroke });
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
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            origin,
            width,
            align,
            style,
        });
        Ok(())
    }

    fn image(&mut self, image: &ImageAsset, frame: Rect) -> Result<(), ExportError> {
        check_rect(frame)?;
        self.ops.push(DrawOp::Image {
            name: image.name.clone(),
            frame,
        });
        Ok(())
    }

    fn new_page(&mut self) -> Result<(), ExportError> {
        self.page_index += 1;
        self.ops.push(DrawOp::NewPage);
        Ok(())
    }
}
