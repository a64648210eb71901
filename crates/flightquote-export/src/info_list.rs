use crate::canvas::{Align, Point, Stroke, TextStyle};
use crate::error::ExportError;
use crate::flow::{LayoutCursor, PageFlow};

/// A label/value pair. `highlight` colors the value: `Some(true)` affirming,
/// `Some(false)` warning, `None` neutral.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
    pub highlight: Option<bool>,
}

impl InfoRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            highlight: None,
        }
    }

    pub fn highlighted(mut self, positive: bool) -> Self {
        self.highlight = Some(positive);
        self
    }
}

/// Draw `rows` inside a block `width` points wide at `x`.
///
/// A row that does not fit moves to a new page; headings placed by the
/// caller before the list are not repeated.
pub fn draw_info_list(
    flow: &mut PageFlow<'_>,
    rows: &[InfoRow],
    x: f32,
    width: f32,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, ExportError> {
    let styles = flow.styles();
    let list = &styles.info_list;
    let palette = &styles.palette;
    let value_width = (width - list.value_offset - list.inset).max(0.0);
    let mut cursor = cursor;

    for (index, row) in rows.iter().enumerate() {
        cursor = flow.ensure_room(cursor, list.row_height)?;
        let canvas = flow.canvas();

        canvas.text(
            &format!("{}:", row.label),
            Point::new(x + list.inset, cursor.y),
            list.label_width,
            Align::Left,
            TextStyle::bold(list.text_size, palette.label),
        )?;

        let value_style = match row.highlight {
            Some(true) => TextStyle::bold(list.text_size, palette.affirm),
            Some(false) => TextStyle::regular(list.text_size, palette.warn),
            None => TextStyle::regular(list.text_size, palette.value),
        };
        canvas.text(
            &row.value,
            Point::new(x + list.value_offset, cursor.y),
            value_width,
            Align::Left,
            value_style,
        )?;

        cursor = cursor.advance(list.row_height);

        if index + 1 < rows.len() {
            let divider_y = cursor.y - 5.0;
            canvas.line(
                Point::new(x + list.inset, divider_y),
                Point::new(x + width - list.inset, divider_y),
                Stroke::new(palette.divider, list.divider_width),
            )?;
        }
    }

    Ok(cursor)
}
