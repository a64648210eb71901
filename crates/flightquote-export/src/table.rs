//! Bordered multi-column table with page-overflow handling.

use tracing::debug;

use crate::canvas::{Align, BoxStyle, Point, Rect, Stroke, TextStyle};
use crate::error::ExportError;
use crate::flow::{LayoutCursor, PageFlow};
use crate::styles::{TableColors, TableLayout};

/// Contents of one table draw. Built per call, not retained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSpec {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Fixed column widths; text does not resize columns.
    pub column_widths: Vec<f32>,
    /// Per-row highlight flags, parallel to `rows`.
    pub highlight: Option<Vec<bool>>,
    /// Overrides the layout's color scheme.
    pub colors: Option<TableColors>,
    /// Column holding airline names; known airlines draw their logo.
    pub logo_column: Option<usize>,
}

impl TableSpec {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>, column_widths: Vec<f32>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            column_widths,
            ..Self::default()
        }
    }

    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_logo_column(mut self, column: usize) -> Self {
        self.logo_column = Some(column);
        self
    }

    pub fn with_highlight(mut self, flags: Vec<bool>) -> Self {
        self.highlight = Some(flags);
        self
    }

    pub fn with_colors(mut self, colors: TableColors) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    fn is_highlighted(&self, row: usize) -> bool {
        self.highlight
            .as_ref()
            .and_then(|flags| flags.get(row).copied())
            .unwrap_or(false)
    }

    fn validate(&self) -> Result<(), ExportError> {
        let columns = self.column_widths.len();
        if self.headers.len() != columns {
            return Err(ExportError::Layout(format!(
                "table has {} headers but {columns} column widths",
                self.headers.len()
            )));
        }
        if let Some((index, row)) = self.rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(ExportError::Layout(format!(
                "table row {index} has {} cells, expected {columns}",
                row.len()
            )));
        }
        Ok(())
    }
}

/// Draw `spec` with its left edge at `x`, starting at `cursor`.
///
/// The header band and at least one body row always start on the same page.
/// When a row would cross the bottom limit the page is broken (chrome via
/// the flow's hook), the header band is redrawn and the row follows it.
pub fn draw_table(
    flow: &mut PageFlow<'_>,
    spec: &TableSpec,
    layout: &TableLayout,
    x: f32,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, ExportError> {
    spec.validate()?;
    let colors = spec.colors.as_ref().unwrap_or(&layout.colors);

    let first_row = if spec.rows.is_empty() { 0.0 } else { layout.row_height };
    let mut cursor = flow.ensure_room(cursor, layout.header_height + first_row)?;
    draw_header_band(flow, spec, layout, colors, x, cursor.y)?;
    cursor = cursor.advance(layout.header_height);

    for (index, row) in spec.rows.iter().enumerate() {
        if !flow.fits(cursor, layout.row_height) {
            cursor = flow.ensure_room(cursor, layout.header_height + layout.row_height)?;
            draw_header_band(flow, spec, layout, colors, x, cursor.y)?;
            cursor = cursor.advance(layout.header_height);
            debug!(row = index, page = cursor.page_index + 1, "table header repeated");
        }
        draw_row(flow, spec, layout, colors, index, row, x, cursor.y)?;
        cursor = cursor.advance(layout.row_height);
    }

    Ok(cursor)
}

fn draw_header_band(
    flow: &mut PageFlow<'_>,
    spec: &TableSpec,
    layout: &TableLayout,
    colors: &TableColors,
    x: f32,
    y: f32,
) -> Result<(), ExportError> {
    let canvas = flow.canvas();
    let band = BoxStyle::solid(colors.header_fill)
        .outlined(Stroke::new(colors.header_fill, layout.border_width));
    canvas.draw_rect(Rect::new(x, y, spec.width(), layout.header_height), band)?;

    let text_y = y + (layout.header_height - layout.header_size) / 2.0;
    let style = TextStyle::bold(layout.header_size, colors.header_text);
    let mut cell_x = x;
    for (header, width) in spec.headers.iter().zip(&spec.column_widths) {
        canvas.text(
            &header.to_uppercase(),
            Point::new(cell_x + layout.padding, text_y),
            (width - layout.padding * 2.0).max(0.0),
            Align::Left,
            style,
        )?;
        cell_x += width;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn draw_row(
    flow: &mut PageFlow<'_>,
    spec: &TableSpec,
    layout: &TableLayout,
    colors: &TableColors,
    index: usize,
    row: &[String],
    x: f32,
    y: f32,
) -> Result<(), ExportError> {
    let images = flow.images();
    let canvas = flow.canvas();
    let table_width = spec.width();
    let border = Stroke::new(colors.border, layout.border_width);

    let fill = if spec.is_highlighted(index) {
        colors.highlight_fill
    } else {
        colors.stripes[index % 2]
    };
    let mut background = BoxStyle::solid(fill);
    if layout.outlined {
        background = background.outlined(border);
    }
    canvas.draw_rect(Rect::new(x, y, table_width, layout.row_height), background)?;

    let text_y = y + (layout.row_height - layout.body_size) / 2.0;
    let text_style = TextStyle::regular(layout.body_size, colors.cell_text);
    let mut cell_x = x;
    let last = row.len().saturating_sub(1);

    for (column, (cell, width)) in row.iter().zip(&spec.column_widths).enumerate() {
        let inner_width = (width - layout.padding * 2.0).max(0.0);
        let logo = (spec.logo_column == Some(column))
            .then(|| images.airline_logo(cell))
            .flatten();

        match logo {
            Some(image) => {
                // The logo never spills past the row's padding.
                let logo_height = layout
                    .logo_height
                    .min(layout.row_height - layout.padding * 2.0)
                    .max(0.0);
                let slot = Rect::new(
                    cell_x + layout.padding,
                    y + (layout.row_height - logo_height) / 2.0,
                    inner_width,
                    logo_height,
                );
                canvas.image(&image, image.fit_within(slot))?;
            }
            None => canvas.text(
                cell,
                Point::new(cell_x + layout.padding, text_y),
                inner_width,
                Align::Left,
                text_style,
            )?,
        }

        if column < last {
            let edge = cell_x + width;
            canvas.line(Point::new(edge, y), Point::new(edge, y + layout.row_height), border)?;
        }
        cell_x += width;
    }

    let bottom = y + layout.row_height;
    canvas.line(Point::new(x, bottom), Point::new(x + table_width, bottom), border)?;
    Ok(())
}
