//! Lays a [`Quotation`] out onto the template.

use tracing::debug;

use flightquote_core::models::quotation::{FareTerms, FlightGroup, FlightLeg, Quotation};

use crate::assets::{AssetStore, ImageCache};
use crate::canvas::{Align, BoxStyle, Canvas, Fill, Point, Rect, Stroke, TextStyle};
use crate::chrome::TemplateChrome;
use crate::error::ExportError;
use crate::flow::{FlowSummary, LayoutCursor, PageFlow};
use crate::info_list::{draw_info_list, InfoRow};
use crate::styles::DocumentStyles;
use crate::table::{draw_table, TableSpec};

/// Shown for any missing flight leg field.
pub const PLACEHOLDER: &str = "-";
/// Shown for any missing fare term.
pub const NOT_SPECIFIED: &str = "Not specified";
pub const CURRENCY: &str = "KWD";

const FLIGHT_HEADERS: [&str; 9] = [
    "Airline", "Flight", "Class", "Date", "From", "To", "Depart", "Arrival", "Bag",
];
const AIRLINE_COLUMN: usize = 0;
const FARE_HEADERS: [&str; 2] = ["Ticket Fare", "Amount"];
const FARE_LABEL: &str = "Ticket Fare:";
const NO_FARE: &str = "0.000 KWD";
const CONDITIONS_HEADING: &str = "Fare Conditions";

/// Render a whole quotation onto `canvas`, chrome included.
pub fn render_document(
    canvas: &mut dyn Canvas,
    quotation: &Quotation,
    styles: &DocumentStyles,
    assets: &AssetStore,
) -> Result<FlowSummary, ExportError> {
    let images = ImageCache::new(assets);
    let chrome = TemplateChrome::new(styles, &images);
    let flow = PageFlow::new(canvas, &chrome, styles, &images);
    compose(flow, quotation)
}

/// Header, customer banner, one section per flight group with a forced
/// page break between groups, then the final page's footer.
pub fn compose(mut flow: PageFlow<'_>, quotation: &Quotation) -> Result<FlowSummary, ExportError> {
    let mut cursor = flow.start()?;
    cursor = draw_banner(&mut flow, &customer_line(quotation), cursor)?;

    let groups = quotation.flights.len();
    for (index, group) in quotation.flights.iter().enumerate() {
        debug!(group = index, legs = group.flights.len(), "composing flight group");
        cursor = draw_group(&mut flow, group, cursor)?;
        if index + 1 < groups {
            cursor = flow.break_page(cursor)?;
        }
    }

    flow.finish(cursor)
}

pub fn customer_line(quotation: &Quotation) -> String {
    format!(
        "Corporate: {} (Account: {})",
        quotation.customer_name.as_deref().unwrap_or(NOT_SPECIFIED),
        quotation.customer_account.as_deref().unwrap_or("N/A"),
    )
}

pub fn airline_line(group: &FlightGroup) -> String {
    format!("Airline: {}", group.airline.as_deref().unwrap_or(PLACEHOLDER))
}

/// Cells of one flight table row, in column order.
pub fn leg_row(airline: Option<&str>, leg: &FlightLeg) -> Vec<String> {
    let cell = |value: &Option<String>| value.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
    vec![
        airline.unwrap_or(PLACEHOLDER).to_string(),
        cell(&leg.flight_number),
        cell(&leg.class),
        cell(&leg.date),
        cell(&leg.from),
        cell(&leg.to),
        cell(&leg.depart),
        cell(&leg.arrival),
        leg.baggage
            .as_deref()
            .map(|kg| format!("{kg} kg"))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    ]
}

pub fn fare_amount(terms: &FareTerms) -> String {
    terms
        .ticket_fare
        .as_deref()
        .map(|fare| format!("{fare} {CURRENCY}"))
        .unwrap_or_else(|| NO_FARE.to_string())
}

/// The policy list shown under each fare box.
pub fn fare_conditions(terms: &FareTerms) -> Vec<InfoRow> {
    let or_unspecified = |value: Option<String>| value.unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let baggage = terms.baggage_pieces.as_deref().map(|pieces| match terms.baggage_kg.as_deref() {
        Some(kg) => format!("{pieces} pieces \u{d7} {kg} kg each"),
        None => format!("{pieces} pieces"),
    });

    let change_policy = if terms.change_no_penalty {
        InfoRow::new("Change Policy", "No penalty (only fare difference)").highlighted(true)
    } else {
        InfoRow::new("Change Policy", "Standard change fees apply").highlighted(false)
    };

    vec![
        InfoRow::new("THIS FARE CAN BE CHANGED", "Yes").highlighted(true),
        InfoRow::new("Baggage Allowance", or_unspecified(baggage)),
        change_policy,
        InfoRow::new(
            "Change for No Show",
            or_unspecified(
                terms
                    .change_no_show_fee
                    .as_deref()
                    .map(|fee| format!("{fee} {CURRENCY} + fare difference")),
            ),
        ),
        InfoRow::new(
            "Cancellation Fee",
            or_unspecified(terms.cancellation_fee.as_deref().map(|fee| format!("{fee} {CURRENCY}"))),
        ),
        InfoRow::new(
            "No Show Fee",
            or_unspecified(terms.no_show_fee.as_deref().map(|fee| format!("{fee} {CURRENCY}"))),
        ),
    ]
}

fn draw_group(
    flow: &mut PageFlow<'_>,
    group: &FlightGroup,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, ExportError> {
    let styles = flow.styles();
    let spacing = &styles.spacing;
    let margin = styles.page.margin;
    let content_width = styles.content_width(flow.page_width());
    let mut cursor = cursor.advance(spacing.section_gap);

    if let Some(pax) = &group.pax_name {
        cursor = flow.ensure_room(cursor, spacing.line_advance)?;
        flow.canvas().text(
            &format!("Traveler Name: {pax}"),
            Point::new(margin + styles.banner.text_inset, cursor.y),
            content_width - styles.banner.text_inset,
            Align::Left,
            TextStyle::regular(styles.banner.text_size, styles.palette.banner_text),
        )?;
        cursor = cursor.advance(spacing.line_advance);
    }

    cursor = draw_banner(flow, &airline_line(group), cursor)?;

    let rows = group
        .flights
        .iter()
        .map(|leg| leg_row(group.airline.as_deref(), leg))
        .collect();
    let legs = TableSpec::new(FLIGHT_HEADERS, styles.flight_columns.clone())
        .with_rows(rows)
        .with_logo_column(AIRLINE_COLUMN);
    cursor = draw_table(flow, &legs, &styles.flight_table, margin, cursor)?;
    cursor = cursor.advance(spacing.after_table);

    let fare = TableSpec::new(FARE_HEADERS, styles.fare_columns.clone()).with_rows(vec![vec![
        FARE_LABEL.to_string(),
        fare_amount(&group.additional_info),
    ]]);
    let fare_x = margin + content_width - fare.width();
    cursor = draw_table(flow, &fare, &styles.fare_table, fare_x, cursor)?;
    cursor = cursor.advance(spacing.after_fare);

    // Keep the heading on the same page as the first condition.
    cursor = flow.ensure_room(cursor, spacing.heading_advance + styles.info_list.row_height)?;
    flow.canvas().text(
        CONDITIONS_HEADING,
        Point::new(margin + styles.info_list.inset, cursor.y),
        content_width,
        Align::Left,
        TextStyle::bold(spacing.heading_size, styles.palette.brand),
    )?;
    cursor = cursor.advance(spacing.heading_advance);

    let conditions = fare_conditions(&group.additional_info);
    cursor = draw_info_list(flow, &conditions, margin, content_width, cursor)?;
    Ok(cursor.advance(spacing.section_gap))
}

/// Full-width rounded band with a single line of bold text.
fn draw_banner(
    flow: &mut PageFlow<'_>,
    text: &str,
    cursor: LayoutCursor,
) -> Result<LayoutCursor, ExportError> {
    let styles = flow.styles();
    let banner = &styles.banner;
    let palette = &styles.palette;
    let margin = styles.page.margin;
    let width = styles.content_width(flow.page_width());

    let cursor = flow.ensure_room(cursor, banner.height)?;
    let fill = if banner.gradient {
        Fill::VerticalGradient {
            top: palette.banner_top,
            bottom: palette.banner_bottom,
        }
    } else {
        Fill::Solid(palette.banner_top)
    };
    let style = BoxStyle {
        fill,
        stroke: Some(Stroke::new(palette.banner_border, 1.0)),
        radius: banner.radius,
    };

    let canvas = flow.canvas();
    canvas.draw_rect(Rect::new(margin, cursor.y, width, banner.height), style)?;
    canvas.text(
        text,
        Point::new(
            margin + banner.text_inset,
            cursor.y + (banner.height - banner.text_size) / 2.0,
        ),
        width - banner.text_inset * 2.0,
        Align::Left,
        TextStyle::bold(banner.text_size, palette.banner_text),
    )?;

    Ok(cursor.advance(banner.height + styles.spacing.after_banner))
}
