#![allow(dead_code)]

use std::path::Path;

use flightquote_core::models::quotation::{FareTerms, FlightGroup, FlightLeg, Quotation};
use flightquote_export::assets::AssetStore;
use flightquote_export::canvas::{DrawOp, RecordingCanvas};
use flightquote_export::compose::render_document;
use flightquote_export::flow::FlowSummary;
use flightquote_export::styles::DocumentStyles;
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

pub const HEADER_FALLBACK: &str = "Flight Quotation System";
pub const FOOTER_FALLBACK: &str = "Flight Quotation";

pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    RgbaImage::from_pixel(width, height, Rgba([0, 93, 160, 255]))
        .save(path)
        .unwrap();
}

/// Asset directory with the company logo, footer band and the Emirates logo.
pub fn asset_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("logo.png"), 280, 120);
    write_png(&dir.path().join("footer.png"), 600, 60);
    write_png(&dir.path().join("airline-logos/emirates.png"), 120, 40);
    dir
}

/// An asset store with nothing in it, forcing every text fallback.
pub fn empty_assets() -> (TempDir, AssetStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path());
    (dir, store)
}

pub fn leg(n: usize) -> FlightLeg {
    FlightLeg {
        flight_number: Some(format!("EK {}", 850 + n)),
        class: Some("Economy".to_string()),
        date: Some("2026-11-02".to_string()),
        from: Some("KWI".to_string()),
        to: Some("DXB".to_string()),
        depart: Some("08:15".to_string()),
        arrival: Some("10:45".to_string()),
        baggage: Some("30".to_string()),
    }
}

pub fn full_terms() -> FareTerms {
    FareTerms {
        ticket_fare: Some("95.500".to_string()),
        baggage_pieces: Some("2".to_string()),
        baggage_kg: Some("23".to_string()),
        change_no_penalty: true,
        change_no_show_fee: Some("15".to_string()),
        cancellation_fee: Some("25".to_string()),
        no_show_fee: Some("40".to_string()),
    }
}

pub fn group(airline: &str, legs: usize) -> FlightGroup {
    FlightGroup {
        airline: Some(airline.to_string()),
        pax_name: Some("Sara Ali".to_string()),
        flights: (0..legs).map(leg).collect(),
        additional_info: full_terms(),
    }
}

pub fn quotation(groups: Vec<FlightGroup>) -> Quotation {
    Quotation {
        customer_name: Some("Gulf Trading Co".to_string()),
        customer_account: Some("ACC-1042".to_string()),
        flights: groups,
    }
}

pub fn render(
    quotation: &Quotation,
    styles: &DocumentStyles,
    assets: &AssetStore,
) -> (RecordingCanvas, FlowSummary) {
    let mut canvas = RecordingCanvas::default();
    let summary = render_document(&mut canvas, quotation, styles, assets).unwrap();
    (canvas, summary)
}

pub fn page_texts(page: &[DrawOp]) -> Vec<&str> {
    page.iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

pub fn count(texts: &[&str], wanted: &str) -> usize {
    texts.iter().filter(|t| **t == wanted).count()
}
