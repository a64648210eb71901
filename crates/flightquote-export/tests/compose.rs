mod common;

use common::{full_terms, leg};
use flightquote_core::models::quotation::{FareTerms, FlightLeg};
use flightquote_export::compose::{fare_amount, fare_conditions, leg_row};
use flightquote_export::info_list::InfoRow;

#[test]
fn leg_row_follows_column_order() {
    let row = leg_row(Some("Emirates"), &leg(6));
    assert_eq!(
        row,
        ["Emirates", "EK 856", "Economy", "2026-11-02", "KWI", "DXB", "08:15", "10:45", "30 kg"]
    );
}

#[test]
fn leg_row_uses_placeholders() {
    let row = leg_row(None, &FlightLeg::default());
    assert_eq!(row.len(), 9);
    assert!(row.iter().all(|cell| cell == "-"));
}

#[test]
fn fare_amount_defaults_to_zero() {
    assert_eq!(fare_amount(&full_terms()), "95.500 KWD");
    assert_eq!(fare_amount(&FareTerms::default()), "0.000 KWD");
}

#[test]
fn fare_conditions_with_every_term() {
    let rows = fare_conditions(&full_terms());
    assert_eq!(
        rows,
        vec![
            InfoRow::new("THIS FARE CAN BE CHANGED", "Yes").highlighted(true),
            InfoRow::new("Baggage Allowance", "2 pieces \u{d7} 23 kg each"),
            InfoRow::new("Change Policy", "No penalty (only fare difference)").highlighted(true),
            InfoRow::new("Change for No Show", "15 KWD + fare difference"),
            InfoRow::new("Cancellation Fee", "25 KWD"),
            InfoRow::new("No Show Fee", "40 KWD"),
        ]
    );
}

#[test]
fn fare_conditions_without_terms() {
    let rows = fare_conditions(&FareTerms::default());
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[1].value, "Not specified");
    assert_eq!(rows[2].value, "Standard change fees apply");
    assert_eq!(rows[2].highlight, Some(false));
    for row in &rows[3..] {
        assert_eq!(row.value, "Not specified", "{}", row.label);
        assert_eq!(row.highlight, None);
    }
}

#[test]
fn baggage_pieces_without_weight() {
    let terms = FareTerms {
        baggage_pieces: Some("1".to_string()),
        ..FareTerms::default()
    };
    assert_eq!(fare_conditions(&terms)[1].value, "1 pieces");

    let terms = FareTerms {
        baggage_kg: Some("23".to_string()),
        ..FareTerms::default()
    };
    assert_eq!(fare_conditions(&terms)[1].value, "Not specified");
}
