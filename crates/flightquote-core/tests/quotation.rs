use flightquote_core::models::quotation::{FareTerms, Quotation};

#[test]
fn full_payload_decodes() {
    let payload = r#"{
        "customerName": "Gulf Trading Co",
        "customerAccount": "ACC-1042",
        "flights": [{
            "airline": "Emirates",
            "paxName": "Sara Ali",
            "flights": [{
                "flightNumber": "EK 856",
                "class": "Economy",
                "date": "2026-11-02",
                "from": "KWI",
                "to": "DXB",
                "depart": "08:15",
                "arrival": "10:45",
                "baggage": "30"
            }],
            "additionalInfo": {
                "ticketFare": "95.500",
                "baggagePieces": "2",
                "baggageKg": "23",
                "changeNoPenalty": true,
                "changeNoShowFee": "15",
                "cancellationFee": "25",
                "noShowFee": "40"
            }
        }]
    }"#;

    let quotation = Quotation::from_json(payload).unwrap();
    assert_eq!(quotation.customer_name.as_deref(), Some("Gulf Trading Co"));
    assert_eq!(quotation.flights.len(), 1);

    let group = &quotation.flights[0];
    assert_eq!(group.airline.as_deref(), Some("Emirates"));
    assert_eq!(group.pax_name.as_deref(), Some("Sara Ali"));
    assert_eq!(group.flights[0].flight_number.as_deref(), Some("EK 856"));
    assert_eq!(group.flights[0].class.as_deref(), Some("Economy"));
    assert_eq!(group.additional_info.ticket_fare.as_deref(), Some("95.500"));
    assert!(group.additional_info.change_no_penalty);
}

#[test]
fn numbers_are_accepted_as_text() {
    let payload = r#"{"flights":[{"flights":[{"baggage": 30}],
        "additionalInfo": {"ticketFare": 120.25, "baggagePieces": 1}}]}"#;
    let quotation = Quotation::from_json(payload).unwrap();
    let group = &quotation.flights[0];
    assert_eq!(group.flights[0].baggage.as_deref(), Some("30"));
    assert_eq!(group.additional_info.ticket_fare.as_deref(), Some("120.25"));
    assert_eq!(group.additional_info.baggage_pieces.as_deref(), Some("1"));
}

#[test]
fn falsy_values_count_as_missing() {
    let payload = r#"{"customerName": "  ", "flights":[{
        "airline": "",
        "flights": [{"flightNumber": null, "baggage": 0}],
        "additionalInfo": {"ticketFare": "", "cancellationFee": 0}}]}"#;
    let quotation = Quotation::from_json(payload).unwrap();
    assert_eq!(quotation.customer_name, None);
    let group = &quotation.flights[0];
    assert_eq!(group.airline, None);
    assert_eq!(group.flights[0].flight_number, None);
    assert_eq!(group.flights[0].baggage, None);
    assert_eq!(group.additional_info, FareTerms::default());
}

#[test]
fn missing_collections_default_to_empty() {
    let quotation = Quotation::from_json(r#"{"customerName": "Acme", "flights": null}"#).unwrap();
    assert!(quotation.flights.is_empty());

    let quotation = Quotation::from_json(r#"{"flights": [{"airline": "IndiGo"}]}"#).unwrap();
    assert!(quotation.flights[0].flights.is_empty());
    assert_eq!(quotation.flights[0].additional_info, FareTerms::default());

    let quotation =
        Quotation::from_json(r#"{"flights": [{"additionalInfo": null}]}"#).unwrap();
    assert_eq!(quotation.flights[0].additional_info, FareTerms::default());
}

#[test]
fn change_flag_accepts_checkbox_values() {
    for (raw, expected) in [
        ("true", true),
        ("\"on\"", true),
        ("\"Yes\"", true),
        ("1", true),
        ("\"1\"", true),
        ("false", false),
        ("\"off\"", false),
        ("0", false),
        ("null", false),
    ] {
        let payload = format!(r#"{{"flights":[{{"additionalInfo":{{"changeNoPenalty":{raw}}}}}]}}"#);
        let quotation = Quotation::from_json(&payload).unwrap();
        assert_eq!(
            quotation.flights[0].additional_info.change_no_penalty, expected,
            "changeNoPenalty = {raw}"
        );
    }
}

#[test]
fn malformed_json_is_an_error() {
    assert!(Quotation::from_json("{not json").is_err());
    assert!(Quotation::from_json(r#"{"flights": "nope"}"#).is_err());
}
