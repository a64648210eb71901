use serde::{Deserialize, Serialize};

use crate::error::CoreError;

use super::lenient;

/// A customer quotation: one corporate identity and an ordered list of
/// itinerary blocks, each rendered as its own section of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    #[serde(default, deserialize_with = "lenient::text")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub customer_account: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub flights: Vec<FlightGroup>,
}

impl Quotation {
    /// Decode the payload posted by the booking form.
    pub fn from_json(payload: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// One airline itinerary: legs, fare and change/cancellation terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightGroup {
    #[serde(default, deserialize_with = "lenient::text")]
    pub airline: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub pax_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub flights: Vec<FlightLeg>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub additional_info: FareTerms,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightLeg {
    #[serde(default, deserialize_with = "lenient::text")]
    pub flight_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub class: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub depart: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub arrival: Option<String>,
    /// Checked baggage in kilograms.
    #[serde(default, deserialize_with = "lenient::text")]
    pub baggage: Option<String>,
}

/// Fare and policy terms. Amounts are KWD, kept as the text the agent typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareTerms {
    #[serde(default, deserialize_with = "lenient::text")]
    pub ticket_fare: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub baggage_pieces: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub baggage_kg: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub change_no_penalty: bool,
    #[serde(default, deserialize_with = "lenient::text")]
    pub change_no_show_fee: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cancellation_fee: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub no_show_fee: Option<String>,
}
