//! Option records (clinics, hotels, flights) and provider queries.
//!
//! Records are read-only snapshots scoped to a single request.

use serde::{Deserialize, Serialize};

use crate::intent::{known, Intent};
use crate::serde_util::{is_true, yes};

/// A treatment package offered by a clinic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    /// Arabic name, shown for the `uae` locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    pub price: f64,
    pub currency: String,
    /// Length of the package in days.
    pub duration: u32,
    /// Inactive packages are never offered.
    #[serde(default = "yes", skip_serializing_if = "is_true")]
    pub is_active: bool,
}

impl Package {
    /// Name for display, preferring the localized one when asked and present.
    pub fn display_name(&self, localized: bool) -> &str {
        pick_name(&self.name, self.name_ar.as_deref(), localized)
    }
}

/// A verified clinic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    pub id: String,
    pub name: String,
    /// Arabic name, shown for the `uae` locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub description: String,
    pub city: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    /// Specialty tags such as "dental" or "fertility".
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Price band, e.g. "$$".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Packages, cheapest first.
    #[serde(default)]
    pub packages: Vec<Package>,
    /// Only active, verified clinics are searchable.
    #[serde(default = "yes", skip_serializing_if = "is_true")]
    pub is_active: bool,
    #[serde(default = "yes", skip_serializing_if = "is_true")]
    pub is_verified: bool,
}

impl Clinic {
    /// Name for display, preferring the localized one when asked and present.
    pub fn display_name(&self, localized: bool) -> &str {
        pick_name(&self.name, self.name_ar.as_deref(), localized)
    }
}

/// A hotel offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub rating: f32,
    pub review_count: u32,
    pub price_per_night: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub booking_url: String,
    /// Free-text distance, e.g. "1.8 km from clinic".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

/// One end of a flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightEndpoint {
    /// IATA airport code.
    pub airport: String,
    pub time: String,
    pub date: String,
}

/// A flight offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub price: f64,
    pub currency: String,
    /// Travel time, e.g. "10h 30m".
    pub duration: String,
    pub stops: u32,
    pub booking_url: String,
}

/// Hotel search parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelQuery {
    pub city: String,
    pub country: Option<String>,
    pub guests: u32,
    /// Upper bound on the nightly price.
    pub max_price: Option<f64>,
}

impl HotelQuery {
    /// Build a query from an intent, or `None` if no hotel search should run.
    pub fn from_intent(intent: &Intent) -> Option<Self> {
        if !intent.wants_hotels() {
            return None;
        }
        Some(Self {
            city: known(&intent.city)?.to_string(),
            country: known(&intent.country).map(String::from),
            guests: intent.number_of_people,
            max_price: intent.budget,
        })
    }
}

/// Flight search parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub passengers: u32,
    pub max_price: Option<f64>,
}

impl FlightQuery {
    /// Build a query from an intent, or `None` if no flight search should run.
    pub fn from_intent(intent: &Intent) -> Option<Self> {
        if !intent.wants_flights() {
            return None;
        }
        Some(Self {
            origin: known(&intent.origin_city)?.to_string(),
            destination: known(&intent.city)?.to_string(),
            passengers: intent.number_of_people,
            max_price: intent.budget,
        })
    }
}

fn pick_name<'a>(default: &'a str, localized_name: Option<&'a str>, localized: bool) -> &'a str {
    match localized_name {
        Some(name) if localized && !name.is_empty() => name,
        _ => default,
    }
}
