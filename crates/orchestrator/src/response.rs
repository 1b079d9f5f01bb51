//! Final payload: reply text, diagnostics and truncated option cards.

use concierge_core::{Clinic, EmotionProfile, Flight, Hotel, Intent, Package};
use serde::Serialize;

use crate::request::Locale;

/// Clinic cards per response.
pub const MAX_CLINIC_CARDS: usize = 5;
/// Hotel cards per response.
pub const MAX_HOTEL_CARDS: usize = 3;
/// Flight cards per response.
pub const MAX_FLIGHT_CARDS: usize = 3;
/// Packages per clinic card.
pub const MAX_CARD_PACKAGES: usize = 2;
/// Characters of clinic description kept on a card.
pub const CARD_DESCRIPTION_CHARS: usize = 150;

/// Discriminator carried by every card as `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Clinic,
    Hotel,
    Flight,
}

/// A clinic as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicCard {
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub id: String,
    pub name: String,
    pub description: String,
    pub city: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    pub specialties: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub packages: Vec<Package>,
}

impl From<&Clinic> for ClinicCard {
    fn from(clinic: &Clinic) -> Self {
        Self {
            kind: CardKind::Clinic,
            id: clinic.id.clone(),
            name: clinic.name.clone(),
            description: truncate_description(&clinic.description),
            city: clinic.city.clone(),
            country: clinic.country.clone(),
            rating: clinic.rating,
            review_count: clinic.review_count,
            specialties: clinic.specialties.clone(),
            price_range: clinic.price_range.clone(),
            image_url: clinic.image_url.clone(),
            packages: clinic
                .packages
                .iter()
                .take(MAX_CARD_PACKAGES)
                .cloned()
                .collect(),
        }
    }
}

/// A hotel as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelCard {
    #[serde(rename = "type")]
    pub kind: CardKind,
    #[serde(flatten)]
    pub hotel: Hotel,
}

/// A flight as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightCard {
    #[serde(rename = "type")]
    pub kind: CardKind,
    #[serde(flatten)]
    pub flight: Flight,
}

/// Card lists. Hotel and flight lists are absent when that search did not run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cards {
    pub clinics: Vec<ClinicCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotels: Option<Vec<HotelCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flights: Option<Vec<FlightCard>>,
}

impl Cards {
    /// Build capped card lists from locale-resolved options.
    pub fn assemble(
        clinics: &[Clinic],
        hotels: Option<&[Hotel]>,
        flights: Option<&[Flight]>,
    ) -> Self {
        Self {
            clinics: clinics
                .iter()
                .take(MAX_CLINIC_CARDS)
                .map(ClinicCard::from)
                .collect(),
            hotels: hotels.map(|hotels| {
                hotels
                    .iter()
                    .take(MAX_HOTEL_CARDS)
                    .map(|hotel| HotelCard {
                        kind: CardKind::Hotel,
                        hotel: hotel.clone(),
                    })
                    .collect()
            }),
            flights: flights.map(|flights| {
                flights
                    .iter()
                    .take(MAX_FLIGHT_CARDS)
                    .map(|flight| FlightCard {
                        kind: CardKind::Flight,
                        flight: flight.clone(),
                    })
                    .collect()
            }),
        }
    }
}

/// What a chat request returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResponse {
    /// Reply text after the policy filter.
    pub message: String,
    pub intent: Intent,
    /// Present only in adaptive mode. Diagnostic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion_analysis: Option<EmotionProfile>,
    pub cards: Cards,
    pub session_id: String,
}

/// Resolve clinic and package names for a locale.
pub fn localize_clinics(clinics: Vec<Clinic>, locale: Locale) -> Vec<Clinic> {
    let localized = locale.prefers_localized();
    if !localized {
        return clinics;
    }

    clinics
        .into_iter()
        .map(|mut clinic| {
            clinic.name = clinic.display_name(localized).to_string();
            for package in &mut clinic.packages {
                package.name = package.display_name(localized).to_string();
            }
            clinic
        })
        .collect()
}

/// Cut a description to [`CARD_DESCRIPTION_CHARS`] characters, marking the cut.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= CARD_DESCRIPTION_CHARS {
        return description.to_string();
    }
    let mut cut: String = description.chars().take(CARD_DESCRIPTION_CHARS).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::FlightEndpoint;

    fn package(id: &str, price: f64) -> Package {
        Package {
            id: id.to_string(),
            name: format!("Package {}", id),
            name_ar: Some(format!("باقة {}", id)),
            price,
            currency: "USD".to_string(),
            duration: 7,
            is_active: true,
        }
    }

    fn clinic(id: &str, description: &str) -> Clinic {
        Clinic {
            id: id.to_string(),
            name: format!("Clinic {}", id),
            name_ar: Some(format!("عيادة {}", id)),
            description: description.to_string(),
            city: "Istanbul".to_string(),
            country: "Turkey".to_string(),
            rating: Some(4.5),
            review_count: None,
            specialties: vec!["dental".to_string()],
            price_range: None,
            image_url: None,
            packages: vec![package("a", 1000.0), package("b", 2000.0), package("c", 3000.0)],
            is_active: true,
            is_verified: true,
        }
    }

    fn hotel(id: &str) -> Hotel {
        Hotel {
            id: id.to_string(),
            name: format!("Hotel {}", id),
            rating: 4.0,
            review_count: 10,
            price_per_night: 80.0,
            currency: "USD".to_string(),
            image_url: None,
            booking_url: "https://example.com/hotel".to_string(),
            distance: None,
            amenities: vec![],
        }
    }

    fn flight(id: &str) -> Flight {
        let endpoint = |airport: &str| FlightEndpoint {
            airport: airport.to_string(),
            time: "10:00".to_string(),
            date: "2026-03-01".to_string(),
        };
        Flight {
            id: id.to_string(),
            airline: "Test Air".to_string(),
            flight_number: format!("TA{}", id),
            departure: endpoint("JFK"),
            arrival: endpoint("CUN"),
            price: 400.0,
            currency: "USD".to_string(),
            duration: "4h 10m".to_string(),
            stops: 0,
            booking_url: "https://example.com/flight".to_string(),
        }
    }

    #[test]
    fn test_truncate_description() {
        let short = "Modern dental clinic.";
        assert_eq!(truncate_description(short), short);

        let exact = "x".repeat(CARD_DESCRIPTION_CHARS);
        assert_eq!(truncate_description(&exact), exact);

        let long = "é".repeat(200);
        let cut = truncate_description(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), CARD_DESCRIPTION_CHARS + 3);
    }

    #[test]
    fn test_assemble_caps() {
        let clinics: Vec<Clinic> = (0..11).map(|i| clinic(&i.to_string(), "")).collect();
        let hotels: Vec<Hotel> = (0..5).map(|i| hotel(&i.to_string())).collect();
        let flights: Vec<Flight> = (0..5).map(|i| flight(&i.to_string())).collect();

        let cards = Cards::assemble(&clinics, Some(hotels.as_slice()), Some(flights.as_slice()));
        assert_eq!(cards.clinics.len(), MAX_CLINIC_CARDS);
        assert_eq!(cards.hotels.as_ref().unwrap().len(), MAX_HOTEL_CARDS);
        assert_eq!(cards.flights.as_ref().unwrap().len(), MAX_FLIGHT_CARDS);
        assert!(cards.clinics.iter().all(|c| c.packages.len() == MAX_CARD_PACKAGES));
        assert_eq!(cards.clinics[0].id, "0");
    }

    #[test]
    fn test_card_wire_form() {
        let cards = Cards::assemble(&[clinic("1", "Short.")], Some(&[hotel("h")][..]), None);
        let json = serde_json::to_value(&cards).unwrap();

        assert_eq!(json["clinics"][0]["type"], "clinic");
        assert_eq!(json["clinics"][0]["name"], "Clinic 1");
        assert!(json["clinics"][0].get("reviewCount").is_none());
        assert_eq!(json["hotels"][0]["type"], "hotel");
        assert_eq!(json["hotels"][0]["pricePerNight"], 80.0);
        assert!(json.get("flights").is_none());
    }

    #[test]
    fn test_localize_clinics() {
        let english = localize_clinics(vec![clinic("1", "")], Locale::En);
        assert_eq!(english[0].name, "Clinic 1");
        assert_eq!(english[0].packages[0].name, "Package a");

        let arabic = localize_clinics(vec![clinic("1", "")], Locale::Uae);
        assert_eq!(arabic[0].name, "عيادة 1");
        assert_eq!(arabic[0].packages[0].name, "باقة a");

        let mut plain = clinic("2", "");
        plain.name_ar = None;
        let resolved = localize_clinics(vec![plain], Locale::Uae);
        assert_eq!(resolved[0].name, "Clinic 2");
    }
}
