//! Context assembly: turns intent and option results into the prompt payload
//! handed to the composers.
//!
//! Clinics are expected to be locale-resolved already.

use concierge_core::{Clinic, Flight, Hotel, Intent};

/// Clinics included in a composer context. Independent of the card cap.
pub const MAX_CONTEXT_CLINICS: usize = 5;

/// Closing instruction of the adaptive context.
pub const ADAPTIVE_CLOSING_INSTRUCTION: &str = "Now write a reply that:
1. Addresses what the user is really asking for
2. Presents the information in a way that matches their emotional state
3. Reads naturally, like a person talking
4. Helps them take the next step

Think about what they need to hear, then respond.";

/// Line stating that the clinic search came back empty.
pub const NO_CLINICS_LINE: &str = "CLINICS: No clinics found matching the exact criteria.";

fn cheapest<T>(items: &[T], price: impl Fn(&T) -> f64) -> Option<f64> {
    items.iter().map(price).reduce(f64::min)
}

/// Context for the adaptive composer.
pub fn build_adaptive_context(
    intent: &Intent,
    clinics: &[Clinic],
    hotels: &[Hotel],
    flights: &[Flight],
) -> String {
    let mut context = String::from("USER'S REQUEST:\n");
    context.push_str(&format!("Looking for: {}\n", intent.procedure_or_default()));

    match (&intent.city, &intent.country) {
        (Some(city), Some(country)) => context.push_str(&format!("Location: {}, {}\n", city, country)),
        (Some(place), None) | (None, Some(place)) => {
            context.push_str(&format!("Location: {}\n", place))
        }
        (None, None) => {}
    }

    match (intent.budget, intent.budget_max) {
        (Some(min), Some(max)) => context.push_str(&format!("Budget: ${} - ${}\n", min, max)),
        (Some(budget), None) => context.push_str(&format!("Budget: Up to ${}\n", budget)),
        (None, Some(max)) => context.push_str(&format!("Budget: Up to ${}\n", max)),
        (None, None) => {}
    }

    if let Some(date) = &intent.travel_date {
        context.push_str(&format!("Preferred date: {}\n", date));
    }
    if let Some(origin) = &intent.origin_city {
        context.push_str(&format!("Traveling from: {}\n", origin));
    }
    if intent.number_of_people > 1 {
        context.push_str(&format!("Travelers: {}\n", intent.number_of_people));
    }

    context.push_str("\n---\n\nSEARCH RESULTS:\n\n");

    if clinics.is_empty() {
        context.push_str(NO_CLINICS_LINE);
        context.push_str("\n\n");
    } else {
        context.push_str(&format!("CLINICS FOUND ({}):\n\n", clinics.len()));
        for (idx, clinic) in clinics.iter().take(MAX_CONTEXT_CLINICS).enumerate() {
            context.push_str(&format!(
                "{}. {} ({}, {})\n",
                idx + 1,
                clinic.name,
                clinic.city,
                clinic.country
            ));
            if let Some(rating) = clinic.rating {
                context.push_str(&format!(
                    "   Rating: {}/5.0 ({} reviews)\n",
                    rating,
                    clinic.review_count.unwrap_or(0)
                ));
            }
            context.push_str(&format!(
                "   Specialties: {}\n",
                clinic.specialties.join(", ")
            ));
            if let Some(pkg) = clinic.packages.first() {
                context.push_str(&format!(
                    "   Package: {} - ${} ({} days)\n",
                    pkg.name, pkg.price, pkg.duration
                ));
            }
            context.push('\n');
        }
    }

    if let Some(price) = cheapest(hotels, |h| h.price_per_night) {
        context.push_str(&format!("HOTELS AVAILABLE: {} options found\n", hotels.len()));
        context.push_str(&format!("Starting from ${}/night\n\n", price));
    }

    if let Some(price) = cheapest(flights, |f| f.price) {
        context.push_str(&format!("FLIGHTS AVAILABLE: {} options found\n", flights.len()));
        context.push_str(&format!("Starting from ${}\n\n", price));
    }

    context.push_str("---\n\n");
    context.push_str(ADAPTIVE_CLOSING_INSTRUCTION);
    context
}

/// Context for the standard composer.
pub fn build_standard_context(
    intent: &Intent,
    clinics: &[Clinic],
    hotels: &[Hotel],
    flights: &[Flight],
) -> String {
    let mut context = format!("User is looking for: {}", intent.procedure_or_default());
    if let Some(city) = &intent.city {
        context.push_str(&format!(" in {}", city));
    }
    if let Some(country) = &intent.country {
        context.push_str(&format!(" in {}", country));
    }
    if let Some(budget) = intent.budget_max.or(intent.budget) {
        context.push_str(&format!(" with budget up to ${}", budget));
    }

    context.push_str(&format!("\n\nClinics found ({}):\n", clinics.len()));
    if clinics.is_empty() {
        context.push_str("No clinics matched the search criteria.\n");
    }
    for (idx, clinic) in clinics.iter().take(MAX_CONTEXT_CLINICS).enumerate() {
        context.push_str(&format!(
            "{}. {} in {}, {}\n",
            idx + 1,
            clinic.name,
            clinic.city,
            clinic.country
        ));
        let rating = clinic
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        context.push_str(&format!(
            "   - Rating: {} ({} reviews)\n",
            rating,
            clinic.review_count.unwrap_or(0)
        ));
        context.push_str(&format!(
            "   - Specialties: {}\n",
            clinic.specialties.join(", ")
        ));
        if let Some(pkg) = clinic.packages.first() {
            context.push_str(&format!(
                "   - Package from ${} ({} days)\n",
                pkg.price, pkg.duration
            ));
        }
    }

    if let Some(price) = cheapest(hotels, |h| h.price_per_night) {
        context.push_str(&format!(
            "\nNearby hotels found: {} options starting from ${}/night\n",
            hotels.len(),
            price
        ));
    }

    if let Some(price) = cheapest(flights, |f| f.price) {
        context.push_str(&format!(
            "\nFlight options found: {} options starting from ${}\n",
            flights.len(),
            price
        ));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::{FlightEndpoint, Package};

    fn clinic(n: usize) -> Clinic {
        Clinic {
            id: format!("c{}", n),
            name: format!("Clinic {}", n),
            name_ar: None,
            description: String::new(),
            city: "Istanbul".to_string(),
            country: "Turkey".to_string(),
            rating: Some(4.5),
            review_count: Some(100),
            specialties: vec!["dental".to_string(), "cosmetic".to_string()],
            price_range: None,
            image_url: None,
            packages: vec![Package {
                id: "p".to_string(),
                name: "Implant Package".to_string(),
                name_ar: None,
                price: 1500.0,
                currency: "USD".to_string(),
                duration: 7,
                is_active: true,
            }],
            is_active: true,
            is_verified: true,
        }
    }

    fn hotel(price: f64) -> Hotel {
        Hotel {
            id: format!("h{}", price),
            name: "Hotel".to_string(),
            rating: 4.0,
            review_count: 10,
            price_per_night: price,
            currency: "USD".to_string(),
            image_url: None,
            booking_url: "https://example.com".to_string(),
            distance: None,
            amenities: vec![],
        }
    }

    fn flight(price: f64) -> Flight {
        let endpoint = FlightEndpoint {
            airport: "JFK".to_string(),
            time: "10:00".to_string(),
            date: "2025-12-01".to_string(),
        };
        Flight {
            id: format!("f{}", price),
            airline: "Air".to_string(),
            flight_number: "A1".to_string(),
            departure: endpoint.clone(),
            arrival: endpoint,
            price,
            currency: "USD".to_string(),
            duration: "5h".to_string(),
            stops: 0,
            booking_url: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_adaptive_context_states_empty_clinics() {
        let context = build_adaptive_context(&Intent::default(), &[], &[], &[]);
        assert!(context.contains(NO_CLINICS_LINE));
        assert!(context.contains("Looking for: medical treatment"));
        assert!(context.ends_with(ADAPTIVE_CLOSING_INSTRUCTION));
        assert!(!context.contains("HOTELS AVAILABLE"));
    }

    #[test]
    fn test_adaptive_context_caps_clinics() {
        let clinics: Vec<Clinic> = (1..=7).map(clinic).collect();
        let context = build_adaptive_context(&Intent::default(), &clinics, &[], &[]);

        assert!(context.contains("CLINICS FOUND (7):"));
        assert!(context.contains("5. Clinic 5 (Istanbul, Turkey)"));
        assert!(!context.contains("Clinic 6"));
        assert!(context.contains("Package: Implant Package - $1500 (7 days)"));
        assert!(context.contains("Rating: 4.5/5.0 (100 reviews)"));
    }

    #[test]
    fn test_adaptive_context_request_details() {
        let intent = Intent {
            procedure: Some("IVF".to_string()),
            city: Some("Dubai".to_string()),
            country: Some("UAE".to_string()),
            budget: Some(5000.0),
            origin_city: Some("London".to_string()),
            travel_date: Some("March".to_string()),
            ..Default::default()
        };
        let context = build_adaptive_context(&intent, &[], &[hotel(120.0), hotel(75.0)], &[flight(680.0)]);

        assert!(context.contains("Looking for: IVF\n"));
        assert!(context.contains("Location: Dubai, UAE\n"));
        assert!(context.contains("Budget: Up to $5000\n"));
        assert!(context.contains("Traveling from: London\n"));
        assert!(context.contains("Preferred date: March\n"));
        assert!(context.contains("HOTELS AVAILABLE: 2 options found\nStarting from $75/night"));
        assert!(context.contains("FLIGHTS AVAILABLE: 1 options found\nStarting from $680"));
    }

    #[test]
    fn test_standard_context() {
        let intent = Intent {
            procedure: Some("dental implants".to_string()),
            country: Some("Turkey".to_string()),
            budget: Some(2000.0),
            ..Default::default()
        };
        let clinics: Vec<Clinic> = (1..=6).map(clinic).collect();
        let context = build_standard_context(&intent, &clinics, &[hotel(95.0)], &[]);

        assert!(context.starts_with(
            "User is looking for: dental implants in Turkey with budget up to $2000"
        ));
        assert!(context.contains("Clinics found (6):"));
        assert!(context.contains("   - Specialties: dental, cosmetic\n"));
        assert!(context.contains("   - Package from $1500 (7 days)\n"));
        assert!(!context.contains("Clinic 6"));
        assert!(context.contains("Nearby hotels found: 1 options starting from $95/night"));
        assert!(!context.contains("Flight options"));
    }

    #[test]
    fn test_standard_context_empty_clinics() {
        let context = build_standard_context(&Intent::default(), &[], &[], &[]);
        assert!(context.contains("Clinics found (0):"));
        assert!(context.contains("No clinics matched"));
    }
}
