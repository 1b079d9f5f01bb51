//! Structured travel/medical intent.

use serde::{Deserialize, Serialize};

use crate::serde_util::{blank_as_none, null_as_default, null_as_one, one};

/// Procedure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dental,
    Cosmetic,
    Fertility,
    Other,
}

impl Category {
    /// Wire name, also the specialty tag clinics are indexed by.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dental => "dental",
            Category::Cosmetic => "cosmetic",
            Category::Fertility => "fertility",
            Category::Other => "other",
        }
    }
}

/// What the user is looking for.
///
/// Created once per message and never mutated. An absent field means
/// "unconstrained", never "explicitly excluded".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Free-text procedure, e.g. "IVF" or "dental implants".
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub procedure: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Destination city.
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Destination country.
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Budget in USD (lower bound when `budget_max` is set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    /// Upper bound of a budget range in USD.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<f64>,

    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub travel_date: Option<String>,

    /// Where the user travels from.
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub origin_city: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub needs_hotel: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub needs_flight: bool,

    #[serde(default = "one", deserialize_with = "null_as_one")]
    pub number_of_people: u32,

    /// Length of stay in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl Default for Intent {
    /// The minimal intent: no hotel, no flight, one traveller, nothing else known.
    fn default() -> Self {
        Self {
            procedure: None,
            category: None,
            city: None,
            country: None,
            budget: None,
            budget_max: None,
            travel_date: None,
            origin_city: None,
            needs_hotel: false,
            needs_flight: false,
            number_of_people: 1,
            duration: None,
        }
    }
}

impl Intent {
    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [("budget", self.budget), ("budgetMax", self.budget_max)] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(format!("{} must be a non-negative number, got {}", name, v));
                }
            }
        }

        if let (Some(min), Some(max)) = (self.budget, self.budget_max) {
            if max < min {
                return Err(format!("budgetMax ({}) is below budget ({})", max, min));
            }
        }

        if self.number_of_people < 1 {
            return Err("numberOfPeople must be at least 1".to_string());
        }

        if self.duration == Some(0) {
            return Err("duration must be a positive number of days".to_string());
        }

        Ok(())
    }

    /// Whether a hotel search should run: hotel requested and a city known.
    pub fn wants_hotels(&self) -> bool {
        self.needs_hotel && known(&self.city).is_some()
    }

    /// Whether a flight search should run: flight requested, city and origin known.
    pub fn wants_flights(&self) -> bool {
        self.needs_flight && known(&self.city).is_some() && known(&self.origin_city).is_some()
    }

    /// The procedure, or "medical treatment" when none was named.
    pub fn procedure_or_default(&self) -> &str {
        known(&self.procedure).unwrap_or("medical treatment")
    }
}

/// A text field's value, treating blank strings as absent.
pub(crate) fn known(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
