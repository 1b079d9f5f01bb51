//! `OptionProvider` implementation over an in-memory catalog.

use std::cmp::Ordering;
use std::env;

use async_trait::async_trait;
use concierge_core::{
    Clinic, Flight, FlightQuery, Hotel, HotelQuery, Intent, OptionProvider, Package,
    ProviderError,
};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Packages kept per clinic after budget filtering.
pub const MAX_PACKAGES_PER_CLINIC: usize = 3;

/// Hotels or flights returned per search.
pub const MAX_TRAVEL_RESULTS: usize = 5;

/// Option provider backed by a [`Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    catalog: Catalog,
}

impl CatalogProvider {
    /// Create a provider over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Provider over the embedded seed catalog.
    pub fn seeded() -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::seed()?))
    }

    /// Load the catalog named by `CATALOG_PATH`, or the seed when unset.
    pub fn from_env() -> Result<Self, CatalogError> {
        match env::var("CATALOG_PATH") {
            Ok(path) if !path.trim().is_empty() => Ok(Self::new(Catalog::from_path(path)?)),
            _ => Self::seeded(),
        }
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn matching_clinics(&self, intent: &Intent, limit: usize) -> Vec<Clinic> {
        let mut clinics: Vec<Clinic> = self
            .catalog
            .clinics
            .iter()
            .filter(|clinic| clinic.is_active && clinic.is_verified)
            .filter(|clinic| clinic_matches(clinic, intent))
            .map(|clinic| Clinic {
                packages: packages_within_budget(&clinic.packages, intent),
                ..clinic.clone()
            })
            .collect();

        clinics.sort_by(compare_clinics);
        clinics.truncate(limit);
        clinics
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Blank location strings constrain nothing.
fn location(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn clinic_matches(clinic: &Clinic, intent: &Intent) -> bool {
    if let Some(category) = intent.category {
        if !clinic.specialties.iter().any(|s| s == category.as_str()) {
            return false;
        }
    }
    if let Some(city) = location(&intent.city) {
        if !contains_ignore_case(&clinic.city, city) {
            return false;
        }
    }
    if let Some(country) = location(&intent.country) {
        if !contains_ignore_case(&clinic.country, country) {
            return false;
        }
    }
    true
}

/// Budget rule: with `budget_max`, keep `budget-or-0 <= price <= budget_max`;
/// with only `budget`, keep `price <= budget`.
fn packages_within_budget(packages: &[Package], intent: &Intent) -> Vec<Package> {
    let mut kept: Vec<Package> = packages
        .iter()
        .filter(|pkg| pkg.is_active)
        .filter(|pkg| match (intent.budget, intent.budget_max) {
            (min, Some(max)) => pkg.price >= min.unwrap_or(0.0) && pkg.price <= max,
            (Some(budget), None) => pkg.price <= budget,
            (None, None) => true,
        })
        .cloned()
        .collect();

    kept.sort_by(|a, b| a.price.total_cmp(&b.price));
    kept.truncate(MAX_PACKAGES_PER_CLINIC);
    kept
}

/// Rating descending, then review count descending; unrated clinics last.
fn compare_clinics(a: &Clinic, b: &Clinic) -> Ordering {
    let rating = match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    rating.then_with(|| b.review_count.unwrap_or(0).cmp(&a.review_count.unwrap_or(0)))
}

#[async_trait]
impl OptionProvider for CatalogProvider {
    async fn search_clinics(
        &self,
        intent: &Intent,
        limit: usize,
    ) -> Result<Vec<Clinic>, ProviderError> {
        let clinics = self.matching_clinics(intent, limit);
        debug!(count = clinics.len(), limit, "Clinic search");
        Ok(clinics)
    }

    async fn search_hotels(&self, query: &HotelQuery) -> Result<Vec<Hotel>, ProviderError> {
        let mut hotels: Vec<Hotel> = self
            .catalog
            .hotels
            .iter()
            .filter(|h| query.max_price.map_or(true, |max| h.price_per_night <= max))
            .cloned()
            .collect();

        hotels.sort_by(|a, b| a.price_per_night.total_cmp(&b.price_per_night));
        hotels.truncate(MAX_TRAVEL_RESULTS);
        debug!(city = %query.city, count = hotels.len(), "Hotel search");
        Ok(hotels)
    }

    async fn search_flights(&self, query: &FlightQuery) -> Result<Vec<Flight>, ProviderError> {
        let mut flights: Vec<Flight> = self
            .catalog
            .flights
            .iter()
            .filter(|f| query.max_price.map_or(true, |max| f.price <= max))
            .cloned()
            .collect();

        flights.sort_by(|a, b| a.price.total_cmp(&b.price));
        flights.truncate(MAX_TRAVEL_RESULTS);
        debug!(
            origin = %query.origin,
            destination = %query.destination,
            count = flights.len(),
            "Flight search"
        );
        Ok(flights)
    }

    fn name(&self) -> &str {
        "CatalogProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::Category;

    fn provider() -> CatalogProvider {
        CatalogProvider::seeded().unwrap()
    }

    fn package(id: &str, price: f64) -> Package {
        Package {
            id: id.to_string(),
            name: id.to_string(),
            name_ar: None,
            price,
            currency: "USD".to_string(),
            duration: 5,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_unconstrained_search_ranks_by_rating() {
        let clinics = provider()
            .search_clinics(&Intent::default(), 10)
            .await
            .unwrap();

        let names: Vec<&str> = clinics.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Bangkok Beauty Institute",
                "Istanbul Dental Center",
                "Dubai Fertility Center"
            ]
        );
    }

    #[tokio::test]
    async fn test_limit_applies() {
        let clinics = provider()
            .search_clinics(&Intent::default(), 1)
            .await
            .unwrap();
        assert_eq!(clinics.len(), 1);
    }

    #[tokio::test]
    async fn test_category_and_location_filters() {
        let intent = Intent {
            category: Some(Category::Fertility),
            country: Some("uae".to_string()),
            ..Default::default()
        };
        let clinics = provider().search_clinics(&intent, 10).await.unwrap();
        assert_eq!(clinics.len(), 1);
        assert_eq!(clinics[0].city, "Dubai");

        let intent = Intent {
            category: Some(Category::Fertility),
            country: Some("Turkey".to_string()),
            ..Default::default()
        };
        assert!(provider().search_clinics(&intent, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_location_constrains_nothing() {
        let intent = Intent {
            city: Some(String::new()),
            country: Some("  ".to_string()),
            ..Default::default()
        };
        let clinics = provider().search_clinics(&intent, 10).await.unwrap();
        assert_eq!(clinics.len(), 3);

        let intent = Intent {
            city: Some(String::new()),
            country: Some("Turkey".to_string()),
            ..Default::default()
        };
        let clinics = provider().search_clinics(&intent, 10).await.unwrap();
        assert_eq!(clinics.len(), 1);
        assert_eq!(clinics[0].name, "Istanbul Dental Center");
    }

    #[tokio::test]
    async fn test_inactive_and_unverified_entries_hidden() {
        let mut catalog = Catalog::seed().unwrap();
        catalog.clinics[0].is_active = false;
        catalog.clinics[1].is_verified = false;
        let visible = catalog.clinics[2].id.clone();
        for pkg in &mut catalog.clinics[2].packages {
            pkg.is_active = false;
        }

        let clinics = CatalogProvider::new(catalog)
            .search_clinics(&Intent::default(), 10)
            .await
            .unwrap();
        assert_eq!(clinics.len(), 1);
        assert_eq!(clinics[0].id, visible);
        assert!(clinics[0].packages.is_empty());
    }

    #[test]
    fn test_inactive_packages_dropped() {
        let mut inactive = package("b", 200.0);
        inactive.is_active = false;
        let packages = vec![package("a", 300.0), inactive, package("c", 100.0)];

        let kept = packages_within_budget(&packages, &Intent::default());
        let ids: Vec<&str> = kept.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[tokio::test]
    async fn test_budget_filters_packages_not_clinics() {
        let intent = Intent {
            category: Some(Category::Cosmetic),
            budget: Some(1000.0),
            ..Default::default()
        };
        let clinics = provider().search_clinics(&intent, 10).await.unwrap();
        assert_eq!(clinics.len(), 1);
        assert!(clinics[0].packages.is_empty());
    }

    #[test]
    fn test_budget_range() {
        let packages = vec![
            package("a", 12000.0),
            package("b", 9000.0),
            package("c", 11000.0),
            package("d", 16000.0),
        ];
        let intent = Intent {
            budget: Some(10000.0),
            budget_max: Some(15000.0),
            ..Default::default()
        };

        let kept = packages_within_budget(&packages, &intent);
        let ids: Vec<&str> = kept.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn test_budget_max_only_and_package_cap() {
        let packages: Vec<Package> = (1..=5)
            .map(|i| package(&format!("p{}", i), (6 - i) as f64 * 100.0))
            .collect();
        let intent = Intent {
            budget_max: Some(450.0),
            ..Default::default()
        };

        let kept = packages_within_budget(&packages, &intent);
        let prices: Vec<f64> = kept.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_review_count_breaks_rating_ties() {
        let mut catalog = Catalog::seed().unwrap();
        for clinic in &mut catalog.clinics {
            clinic.rating = Some(4.5);
        }
        let clinics = CatalogProvider::new(catalog).matching_clinics(&Intent::default(), 10);
        let counts: Vec<u32> = clinics.iter().filter_map(|c| c.review_count).collect();
        assert_eq!(counts, vec![2103, 1245, 892]);
    }

    #[tokio::test]
    async fn test_hotels_sorted_and_capped_by_price() {
        let query = HotelQuery {
            city: "Istanbul".to_string(),
            country: None,
            guests: 1,
            max_price: Some(100.0),
        };
        let hotels = provider().search_hotels(&query).await.unwrap();
        let prices: Vec<f64> = hotels.iter().map(|h| h.price_per_night).collect();
        assert_eq!(prices, vec![75.0, 95.0]);
    }

    #[tokio::test]
    async fn test_flights_sorted_by_price() {
        let query = FlightQuery {
            origin: "New York".to_string(),
            destination: "Istanbul".to_string(),
            passengers: 1,
            max_price: None,
        };
        let flights = provider().search_flights(&query).await.unwrap();
        let numbers: Vec<&str> = flights.iter().map(|f| f.flight_number.as_str()).collect();
        assert_eq!(numbers, vec!["LH400", "TK11", "EK203"]);
    }
}
