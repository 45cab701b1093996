use crate::fixture::FlightStore;
use crate::models::flight::{DecoratedFlightOffer, FlightOffer, OfferQueryResponse, ALL_CABINS};
use crate::utils::format::{format_duration, format_instant};
use indexmap::IndexSet;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct FlightService {
    store: Arc<FlightStore>,
    // Store-derived, so computed once per store
    cabin_options: Vec<String>,
}

impl FlightService {
    pub fn new(store: Arc<FlightStore>) -> Self {
        let cabin_options = cabin_options_for(&store);
        FlightService {
            store,
            cabin_options,
        }
    }

    pub fn store(&self) -> &FlightStore {
        &self.store
    }

    /// "All cabins" followed by each distinct fare class in first-occurrence order.
    pub fn cabin_options(&self) -> &[String] {
        &self.cabin_options
    }

    pub fn is_known_cabin(&self, cabin: &str) -> bool {
        self.cabin_options.iter().any(|option| option == cabin)
    }

    /// Filter the store by cabin (exact match, store order kept) and decorate
    /// every surviving offer with its display labels.
    pub fn derive(&self, selected_cabin: &str) -> Vec<DecoratedFlightOffer> {
        self.store
            .offers()
            .iter()
            .filter(|offer| selected_cabin == ALL_CABINS || offer.fare_class == selected_cabin)
            .map(decorate)
            .collect()
    }

    // Stateless lookup used by the offers widget; cabin matching ignores case.
    // Only an empty cabin means "no filter", the value is not trimmed.
    pub fn query_offers(&self, fare_cabin: Option<&str>) -> OfferQueryResponse {
        let fare_cabin = fare_cabin.filter(|cabin| !cabin.is_empty());

        let flights = self
            .store
            .offers()
            .iter()
            .filter(|offer| match fare_cabin {
                Some(cabin) => offer.fare_class.to_lowercase() == cabin.to_lowercase(),
                None => true,
            })
            .cloned()
            .collect();

        let mut available_cabins: Vec<String> =
            self.cabin_options.iter().skip(1).cloned().collect();
        available_cabins.sort();

        OfferQueryResponse {
            flights,
            available_cabins,
            selected_cabin: fare_cabin.unwrap_or(ALL_CABINS).to_string(),
        }
    }
}

pub fn decorate(offer: &FlightOffer) -> DecoratedFlightOffer {
    DecoratedFlightOffer {
        departure_label: format_instant(&offer.departure),
        arrival_label: format_instant(&offer.arrival),
        duration_label: format_duration(offer.duration_minutes),
        offer: offer.clone(),
    }
}

fn cabin_options_for(store: &FlightStore) -> Vec<String> {
    let mut cabins: IndexSet<&str> = IndexSet::new();
    cabins.insert(ALL_CABINS);
    for offer in store.offers() {
        cabins.insert(offer.fare_class.as_str());
    }
    cabins.into_iter().map(str::to_string).collect()
}
