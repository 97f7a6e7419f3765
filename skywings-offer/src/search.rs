use skywings_core::{FlightRecord, SearchQuery, SortKey};

/// Filter a catalog by the query and order the survivors.
///
/// Filters are conjunctive and applied in form order: departure city,
/// arrival city, airline selection, class, then the always-active price
/// range. Sorting is stable, so records with equal keys keep their catalog
/// order. Never fails; an empty result is a valid answer.
pub fn search(catalog: &[FlightRecord], query: &SearchQuery) -> Vec<FlightRecord> {
    let mut results: Vec<FlightRecord> = catalog
        .iter()
        .filter(|f| matches(f, query))
        .cloned()
        .collect();

    match query.sort {
        SortKey::PriceAsc => results.sort_by_key(|f| f.price_cents),
        SortKey::PriceDesc => results.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortKey::Duration => results.sort_by_key(|f| f.duration),
        SortKey::DepartureTime => results.sort_by_key(|f| f.departure_time),
    }

    tracing::debug!(
        "Search matched {} of {} flights (sort {:?})",
        results.len(),
        catalog.len(),
        query.sort
    );
    results
}

fn matches(flight: &FlightRecord, query: &SearchQuery) -> bool {
    if let Some(city) = query.departure_city {
        if flight.departure_city != city {
            return false;
        }
    }
    if let Some(city) = query.arrival_city {
        if flight.arrival_city != city {
            return false;
        }
    }
    // An empty selection is still a selection: it admits no airline.
    if let Some(airlines) = &query.airlines {
        if !airlines.contains(&flight.airline) {
            return false;
        }
    }
    if let Some(class) = query.cabin_class {
        if flight.cabin_class != class {
            return false;
        }
    }
    query.price_range.contains(flight.price())
}
