use std::collections::HashMap;
use std::sync::RwLock;

use crate::db::seed;
use crate::models::activity::{Activity, NewActivity};
use crate::models::destination::{Destination, NewDestination};
use crate::models::flight::{Flight, NewFlight};
use crate::models::hotel::{Hotel, NewHotel};
use crate::models::itinerary::{Itinerary, ItineraryUpdate, NewItinerary};

/// Single-owner auto-increment counter, one per entity kind. Ids are only
/// handed out through the create operations.
#[derive(Debug)]
struct IdSequence(u32);

impl IdSequence {
    fn next(&mut self) -> u32 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self(1)
    }
}

#[derive(Default)]
struct StoreInner {
    destinations: HashMap<u32, Destination>,
    flights: HashMap<u32, Flight>,
    hotels: HashMap<u32, Hotel>,
    activities: HashMap<u32, Activity>,
    itineraries: HashMap<u32, Itinerary>,

    destination_ids: IdSequence,
    flight_ids: IdSequence,
    hotel_ids: IdSequence,
    activity_ids: IdSequence,
    itinerary_ids: IdSequence,
}

impl StoreInner {
    fn insert_destination(&mut self, new: NewDestination) -> Destination {
        let id = self.destination_ids.next();
        let destination = new.with_id(id);
        self.destinations.insert(id, destination.clone());
        destination
    }

    fn insert_flight(&mut self, new: NewFlight) -> Flight {
        let id = self.flight_ids.next();
        let flight = new.with_id(id);
        self.flights.insert(id, flight.clone());
        flight
    }

    fn insert_hotel(&mut self, new: NewHotel) -> Hotel {
        let id = self.hotel_ids.next();
        let hotel = new.with_id(id);
        self.hotels.insert(id, hotel.clone());
        hotel
    }

    fn insert_activity(&mut self, new: NewActivity) -> Activity {
        let id = self.activity_ids.next();
        let activity = new.with_id(id);
        self.activities.insert(id, activity.clone());
        activity
    }

    fn insert_itinerary(&mut self, new: NewItinerary) -> Itinerary {
        let id = self.itinerary_ids.next();
        let itinerary = new.with_id(id);
        self.itineraries.insert(id, itinerary.clone());
        itinerary
    }
}

/// In-memory keyed storage for the catalog and saved itineraries. Reads hand
/// out cloned records; the store never leaks references into its maps.
pub struct MemStorage {
    inner: RwLock<StoreInner>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
        }
    }

    /// A store preloaded with the demo catalog.
    pub fn seeded() -> Self {
        let storage = Self::new();
        {
            let mut inner = storage.inner.write().expect("storage lock poisoned");
            for destination in seed::destinations() {
                inner.insert_destination(destination);
            }
            for flight in seed::flights() {
                inner.insert_flight(flight);
            }
            for hotel in seed::hotels() {
                inner.insert_hotel(hotel);
            }
            for activity in seed::activities() {
                inner.insert_activity(activity);
            }
        }
        storage
    }

    // Destination operations

    pub async fn get_destinations(&self) -> Vec<Destination> {
        let inner = self.inner.read().expect("storage lock poisoned");
        let mut destinations: Vec<_> = inner.destinations.values().cloned().collect();
        destinations.sort_by_key(|d| d.id);
        destinations
    }

    pub async fn get_destination(&self, id: u32) -> Option<Destination> {
        let inner = self.inner.read().expect("storage lock poisoned");
        inner.destinations.get(&id).cloned()
    }

    pub async fn create_destination(&self, new: NewDestination) -> Destination {
        let mut inner = self.inner.write().expect("storage lock poisoned");
        inner.insert_destination(new)
    }

    // Flight operations

    /// Optionally filtered by departure and arrival city, case-insensitive
    /// exact match.
    pub async fn get_flights(&self, from: Option<&str>, to: Option<&str>) -> Vec<Flight> {
        let inner = self.inner.read().expect("storage lock poisoned");
        let mut flights: Vec<_> = inner
            .flights
            .values()
            .filter(|flight| match from {
                Some(city) => flight.departure_city.eq_ignore_ascii_case(city),
                None => true,
            })
            .filter(|flight| match to {
                Some(city) => flight.arrival_city.eq_ignore_ascii_case(city),
                None => true,
            })
            .cloned()
            .collect();
        flights.sort_by_key(|f| f.id);
        flights
    }

    pub async fn get_flight(&self, id: u32) -> Option<Flight> {
        let inner = self.inner.read().expect("storage lock poisoned");
        inner.flights.get(&id).cloned()
    }

    pub async fn create_flight(&self, new: NewFlight) -> Flight {
        let mut inner = self.inner.write().expect("storage lock poisoned");
        inner.insert_flight(new)
    }

    // Hotel operations

    pub async fn get_hotels(&self, city: Option<&str>) -> Vec<Hotel> {
        let inner = self.inner.read().expect("storage lock poisoned");
        let mut hotels: Vec<_> = inner
            .hotels
            .values()
            .filter(|hotel| match city {
                Some(city) => hotel.city.eq_ignore_ascii_case(city),
                None => true,
            })
            .cloned()
            .collect();
        hotels.sort_by_key(|h| h.id);
        hotels
    }

    pub async fn get_hotel(&self, id: u32) -> Option<Hotel> {
        let inner = self.inner.read().expect("storage lock poisoned");
        inner.hotels.get(&id).cloned()
    }

    pub async fn create_hotel(&self, new: NewHotel) -> Hotel {
        let mut inner = self.inner.write().expect("storage lock poisoned");
        inner.insert_hotel(new)
    }

    // Activity operations

    pub async fn get_activities(&self, destination_id: Option<u32>) -> Vec<Activity> {
        let inner = self.inner.read().expect("storage lock poisoned");
        let mut activities: Vec<_> = inner
            .activities
            .values()
            .filter(|activity| match destination_id {
                Some(id) => activity.destination_id == id,
                None => true,
            })
            .cloned()
            .collect();
        activities.sort_by_key(|a| a.id);
        activities
    }

    pub async fn get_activity(&self, id: u32) -> Option<Activity> {
        let inner = self.inner.read().expect("storage lock poisoned");
        inner.activities.get(&id).cloned()
    }

    pub async fn create_activity(&self, new: NewActivity) -> Activity {
        let mut inner = self.inner.write().expect("storage lock poisoned");
        inner.insert_activity(new)
    }

    // Itinerary operations

    pub async fn get_itineraries(&self, user_id: Option<u32>) -> Vec<Itinerary> {
        let inner = self.inner.read().expect("storage lock poisoned");
        let mut itineraries: Vec<_> = inner
            .itineraries
            .values()
            .filter(|itinerary| match user_id {
                Some(id) => itinerary.user_id == Some(id),
                None => true,
            })
            .cloned()
            .collect();
        itineraries.sort_by_key(|i| i.id);
        itineraries
    }

    pub async fn get_itinerary(&self, id: u32) -> Option<Itinerary> {
        let inner = self.inner.read().expect("storage lock poisoned");
        inner.itineraries.get(&id).cloned()
    }

    pub async fn create_itinerary(&self, new: NewItinerary) -> Itinerary {
        let mut inner = self.inner.write().expect("storage lock poisoned");
        inner.insert_itinerary(new)
    }

    /// Merge the provided fields into the stored record. Returns `None` when
    /// the id is unknown.
    pub async fn update_itinerary(&self, id: u32, update: ItineraryUpdate) -> Option<Itinerary> {
        let mut inner = self.inner.write().expect("storage lock poisoned");
        let itinerary = inner.itineraries.get_mut(&id)?;

        if let Some(name) = update.name {
            itinerary.name = name;
        }
        if let Some(user_id) = update.user_id {
            itinerary.user_id = Some(user_id);
        }
        if let Some(start_date) = update.start_date {
            itinerary.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            itinerary.end_date = end_date;
        }
        if let Some(total_cost) = update.total_cost {
            itinerary.total_cost = total_cost;
        }
        if let Some(days) = update.days {
            itinerary.days = days;
        }
        Some(itinerary.clone())
    }

    pub async fn delete_itinerary(&self, id: u32) -> bool {
        let mut inner = self.inner.write().expect("storage lock poisoned");
        inner.itineraries.remove(&id).is_some()
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_itinerary(name: &str, user_id: Option<u32>) -> NewItinerary {
        NewItinerary {
            name: name.to_string(),
            user_id,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            total_cost: 0.0,
            days: Vec::new(),
        }
    }

    #[actix_rt::test]
    async fn ids_are_assigned_sequentially_per_kind() {
        let storage = MemStorage::new();
        let first = storage.create_itinerary(new_itinerary("a", None)).await;
        let second = storage.create_itinerary(new_itinerary("b", None)).await;
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[actix_rt::test]
    async fn flight_filters_are_case_insensitive() {
        let storage = MemStorage::seeded();
        let flights = storage.get_flights(Some("new york"), None).await;
        assert!(!flights.is_empty());
        assert!(flights.iter().all(|f| f.departure_city == "New York"));

        let flights = storage.get_flights(Some("new york"), Some("PARIS")).await;
        assert!(flights.iter().all(|f| f.arrival_city == "Paris"));
    }

    #[actix_rt::test]
    async fn activities_filter_by_destination() {
        let storage = MemStorage::seeded();
        let paris = storage.get_destinations().await[0].clone();
        let activities = storage.get_activities(Some(paris.id)).await;
        assert!(!activities.is_empty());
        assert!(activities.iter().all(|a| a.destination_id == paris.id));
    }

    #[actix_rt::test]
    async fn itinerary_update_merges_partial_fields() {
        let storage = MemStorage::new();
        let created = storage.create_itinerary(new_itinerary("Summer", Some(7))).await;

        let update = ItineraryUpdate {
            name: Some("Summer in Paris".to_string()),
            total_cost: Some(125.0),
            ..Default::default()
        };
        let updated = storage.update_itinerary(created.id, update).await.unwrap();
        assert_eq!(updated.name, "Summer in Paris");
        assert_eq!(updated.total_cost, 125.0);
        assert_eq!(updated.user_id, Some(7));
        assert_eq!(updated.start_date, created.start_date);
    }

    #[actix_rt::test]
    async fn update_and_delete_report_missing_records() {
        let storage = MemStorage::new();
        let missing = storage.update_itinerary(42, ItineraryUpdate::default()).await;
        assert!(missing.is_none());
        assert!(!storage.delete_itinerary(42).await);

        let created = storage.create_itinerary(new_itinerary("t", None)).await;
        assert!(storage.delete_itinerary(created.id).await);
        assert!(storage.get_itinerary(created.id).await.is_none());
    }

    #[actix_rt::test]
    async fn itineraries_filter_by_user() {
        let storage = MemStorage::new();
        storage.create_itinerary(new_itinerary("a", Some(1))).await;
        storage.create_itinerary(new_itinerary("b", Some(2))).await;
        storage.create_itinerary(new_itinerary("c", None)).await;

        assert_eq!(storage.get_itineraries(Some(1)).await.len(), 1);
        assert_eq!(storage.get_itineraries(None).await.len(), 3);
    }
}
