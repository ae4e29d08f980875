use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::activity::Activity;
use crate::models::flight::Flight;
use crate::models::hotel::Hotel;

/// Inclusive span of trip days. A single-day trip has `start == end`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_valid(&self) -> bool {
        self.end >= self.start
    }

    /// Number of calendar days covered, both endpoints included.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    #[serde(rename = "flight")]
    Flight,
    #[serde(rename = "train")]
    Train,
    #[serde(rename = "bus")]
    Bus,
    #[serde(rename = "car")]
    Car,
    #[serde(rename = "taxi")]
    Taxi,
}

/// Denormalized copy of a catalog activity, taken at the moment it is added
/// to a day. Catalog edits never propagate back into saved entries, and the
/// same catalog activity may appear more than once in a day.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub price: f64,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

impl ActivityEntry {
    /// Snapshot a catalog activity. New entries land in the 09:00 slot until
    /// the user picks a time.
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name.clone(),
            description: activity.description.clone(),
            image_url: activity.image_url.clone(),
            price: activity.price,
            duration: activity.duration.clone(),
            start_time: Some("09:00".to_string()),
        }
    }
}

/// Partial edit of an activity entry. Only the provided fields overwrite.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationEntry {
    pub hotel_id: u32,
    pub name: String,
    pub price: f64,
}

impl AccommodationEntry {
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            hotel_id: hotel.id,
            name: hotel.name.clone(),
            price: hotel.price,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransportationEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_id: Option<u32>,
    #[serde(rename = "type")]
    pub mode: TransportMode,
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
}

impl TransportationEntry {
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            flight_id: Some(flight.id),
            mode: TransportMode::Flight,
            from: flight.departure_city.clone(),
            to: flight.arrival_city.clone(),
            departure_time: Some(flight.departure_time.clone()),
            arrival_time: Some(flight.arrival_time.clone()),
            price: flight.price,
            flight_number: Some(flight.flight_number.clone()),
        }
    }
}

/// One calendar day of a trip: an ordered schedule of activities plus at
/// most one accommodation, at most one transportation and free-text notes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub date: NaiveDate,
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<AccommodationEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation: Option<TransportationEntry>,
}

impl DayPlan {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            activities: Vec::new(),
            notes: None,
            accommodation: None,
            transportation: None,
        }
    }
}

/// The persisted trip record: name, date range, day plans and the derived
/// total cost at the moment of saving.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_cost: f64,
    pub days: Vec<DayPlan>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewItinerary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_cost: f64,
    pub days: Vec<DayPlan>,
}

impl NewItinerary {
    pub fn with_id(self, id: u32) -> Itinerary {
        Itinerary {
            id,
            name: self.name,
            user_id: self.user_id,
            start_date: self.start_date,
            end_date: self.end_date,
            total_cost: self.total_cost,
            days: self.days,
        }
    }
}

/// Partial update for PUT: absent fields leave the stored value untouched.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<DayPlan>>,
}
