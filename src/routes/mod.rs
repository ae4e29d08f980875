pub mod activity;
pub mod destination;
pub mod flight;
pub mod hotel;
pub mod itinerary;
