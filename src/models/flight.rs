use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: u32,
    pub airline: String,
    pub flight_number: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: f64,
    pub duration: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
    pub airline: String,
    pub flight_number: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: f64,
    pub duration: String,
}

impl NewFlight {
    pub fn with_id(self, id: u32) -> Flight {
        Flight {
            id,
            airline: self.airline,
            flight_number: self.flight_number,
            departure_city: self.departure_city,
            arrival_city: self.arrival_city,
            departure_time: self.departure_time,
            arrival_time: self.arrival_time,
            price: self.price,
            duration: self.duration,
        }
    }
}
