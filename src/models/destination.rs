use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_url: String,
    pub lat: f64,
    pub lng: f64,
}

/// Insert form: everything except the store-assigned id.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewDestination {
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_url: String,
    pub lat: f64,
    pub lng: f64,
}

impl NewDestination {
    pub fn with_id(self, id: u32) -> Destination {
        Destination {
            id,
            name: self.name,
            country: self.country,
            description: self.description,
            image_url: self.image_url,
            lat: self.lat,
            lng: self.lng,
        }
    }
}
