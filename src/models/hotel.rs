use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub address: String,
    pub image_url: String,
    pub price: f64,
    pub rating: f64,
    pub amenities: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
    pub name: String,
    pub city: String,
    pub address: String,
    pub image_url: String,
    pub price: f64,
    pub rating: f64,
    pub amenities: Vec<String>,
}

impl NewHotel {
    pub fn with_id(self, id: u32) -> Hotel {
        Hotel {
            id,
            name: self.name,
            city: self.city,
            address: self.address,
            image_url: self.image_url,
            price: self.price,
            rating: self.rating,
            amenities: self.amenities,
        }
    }
}
