use serde::{Deserialize, Serialize};

/// A bookable activity in the catalog, tied to a destination.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u32,
    pub name: String,
    pub destination_id: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub price: f64,
    pub duration: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub name: String,
    pub destination_id: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub price: f64,
    pub duration: String,
}

impl NewActivity {
    pub fn with_id(self, id: u32) -> Activity {
        Activity {
            id,
            name: self.name,
            destination_id: self.destination_id,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
            duration: self.duration,
        }
    }
}
