use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    pub title: String,
    #[serde(default = "default_description")]
    pub description: Option<String>,
    pub price: f64,
    /// Observed values "attivo" and "venduto"; any string is accepted.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_description() -> Option<String> {
    Some(String::new())
}

fn default_status() -> String {
    "attivo".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListingStatusQuery {
    pub status: String,
}
