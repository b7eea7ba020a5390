use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Conventionally "Pokemon" or "One Piece"; never enforced.
    pub brand: String,
    /// Conventionally "singola", "sigillato", "lotto" or "accessorio"; never enforced.
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_condition")]
    pub condition: Option<String>,
    #[serde(default)]
    pub set_name: Option<String>,
}

fn default_condition() -> Option<String> {
    Some("NM".to_string())
}

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub brand: Option<String>,
    pub q: Option<String>,
}
