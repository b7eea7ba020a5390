use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub chat_id: i32,
    pub sender_id: i32,
    pub receiver_id: i32,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub offer_value: Option<f64>,
    /// Free-form trade offer payload; the shape of each item is not specified.
    #[serde(default)]
    pub trade_items: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub image_url: Option<String>,
}
