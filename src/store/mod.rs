use crate::{
    error::{AppError, Result},
    models::{Listing, Message, Product},
};

/// Process-lifetime storage for the three resource collections. All data
/// access goes through here so the routes stay thin; `AppState` wraps it in
/// a single mutex, which keeps the scan-then-append duplicate checks atomic.
#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Product>,
    listings: Vec<Listing>,
    messages: Vec<Message>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        store.products = vec![
            Product {
                id: 1,
                name: "Charizard EX".to_string(),
                brand: "Pokemon".to_string(),
                category: "singola".to_string(),
                price: 120.0,
                image_url: None,
                condition: Some("NM".to_string()),
                set_name: None,
            },
            Product {
                id: 2,
                name: "Booster Box Scarlet & Violet".to_string(),
                brand: "Pokemon".to_string(),
                category: "sigillato".to_string(),
                price: 140.0,
                image_url: None,
                condition: Some("NM".to_string()),
                set_name: None,
            },
            Product {
                id: 3,
                name: "Monkey D. Luffy Alt Art".to_string(),
                brand: "One Piece".to_string(),
                category: "singola".to_string(),
                price: 95.0,
                image_url: None,
                condition: Some("LP".to_string()),
                set_name: None,
            },
        ];
        store.listings = vec![
            Listing {
                id: 1,
                product_id: 1,
                user_id: 100,
                title: "Charizard EX NM".to_string(),
                description: Some("Carta in ottime condizioni".to_string()),
                price: 120.0,
                status: "attivo".to_string(),
            },
            Listing {
                id: 2,
                product_id: 3,
                user_id: 101,
                title: "Luffy Alt Art".to_string(),
                description: Some("Leggera usura".to_string()),
                price: 95.0,
                status: "attivo".to_string(),
            },
        ];
        store
    }

    /// Both filters are case-insensitive and combine with AND. `q` matches a
    /// substring of the name or the set name (a missing set name matches
    /// nothing).
    pub fn list_products(&self, brand: Option<&str>, q: Option<&str>) -> Vec<Product> {
        let brand = brand.map(str::to_lowercase);
        let q = q.map(str::to_lowercase);

        self.products
            .iter()
            .filter(|p| {
                brand
                    .as_deref()
                    .map_or(true, |b| p.brand.to_lowercase() == b)
            })
            .filter(|p| {
                q.as_deref().map_or(true, |q| {
                    p.name.to_lowercase().contains(q)
                        || p.set_name
                            .as_deref()
                            .unwrap_or("")
                            .to_lowercase()
                            .contains(q)
                })
            })
            .cloned()
            .collect()
    }

    pub fn create_product(&mut self, product: Product) -> Result<Product> {
        if self.products.iter().any(|p| p.id == product.id) {
            return Err(AppError::DuplicateProductId);
        }
        self.products.push(product.clone());
        Ok(product)
    }

    pub fn list_listings(&self, status: Option<&str>) -> Vec<Listing> {
        match status {
            Some(status) => self
                .listings
                .iter()
                .filter(|l| l.status == status)
                .cloned()
                .collect(),
            None => self.listings.clone(),
        }
    }

    pub fn create_listing(&mut self, listing: Listing) -> Result<Listing> {
        if self.listings.iter().any(|l| l.id == listing.id) {
            return Err(AppError::DuplicateListingId);
        }
        if !self.products.iter().any(|p| p.id == listing.product_id) {
            return Err(AppError::ProductNotFound);
        }
        self.listings.push(listing.clone());
        Ok(listing)
    }

    /// Updates the stored record in place. Any string is accepted as the new
    /// status.
    pub fn update_listing_status(&mut self, id: i32, status: String) -> Result<Listing> {
        let listing = self
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(AppError::ListingNotFound)?;
        listing.status = status;
        Ok(listing.clone())
    }

    pub fn chat_messages(&self, chat_id: i32) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|m| m.chat_id == chat_id)
            .cloned()
            .collect()
    }

    pub fn send_message(&mut self, message: Message) -> Message {
        self.messages.push(message.clone());
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, name: &str, brand: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            brand: brand.to_string(),
            category: "singola".to_string(),
            price: 10.0,
            image_url: None,
            condition: Some("NM".to_string()),
            set_name: None,
        }
    }

    fn listing(id: i32, product_id: i32) -> Listing {
        Listing {
            id,
            product_id,
            user_id: 7,
            title: format!("Listing {}", id),
            description: Some(String::new()),
            price: 10.0,
            status: "attivo".to_string(),
        }
    }

    fn message(id: i32, chat_id: i32, text: &str) -> Message {
        Message {
            id,
            chat_id,
            sender_id: 1,
            receiver_id: 2,
            text: Some(text.to_string()),
            offer_value: None,
            trade_items: None,
            image_url: None,
        }
    }

    #[test]
    fn created_product_is_listed_with_identical_fields() {
        let mut store = Store::new();
        store
            .create_product(product(1, "Pikachu", "Pokemon"))
            .unwrap();

        let products = store.list_products(None, None);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].name, "Pikachu");
        assert_eq!(products[0].brand, "Pokemon");
        assert_eq!(products[0].condition.as_deref(), Some("NM"));
    }

    #[test]
    fn duplicate_product_id_is_rejected_and_store_unchanged() {
        let mut store = Store::new();
        store
            .create_product(product(1, "Pikachu", "Pokemon"))
            .unwrap();

        let err = store
            .create_product(product(1, "Eevee", "Pokemon"))
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateProductId));
        assert_eq!(store.list_products(None, None).len(), 1);
    }

    #[test]
    fn brand_filter_is_case_insensitive_exact_match() {
        let mut store = Store::new();
        store
            .create_product(product(1, "Charizard EX", "Pokemon"))
            .unwrap();
        store
            .create_product(product(2, "Luffy Alt Art", "One Piece"))
            .unwrap();

        let results = store.list_products(Some("pokemon"), None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);

        assert!(store.list_products(Some("poke"), None).is_empty());
    }

    #[test]
    fn q_filter_matches_name_or_set_name_substring() {
        let mut store = Store::new();
        store
            .create_product(product(1, "Charizard EX", "Pokemon"))
            .unwrap();
        let mut with_set = product(2, "Booster Box", "Pokemon");
        with_set.set_name = Some("Obsidian Flames".to_string());
        store.create_product(with_set).unwrap();

        let by_name = store.list_products(None, Some("char"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 1);

        let by_set = store.list_products(None, Some("FLAME"));
        assert_eq!(by_set.len(), 1);
        assert_eq!(by_set[0].id, 2);
    }

    #[test]
    fn filters_combine_conjunctively() {
        let mut store = Store::new();
        store
            .create_product(product(1, "Charizard EX", "Pokemon"))
            .unwrap();
        store
            .create_product(product(2, "Charlotte Katakuri", "One Piece"))
            .unwrap();

        let results = store.list_products(Some("pokemon"), Some("char"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn listing_requires_existing_product() {
        let mut store = Store::new();
        let err = store.create_listing(listing(1, 99)).unwrap_err();
        assert!(matches!(err, AppError::ProductNotFound));
        assert!(store.list_listings(None).is_empty());
    }

    #[test]
    fn duplicate_listing_id_is_rejected() {
        let mut store = Store::new();
        store
            .create_product(product(1, "Pikachu", "Pokemon"))
            .unwrap();
        store.create_listing(listing(1, 1)).unwrap();

        let err = store.create_listing(listing(1, 1)).unwrap_err();
        assert!(matches!(err, AppError::DuplicateListingId));
        assert_eq!(store.list_listings(None).len(), 1);
    }

    #[test]
    fn status_update_mutates_stored_listing() {
        let mut store = Store::new();
        store
            .create_product(product(1, "Pikachu", "Pokemon"))
            .unwrap();
        store.create_listing(listing(1, 1)).unwrap();
        store.create_listing(listing(2, 1)).unwrap();

        let updated = store
            .update_listing_status(1, "venduto".to_string())
            .unwrap();
        assert_eq!(updated.status, "venduto");
        assert_eq!(updated.title, "Listing 1");

        let sold = store.list_listings(Some("venduto"));
        assert_eq!(sold.len(), 1);
        assert_eq!(sold[0].id, 1);

        let active = store.list_listings(Some("attivo"));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, 2);
    }

    #[test]
    fn status_update_on_unknown_listing_fails() {
        let mut store = Store::new();
        let err = store
            .update_listing_status(42, "venduto".to_string())
            .unwrap_err();
        assert!(matches!(err, AppError::ListingNotFound));
    }

    #[test]
    fn chat_messages_are_grouped_by_chat_id_in_send_order() {
        let mut store = Store::new();
        store.send_message(message(1, 5, "ciao"));
        store.send_message(message(2, 5, "scambio?"));
        store.send_message(message(3, 6, "altra chat"));

        let chat = store.chat_messages(5);
        assert_eq!(chat.len(), 2);
        assert_eq!(chat[0].id, 1);
        assert_eq!(chat[1].id, 2);

        assert!(store.chat_messages(7).is_empty());
    }

    #[test]
    fn demo_data_seeds_products_and_listings_only() {
        let store = Store::with_demo_data();
        assert_eq!(store.list_products(None, None).len(), 3);
        assert_eq!(store.list_listings(None).len(), 2);
        assert!(store.chat_messages(1).is_empty());
    }
}
