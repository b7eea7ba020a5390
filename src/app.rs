use std::sync::{Arc, Mutex, MutexGuard};

use axum::{http::HeaderValue, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::{
    config::{AppConfig, CorsConfig},
    error::{AppError, Result},
    routes,
    store::Store,
};

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(app_name: impl Into<String>, store: Store) -> Self {
        Self {
            app_name: app_name.into(),
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Store operations never panic, so poisoning only occurs if a future
    /// change breaks that; surface it as a 500 rather than unwrapping.
    pub fn store(&self) -> Result<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|_| AppError::Internal("store lock poisoned".to_string()))
    }
}

pub fn build(config: &AppConfig) -> Result<Router> {
    let store = if config.enable_demo_data {
        Store::with_demo_data()
    } else {
        Store::new()
    };
    let state = AppState::new(config.app_name.clone(), store);

    let app = routes::create_router()
        .layer(cors_layer(&config.cors)?)
        .with_state(state);

    Ok(app)
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    // tower-http refuses wildcard values alongside credentials, so the
    // permissive "*" default mirrors whatever the request sends instead.
    let origin = if config.allowed_origin == "*" {
        AllowOrigin::mirror_request()
    } else {
        let value = config.allowed_origin.parse::<HeaderValue>().map_err(|_| {
            AppError::ConfigError(format!("Invalid CORS origin: {}", config.allowed_origin))
        })?;
        AllowOrigin::exact(value)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
