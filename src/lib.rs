//! Library entrypoint for PriceWatch.
//!
//! This file exists mainly to make API tests easy (integration tests under
//! `tests/` can import the app state, routers, controllers, services).

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod models;

pub mod store;

pub mod services;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub alerts: services::AlertsService,
}

impl AppState {
    /// Builds the state with the file-backed store from `settings`.
    pub fn new(settings: config::Settings) -> Self {
        let store = Arc::new(store::FileStore::new(settings.alerts_file.clone()));
        let alerts = services::AlertsService::new(store);

        Self { settings, alerts }
    }
}
