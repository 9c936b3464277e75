//! Lending Catalog
//!
//! Record-keeping server for a lending catalog: items available for loan,
//! the people who borrow them and the loans linking the two, exposed as a
//! JSON REST API over a SQLite store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: repository::Repository,
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(repository: repository::Repository) -> Self {
        Self {
            services: Arc::new(services::Services::new(repository.clone())),
            repository,
        }
    }
}
