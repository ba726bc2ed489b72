//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool,
//! the token manager used to authenticate callers and the translation provider
//! used by the layer workflow.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{middleware::auth::JwtManager, service::translator::Translator};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool and
/// the remaining fields are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Validates bearer tokens presented by callers.
    pub jwt: Arc<JwtManager>,

    /// Provider used to translate text layers.
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Token manager built from the configured secret
    /// - `translator` - Translation provider
    pub fn new(db: DatabaseConnection, jwt: JwtManager, translator: Arc<dyn Translator>) -> Self {
        Self {
            db,
            jwt: Arc::new(jwt),
            translator,
        }
    }
}
