/**
 * Server Initialization
 *
 * Builds the application: database pool, credential store, token service,
 * and the configured router.
 */

use axum::Router;
use std::sync::Arc;

use crate::auth::users::{CredentialStore, PgCredentialStore};
use crate::routes::router::create_router;
use crate::server::config::{load_database, load_token_service};
use crate::server::state::AppState;

/// Create and configure the application router.
///
/// # Errors
///
/// Fails when the database is unreachable or migrations cannot run; the
/// server does not start without its datastore.
pub async fn create_app() -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing vetclinic server");

    let pool = load_database().await?;
    let tokens = load_token_service();
    let credentials: Arc<dyn CredentialStore> = Arc::new(PgCredentialStore::new(pool.clone()));

    let state = AppState {
        db: pool,
        credentials,
        tokens,
    };

    Ok(create_router(state))
}
