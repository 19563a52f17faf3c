/**
 * Application State
 *
 * The central state container: the database pool, the credential store,
 * and the token service. Everything here is read-only after startup and
 * cheap to clone; per-request work never touches shared mutable state.
 *
 * The `FromRef` implementations let handlers extract just the piece they
 * need — the auth handlers take the store and the token service, the CRUD
 * handlers take the pool — so none of them depend on the full state.
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::tokens::TokenService;
use crate::auth::users::CredentialStore;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the CRUD modules.
    pub db: PgPool,
    /// Credential store used by the auth flows and admin handlers.
    pub credentials: Arc<dyn CredentialStore>,
    /// Token issuance and verification, constructed once at startup.
    pub tokens: TokenService,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CredentialStore> {
    fn from_ref(state: &AppState) -> Self {
        state.credentials.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}
