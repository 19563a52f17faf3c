/**
 * Router Configuration
 *
 * Assembles the full HTTP surface and makes route protection explicit.
 *
 * # Protection table
 *
 * | Routes                              | Access                    |
 * |-------------------------------------|---------------------------|
 * | POST /signup, POST /login, /health  | public                    |
 * | /owners*, /animals*, /vaccinations* | any authenticated role    |
 * | /users*                             | admin only                |
 *
 * The auth gate rejects missing credentials with 401 and bad tokens with
 * 403 before any protected handler runs; the role gate on /users adds a
 * 403 for authenticated non-admins.
 */

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Json,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::admin;
use crate::animals;
use crate::auth::handlers::{login, signup};
use crate::auth::users::Role;
use crate::error::not_found;
use crate::middleware::auth::{auth_gate, require_role};
use crate::owners;
use crate::server::state::AppState;
use crate::vaccinations;

const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Build the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/health", get(health));

    // CRUD routes: open to any logged-in account.
    let protected = Router::new()
        .route(
            "/owners",
            get(owners::handlers::list).post(owners::handlers::create),
        )
        // GET here selects by user id rather than row id, which is what
        // the frontend sends for the profile page.
        .route(
            "/owners/{id}",
            get(owners::handlers::get_by_user)
                .put(owners::handlers::update)
                .delete(owners::handlers::delete),
        )
        .route(
            "/animals",
            get(animals::handlers::list).post(animals::handlers::create),
        )
        .route("/animals/user/{user_id}", get(animals::handlers::list_for_user))
        .route(
            "/animals/{id}",
            get(animals::handlers::get)
                .put(animals::handlers::update)
                .delete(animals::handlers::delete),
        )
        .route(
            "/vaccinations",
            get(vaccinations::handlers::list).post(vaccinations::handlers::create),
        )
        // GET here takes an animal id and returns that animal's records.
        .route(
            "/vaccinations/{id}",
            get(vaccinations::handlers::list_for_animal)
                .put(vaccinations::handlers::update)
                .delete(vaccinations::handlers::delete),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_gate));

    // User management: admin only. The role gate sits inside the auth gate.
    let admin_routes = Router::new()
        .route("/users", get(admin::handlers::list))
        .route(
            "/users/{id}",
            put(admin::handlers::update_role)
                .patch(admin::handlers::set_active)
                .delete(admin::handlers::delete),
        )
        .route_layer(middleware::from_fn(|request: Request, next: Next| {
            require_role(ADMIN_ONLY, request, next)
        }))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_gate));

    Router::new()
        .merge(public)
        .merge(protected)
        .merge(admin_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
