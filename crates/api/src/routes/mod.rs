//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod health;
pub mod task_pdfs;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Mutations require a bearer token; listing is public
    let protected_routes =
        Router::new()
            .merge(task_pdfs::protected_routes())
            .layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            ));

    Router::new().merge(health::routes()).nest(
        "/task-pdfs",
        task_pdfs::public_routes().merge(protected_routes),
    )
}
