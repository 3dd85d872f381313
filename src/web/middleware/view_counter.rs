//! Page-view counting middleware.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::resolve_client_ip;

/// Counts the request before it reaches the handler.
///
/// Increments today's view counter and records the client's first visit of
/// the day, both in one transaction. The handler does not run when the
/// visit cannot be stored; the client gets a `500`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/", get(home_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), view_counter::layer))
///     .route("/health", get(health_handler));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let ip = resolve_client_ip(req.headers(), peer, st.behind_proxy);

    st.view_service.record_visit(&ip).await?;

    Ok(next.run(req).await)
}
