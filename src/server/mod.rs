//! Backend service: the "todos" functions over HTTP.
//!
//! Routes:
//! - `POST /api/query` - `todos:get`
//! - `POST /api/mutation` - `todos:create`, `todos:update`, `todos:updateText`,
//!   `todos:remove`, `todos:clearCompleted`
//! - `GET /api/subscribe?path=todos:get` - SSE stream of snapshots

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::protocol::{MUTATION_ROUTE, QUERY_ROUTE, SUBSCRIBE_ROUTE};
use crate::store::TodoStore;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub store: Arc<TodoStore>,
}

/// Build the service router over `store`.
pub fn router(store: Arc<TodoStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(QUERY_ROUTE, post(handlers::query))
        .route(MUTATION_ROUTE, post(handlers::mutation))
        .route(SUBSCRIBE_ROUTE, get(handlers::subscribe))
        .layer(cors)
        .with_state(ServerState { store })
}

/// Bind `addr` and serve in a background task.
///
/// Returns the task handle and the bound address, which differs from `addr`
/// when port 0 is requested.
pub async fn start_server(
    addr: SocketAddr,
    store: Arc<TodoStore>,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!("todo backend listening on http://{}", local_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("todo backend error: {}", e);
        }
    });

    Ok((handle, local_addr))
}
