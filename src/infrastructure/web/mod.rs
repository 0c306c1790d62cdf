//! HTTP surface: the booking form page

mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Router,
};
use tower_http::trace::TraceLayer;

use crate::application::services::BookingService;
use crate::domain::entities::BookingRequest;

pub use page::{escape_html, render_page};

/// Application state shared across handlers
pub struct AppState {
    pub bookings: BookingService,
}

type AppStateArc = Arc<AppState>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/health", get(health))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

async fn show_form(State(state): State<AppStateArc>) -> Html<String> {
    Html(render_page(state.bookings.shop_name(), &BookingRequest::default(), None))
}

async fn submit_form(
    State(state): State<AppStateArc>,
    Form(request): Form<BookingRequest>,
) -> Html<String> {
    let reply = state.bookings.submit(request.clone()).await;

    // Keep the form filled in unless the booking went through
    let form = if reply.is_confirmed() { BookingRequest::default() } else { request };
    Html(render_page(state.bookings.shop_name(), &form, Some(&reply.to_string())))
}

async fn health() -> &'static str {
    "ok"
}

/// Run the HTTP server until the process is stopped
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await
}
