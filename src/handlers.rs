use crate::analytics::EventTracker;
use crate::booking_client::BookingClient;
use crate::config::Config;
use crate::contact::{ContactForm, ContactStore};
use crate::errors::AppError;
use crate::router;
use crate::views;
use axum::{
    extract::{OriginalUri, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the booking API.
    pub booking: BookingClient,
    /// In-memory contact submissions.
    pub contacts: ContactStore,
    /// Page-view and interaction tracking.
    pub tracker: EventTracker,
}

/// Liveness of this service plus reachability of the booking API.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<serde_json::Value>) {
    let booking_api = state.booking.check_health().await;
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "site-support",
            "version": env!("CARGO_PKG_VERSION"),
            "booking_api": if booking_api { "up" } else { "down" },
        })),
    )
}

/// GET /
///
/// Server-renders the home view with SEO tags and structured data.
pub async fn home(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Html<String>, AppError> {
    let route = router::resolve(uri.path())
        .ok_or_else(|| AppError::InternalError(format!("No route for {}", uri.path())))?;

    let (html, title) = views::render_page(&state.config, route);
    state.tracker.track_page_view(route.path, Some(&title));

    Ok(Html(html))
}

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub booking_date: String,
}

/// GET /api/slots?booking_date=YYYY-MM-DD
pub async fn available_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    if chrono::NaiveDate::parse_from_str(&query.booking_date, "%Y-%m-%d").is_err() {
        return Err(AppError::BadRequest(
            "booking_date must be formatted as YYYY-MM-DD".to_string(),
        ));
    }

    let slots = state.booking.get_available_slots(&query.booking_date).await?;

    Ok(Json(json!({
        "date": query.booking_date,
        "available_slots": slots,
    })))
}

/// POST /api/contact
///
/// Accepts the form immediately; the simulated submission runs in the
/// background.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    for (field, value) in [
        ("name", &form.name),
        ("email", &form.email),
        ("message", &form.message),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!("{} is required", field)));
        }
    }

    let contacts = state.contacts.clone();
    tokio::spawn(async move {
        contacts.submit_form(&form).await;
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "status": "submitting" })),
    ))
}

/// GET /api/contact/status
pub async fn contact_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let submissions = state.contacts.submissions().await.len();
    Json(json!({
        "is_submitting": state.contacts.is_submitting(),
        "last_submission_success": state.contacts.last_submission_success(),
        "submissions": submissions,
    }))
}
