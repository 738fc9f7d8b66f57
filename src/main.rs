use site_support::analytics::{EventTracker, TracingSink};
use site_support::api::build_router;
use site_support::booking_client::BookingClient;
use site_support::config::Config;
use site_support::contact::ContactStore;
use site_support::handlers::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, wires the booking client,
/// contact store and event tracker into the shared state, then serves the
/// site over HTTP.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_support=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let booking = BookingClient::new(config.api_url.clone())?;
    if booking.check_health().await {
        tracing::info!("✓ Booking API reachable at {}", config.api_url);
    } else {
        tracing::warn!(
            "Booking API at {} is not reachable yet, continuing",
            config.api_url
        );
    }

    let tracker = if config.analytics_enabled {
        EventTracker::new(Arc::new(TracingSink))
    } else {
        EventTracker::disabled()
    }
    .with_default_page_title(config.site_name.clone());

    let contacts = ContactStore::new(
        config.contact_submit_delay(),
        config.contact_success_reset(),
    );

    let app_state = Arc::new(AppState {
        config: config.clone(),
        booking,
        contacts,
        tracker,
    });

    let app = build_router(app_state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
