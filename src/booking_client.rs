use crate::booking_models::{
    ApiErrorBody, AvailableSlotsResponse, BookingData, BookingResponse, SurveyData, SurveyResponse,
};
use crate::errors::BookingError;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Client for the booking and survey REST API.
///
/// Every call is a single attempt with no retry, timeout or cancellation,
/// and returns its own outcome. Nothing is shared between calls, so
/// overlapping requests through one client cannot clobber each other.
#[derive(Clone)]
pub struct BookingClient {
    client: Client,
    base_url: String,
}

impl BookingClient {
    /// Creates a new `BookingClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API origin, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, BookingError> {
        let client = Client::builder()
            .user_agent(concat!("site-support/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                BookingError::Transport(format!("Failed to create booking client: {}", e))
            })?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates a booking, or updates the caller's upcoming one.
    ///
    /// # Returns
    ///
    /// * `Result<BookingResponse, BookingError>` - The persisted booking and
    ///   whether it was `created` or `updated`.
    pub async fn create_booking(&self, data: &BookingData) -> Result<BookingResponse, BookingError> {
        let url = format!("{}/api/bookings/", self.base_url);
        tracing::info!(
            "Submitting booking for {} on {} {}",
            data.email,
            data.booking_date,
            data.booking_time
        );

        let result: Result<BookingResponse, BookingError> =
            self.post_json(&url, data, "Failed to create booking").await;

        match &result {
            Ok(created) => tracing::info!(
                "✓ Booking {} {:?}",
                created.booking.id,
                created.action
            ),
            Err(e) => tracing::error!("Booking error: {}", e),
        }
        result
    }

    /// Lists the free slots for `date` (ISO `YYYY-MM-DD`).
    ///
    /// Callers that only need the list can use `unwrap_or_default()`.
    pub async fn get_available_slots(&self, date: &str) -> Result<Vec<String>, BookingError> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/api/bookings/available-slots", self.base_url),
            &[("booking_date", date)],
        )
        .map_err(|e| BookingError::Transport(format!("Failed to build URL: {}", e)))?;
        tracing::debug!("Fetching available slots: {}", url);

        // The slots endpoint's error body is not surfaced to users.
        let result: Result<AvailableSlotsResponse, BookingError> =
            self.get_json(url, "Failed to fetch available slots").await;

        match result {
            Ok(slots) => Ok(slots.available_slots),
            Err(e) => {
                tracing::error!("Error fetching available slots: {}", e);
                Err(e)
            }
        }
    }

    /// Submits the qualification survey for a booking.
    pub async fn submit_survey(&self, data: &SurveyData) -> Result<SurveyResponse, BookingError> {
        let url = format!("{}/api/surveys", self.base_url);
        tracing::info!("Submitting survey for booking {}", data.booking_id);

        let result: Result<SurveyResponse, BookingError> =
            self.post_json(&url, data, "Failed to submit survey").await;

        if let Err(e) = &result {
            tracing::error!("Survey submission error: {}", e);
        }
        result
    }

    async fn post_json<B, T>(&self, url: &str, body: &B, fallback: &str) -> Result<T, BookingError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(url).json(body).send().await?;
        let response = ensure_success(response, fallback, true).await?;
        decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: reqwest::Url,
        fallback: &str,
    ) -> Result<T, BookingError> {
        let response = self.client.get(url).send().await?;
        let response = ensure_success(response, fallback, false).await?;
        decode(response).await
    }

    /// `true` when `GET /health` answers with a 2xx status; every failure is
    /// reported as `false`.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::error!("Health check failed: {}", e);
                false
            }
        }
    }
}

/// Turns a non-success response into `BookingError::Api`, using the body's
/// `detail` when `read_detail` is set and the body carries one.
async fn ensure_success(
    response: Response,
    fallback: &str,
    read_detail: bool,
) -> Result<Response, BookingError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = if read_detail {
        response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail_text())
    } else {
        None
    };

    Err(BookingError::Api {
        status: status.as_u16(),
        detail: detail.unwrap_or_else(|| fallback.to_string()),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BookingError> {
    response
        .json::<T>()
        .await
        .map_err(|e| BookingError::Decode(format!("Failed to parse booking API response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_trims_trailing_slash() {
        let client = BookingClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
