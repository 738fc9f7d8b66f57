//! Analytics event tracking.
//!
//! Events are fire-and-forget: the tracker hands them to a [`ReportingSink`]
//! when one is installed and drops them (with a warning) otherwise. Nothing is
//! queued, so an event tracked before the sink is installed is lost.

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::sync::{Arc, Mutex};

/// Event parameters, as handed to the analytics provider.
pub type EventParams = Map<String, Value>;

/// Destination for tracked events.
pub trait ReportingSink: Send + Sync {
    fn report(&self, name: &str, params: &EventParams);
}

/// A single tracked event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub name: String,
    pub params: EventParams,
}

/// Step of the booking funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    ModalOpened,
    DateSelected,
    TimeSelected,
    Submitted,
    Completed,
}

impl BookingAction {
    pub fn event_name(self) -> &'static str {
        match self {
            BookingAction::ModalOpened => "booking_modal_opened",
            BookingAction::DateSelected => "booking_date_selected",
            BookingAction::TimeSelected => "booking_time_selected",
            BookingAction::Submitted => "booking_submitted",
            BookingAction::Completed => "booking_completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechnologyAction {
    View,
    Click,
}

impl TechnologyAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TechnologyAction::View => "view",
            TechnologyAction::Click => "click",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    Linkedin,
    Phone,
}

impl ContactMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Linkedin => "linkedin",
            ContactMethod::Phone => "phone",
        }
    }
}

/// Tracks site events through an optional reporting sink.
#[derive(Clone)]
pub struct EventTracker {
    sink: Option<Arc<dyn ReportingSink>>,
    default_page_title: String,
}

impl EventTracker {
    pub fn new(sink: Arc<dyn ReportingSink>) -> Self {
        Self {
            sink: Some(sink),
            default_page_title: String::new(),
        }
    }

    /// A tracker with no sink installed; every event is dropped.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            default_page_title: String::new(),
        }
    }

    /// Title reported by [`track_page_view`](Self::track_page_view) when the
    /// caller gives none.
    pub fn with_default_page_title(mut self, title: impl Into<String>) -> Self {
        self.default_page_title = title.into();
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Track a custom event.
    pub fn track_event(&self, name: &str, params: Option<EventParams>) {
        match &self.sink {
            Some(sink) => sink.report(name, &params.unwrap_or_default()),
            None => tracing::warn!("Analytics sink not loaded, dropping event '{}'", name),
        }
    }

    /// Track a page view. Unlike the other helpers this stays quiet when no
    /// sink is installed, since it fires on every render.
    pub fn track_page_view(&self, page_path: &str, page_title: Option<&str>) {
        let Some(sink) = &self.sink else {
            return;
        };

        let title = page_title
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.default_page_title);
        let params = params([
            ("page_path", json!(page_path)),
            ("page_title", json!(title)),
        ]);
        sink.report("page_view", &params);
    }

    /// Track a booking funnel step. Metadata keys override the category.
    pub fn track_booking_event(&self, action: BookingAction, metadata: Option<EventParams>) {
        let mut event = params([("event_category", json!("booking"))]);
        if let Some(metadata) = metadata {
            event.extend(metadata);
        }
        self.track_event(action.event_name(), Some(event));
    }

    pub fn track_cta(&self, location: &str, label: Option<&str>) {
        let label = label.filter(|l| !l.is_empty()).unwrap_or(location);
        self.track_event(
            "cta_clicked",
            Some(params([
                ("event_category", json!("engagement")),
                ("event_label", json!(label)),
                ("location", json!(location)),
            ])),
        );
    }

    pub fn track_scroll_depth(&self, percent: u8) {
        self.track_event(
            "scroll_depth",
            Some(params([
                ("event_category", json!("engagement")),
                ("percent", json!(percent)),
            ])),
        );
    }

    pub fn track_technology(&self, technology: &str, action: TechnologyAction) {
        self.track_event(
            "technology_interaction",
            Some(params([
                ("event_category", json!("engagement")),
                ("technology", json!(technology)),
                ("action", json!(action.as_str())),
            ])),
        );
    }

    pub fn track_contact(&self, method: ContactMethod) {
        self.track_event(
            "contact_clicked",
            Some(params([
                ("event_category", json!("engagement")),
                ("method", json!(method.as_str())),
            ])),
        );
    }
}

fn params<const N: usize>(entries: [(&str, Value); N]) -> EventParams {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Pushes events onto a shared data layer in the gtag command shape
/// `["event", name, params]`.
#[derive(Clone, Default)]
pub struct DataLayerSink {
    layer: Arc<Mutex<Vec<Value>>>,
}

impl DataLayerSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything pushed so far.
    pub fn entries(&self) -> Vec<Value> {
        match self.layer.lock() {
            Ok(layer) => layer.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ReportingSink for DataLayerSink {
    fn report(&self, name: &str, params: &EventParams) {
        let entry = json!(["event", name, params]);
        match self.layer.lock() {
            Ok(mut layer) => layer.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

/// Emits each event as a structured log line.
pub struct TracingSink;

impl ReportingSink for TracingSink {
    fn report(&self, name: &str, params: &EventParams) {
        let payload = Value::Object(params.clone());
        tracing::info!(event = name, params = %payload, "analytics event");
    }
}

/// Keeps every reported event in memory, in order.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ReportingSink for RecordingSink {
    fn report(&self, name: &str, params: &EventParams) {
        let event = Event {
            name: name.to_string(),
            params: params.clone(),
        };
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
