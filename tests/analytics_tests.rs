/// Event tracker tests against a recording sink
use serde_json::{json, Map, Value};
use site_support::analytics::{
    BookingAction, ContactMethod, Event, EventTracker, RecordingSink, TechnologyAction,
};
use std::sync::Arc;

fn tracker() -> (EventTracker, RecordingSink) {
    let sink = RecordingSink::new();
    (EventTracker::new(Arc::new(sink.clone())), sink)
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {}", other),
    }
}

#[test]
fn test_booking_events_are_namespaced() {
    let (tracker, sink) = tracker();

    tracker.track_booking_event(
        BookingAction::ModalOpened,
        Some(object(json!({"source": "hero"}))),
    );
    tracker.track_booking_event(BookingAction::DateSelected, None);
    tracker.track_booking_event(BookingAction::TimeSelected, None);
    tracker.track_booking_event(BookingAction::Submitted, None);
    tracker.track_booking_event(BookingAction::Completed, None);

    let events = sink.events();
    assert_eq!(
        events[0],
        Event {
            name: "booking_modal_opened".to_string(),
            params: object(json!({"event_category": "booking", "source": "hero"})),
        }
    );
    let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "booking_modal_opened",
            "booking_date_selected",
            "booking_time_selected",
            "booking_submitted",
            "booking_completed",
        ]
    );
}

#[test]
fn test_engagement_helpers() {
    let (tracker, sink) = tracker();

    tracker.track_cta("hero", None);
    tracker.track_cta("pricing", Some("Book a call"));
    tracker.track_scroll_depth(75);
    tracker.track_technology("Docker", TechnologyAction::Click);
    tracker.track_contact(ContactMethod::Email);

    let events = sink.events();
    assert_eq!(events.len(), 5);
    assert_eq!(
        events[0].params,
        object(json!({"event_category": "engagement", "event_label": "hero", "location": "hero"}))
    );
    assert_eq!(events[1].params["event_label"], json!("Book a call"));
    assert_eq!(events[2].name, "scroll_depth");
    assert_eq!(events[2].params["percent"], json!(75));
    assert_eq!(
        events[3].params,
        object(json!({"event_category": "engagement", "technology": "Docker", "action": "click"}))
    );
    assert_eq!(events[4].name, "contact_clicked");
    assert_eq!(events[4].params["method"], json!("email"));
}

#[test]
fn test_events_without_params_send_empty_object() {
    let (tracker, sink) = tracker();

    tracker.track_event("newsletter_opened", None);

    assert_eq!(sink.events()[0].params, Map::new());
}

#[test]
fn test_page_view_params() {
    let (tracker, sink) = tracker();

    tracker.track_page_view("/#faq", Some("FAQ"));

    assert_eq!(
        sink.events(),
        vec![Event {
            name: "page_view".to_string(),
            params: object(json!({"page_path": "/#faq", "page_title": "FAQ"})),
        }]
    );
}
