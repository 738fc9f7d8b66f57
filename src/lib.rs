//! Site Support Library
//!
//! The support layer behind the marketing site: analytics event tracking,
//! document head metadata (SEO tags and JSON-LD), the booking/survey API
//! client and the in-memory contact store, plus the HTTP surface that
//! server-renders the site.
//!
//! # Modules
//!
//! - `api`: Route table for the HTTP surface.
//! - `integrations`: External service integrations.
//! - `analytics`: Event tracking through pluggable reporting sinks.
//! - `booking_client`: Booking and survey API client.
//! - `booking_models`: Booking API request/response models.
//! - `config`: Configuration management.
//! - `contact`: In-memory contact form store.
//! - `document`: In-memory document head model.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `router`: Static routes and scroll behaviour.
//! - `seo`: Head metadata manager.
//! - `structured_data`: JSON-LD schemas for the site.
//! - `views`: Server-rendered pages.

pub mod api;
pub mod integrations;

pub mod analytics;
pub mod booking_client;
pub mod booking_models;
pub mod config;
pub mod contact;
pub mod document;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod seo;
pub mod structured_data;
pub mod views;
