//! Mock HTTP backends used as test fixtures for edge-proxy filtering demos.
//!
//! Two independent server instances share this library: the edge-security
//! backend serves PII bait payloads for scrubbing demos, and the
//! smart-router backend serves versioned v1/v2 payloads for A/B routing
//! demos. Every route returns a fixed JSON document, optionally echoing
//! request-derived fields.

pub mod api_doc;
pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
