//! # Timezone Service
//!
//! A small HTTP service that lets clients pick a timezone per user and ask
//! for that user's current wall-clock time.
//!
//! ## Features
//! - Fixed catalog of selectable timezones, chosen by display label
//! - In-memory registry of user choices, safe for concurrent requests
//! - Current time rendered as RFC 3339 with the offset in effect right now
//! - Health and liveness endpoints

/// The static list of selectable timezones
pub mod catalog;
/// Configuration management and environment variables
pub mod config;
/// In-memory user to timezone mapping
pub mod registry;
/// HTTP routes, handlers and shared state
pub mod services;
/// Utility functions for datetime handling and logging
pub mod utils;
