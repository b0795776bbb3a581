//! # Local Timezone Plugin
//!
//! A platform plugin that exposes the host operating system's local IANA
//! timezone identifier to a hosting application engine via a single method call.
//!
//! ## Features
//! - Answers the `getLocalTz` method with the host's default timezone id (e.g. "Europe/Madrid")
//! - Explicit not-implemented signal for any other method name
//! - Attach/detach lifecycle against the engine's channel messenger
//! - Falls back to "UTC" when the host lookup fails or reports a malformed id

/// Method-call types, handler trait, and the engine's channel messenger
pub mod channel;
/// Lifecycle seam between plugins and the hosting application engine
pub mod engine;
/// The timezone plugin and its channel contract
pub mod plugin;
/// Host timezone lookup service
pub mod services;
/// Utility functions for identifier validation and logging
pub mod utils;
