use tracing::{debug, info, warn};

/// Logs an incoming method call with consistent format
pub fn log_method_call(channel: &str, method: &str) {
    debug!("METHOD_CALL: {} on channel {}", method, channel);
}

/// Logs a served method call with consistent format
pub fn log_method_success(channel: &str, method: &str, value: &str) {
    info!("METHOD_SUCCESS: {} on channel {} -> {}", method, channel, value);
}

/// Logs an unsupported method call with consistent format
pub fn log_method_unsupported(channel: &str, method: &str) {
    warn!("METHOD_UNSUPPORTED: {} on channel {}", method, channel);
}

/// Logs plugin lifecycle and shell events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
