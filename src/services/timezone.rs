use tracing::{debug, warn};

use crate::utils::zone_id::validate_zone_id;

/// Identifier reported when the host lookup fails or yields something that
/// is not a syntactically valid zone name.
pub const FALLBACK_ZONE_ID: &str = "UTC";

/// Reads the host's default timezone.
///
/// The lookup is a pure read performed fresh on every call; nothing is
/// cached, so a host reconfiguration is visible on the next request.
#[derive(Debug, Clone, Default)]
pub struct TimezoneService {
    zone_override: Option<String>,
}

impl TimezoneService {
    /// Service that queries the host on every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Service that reports `zone` instead of querying the host.
    ///
    /// Lets shells and tests pin the host configuration to a known value.
    /// The pinned zone still goes through validation, so a malformed value
    /// is reported as [`FALLBACK_ZONE_ID`].
    pub fn with_zone(zone: impl Into<String>) -> Self {
        Self {
            zone_override: Some(zone.into()),
        }
    }

    /// The host's current default IANA timezone identifier, e.g. "Europe/Madrid".
    ///
    /// Always returns a non-empty, syntactically valid identifier.
    pub fn local_zone_id(&self) -> String {
        if let Some(zone) = &self.zone_override {
            return normalize_zone_id(Some(zone.clone()));
        }

        let candidate = match iana_time_zone::get_timezone() {
            Ok(zone) => {
                debug!("Host timezone lookup returned {}", zone);
                Some(zone)
            }
            Err(e) => {
                warn!("Host timezone lookup failed: {}", e);
                None
            }
        };

        normalize_zone_id(candidate)
    }
}

/// Collapses a raw host lookup result into the identifier reported to callers.
///
/// `None` and malformed identifiers both become [`FALLBACK_ZONE_ID`].
pub fn normalize_zone_id(candidate: Option<String>) -> String {
    match candidate {
        Some(zone) => match validate_zone_id(&zone) {
            Ok(()) => zone,
            Err(e) => {
                warn!(
                    "Host reported malformed timezone '{}' ({}), falling back to {}",
                    zone, e, FALLBACK_ZONE_ID
                );
                FALLBACK_ZONE_ID.to_string()
            }
        },
        None => FALLBACK_ZONE_ID.to_string(),
    }
}
