use anyhow::{anyhow, Result};

/// Zoneless identifiers accepted alongside Region/City names.
const ZONELESS_IDS: [&str; 2] = ["UTC", "GMT"];

/// Checks that `zone_id` is syntactically a valid IANA timezone identifier.
///
/// Accepts either a zoneless alias ("UTC", "GMT") or slash-separated
/// segments of ASCII alphanumerics, underscores, dashes, and plus signs
/// ("Europe/Madrid", "America/Argentina/Buenos_Aires", "Etc/GMT+1"). This is
/// a syntax check only; it does not consult the timezone database.
pub fn validate_zone_id(zone_id: &str) -> Result<()> {
    if zone_id.is_empty() {
        return Err(anyhow!("Timezone identifier cannot be empty"));
    }

    if zone_id.chars().any(char::is_whitespace) {
        return Err(anyhow!("Timezone identifier cannot contain whitespace"));
    }

    if ZONELESS_IDS.contains(&zone_id) {
        return Ok(());
    }

    if !zone_id.contains('/') {
        return Err(anyhow!(
            "Timezone identifier must name a region, got '{}'",
            zone_id
        ));
    }

    for segment in zone_id.split('/') {
        if segment.is_empty() {
            return Err(anyhow!(
                "Timezone identifier cannot contain empty segments"
            ));
        }

        let valid_segment = segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+'));
        if !valid_segment {
            return Err(anyhow!(
                "Invalid character in timezone identifier '{}'",
                zone_id
            ));
        }
    }

    Ok(())
}
