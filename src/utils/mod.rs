pub mod logging;
pub mod zone_id;
