//! # Local Timezone Plugin Shell
//!
//! Stand-in for the hosting application engine. It initializes logging,
//! attaches the timezone plugin to an engine context, serves one
//! `getLocalTz` request plus one unsupported request, and detaches.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use local_tz_plugin::channel::method_call::MethodCall;
use local_tz_plugin::engine::{EngineContext, EnginePlugin};
use local_tz_plugin::plugin::{TzPlugin, METHOD_GET_LOCAL_TZ, TZ_CHANNEL};
use local_tz_plugin::utils::logging::log_system_event;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "local_tz_plugin=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    info!("Starting local timezone plugin shell v{}", env!("CARGO_PKG_VERSION"));

    let context = EngineContext::new();
    let plugin = TzPlugin::new();
    let handle = plugin.attach(&context);

    let response = context
        .messenger()
        .invoke(TZ_CHANNEL, &MethodCall::new(METHOD_GET_LOCAL_TZ));
    match response.value() {
        Some(zone_id) => info!("Host timezone: {}", zone_id),
        None => info!("Host timezone query is not supported by this channel"),
    }

    // An unknown method is a capability miss, not an error
    let unsupported = context
        .messenger()
        .invoke(TZ_CHANNEL, &MethodCall::new("getRemoteTz"));
    info!(
        "getRemoteTz supported: {}",
        !unsupported.is_not_implemented()
    );

    plugin.detach(&context, handle);
    log_system_event("Shell finished", None);
}
