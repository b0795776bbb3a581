//! The timezone plugin: one channel, one method.

use std::sync::Arc;

use crate::channel::messenger::MethodCallHandler;
use crate::channel::method_call::{MethodCall, MethodResponse};
use crate::engine::{EngineContext, EnginePlugin, HandlerHandle};
use crate::services::timezone::TimezoneService;
use crate::utils::logging::{log_method_success, log_method_unsupported, log_system_event};

/// Channel the timezone plugin registers on.
pub const TZ_CHANNEL: &str = "app/tz";

/// The one method served on [`TZ_CHANNEL`].
pub const METHOD_GET_LOCAL_TZ: &str = "getLocalTz";

/// Platform plugin answering `getLocalTz` with the host's local IANA
/// timezone identifier.
#[derive(Debug, Default)]
pub struct TzPlugin {
    service: TimezoneService,
}

impl TzPlugin {
    /// Plugin backed by a live host timezone lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plugin backed by a preconfigured service, e.g. one with a pinned zone.
    pub fn with_service(service: TimezoneService) -> Self {
        Self { service }
    }
}

impl EnginePlugin for TzPlugin {
    fn attach(&self, context: &EngineContext) -> HandlerHandle {
        let handler = Arc::new(TzMethodHandler {
            service: self.service.clone(),
        });
        context.messenger().set_handler(TZ_CHANNEL, handler);
        log_system_event("Timezone plugin attached", Some(TZ_CHANNEL));
        HandlerHandle::new(TZ_CHANNEL)
    }

    fn detach(&self, context: &EngineContext, handle: HandlerHandle) {
        context.messenger().clear_handler(handle.channel());
        log_system_event("Timezone plugin detached", Some(handle.channel()));
    }
}

/// Handler registered by [`TzPlugin::attach`].
struct TzMethodHandler {
    service: TimezoneService,
}

impl MethodCallHandler for TzMethodHandler {
    fn on_method_call(&self, call: &MethodCall) -> MethodResponse {
        if call.method() == METHOD_GET_LOCAL_TZ {
            let zone_id = self.service.local_zone_id();
            log_method_success(TZ_CHANNEL, call.method(), &zone_id);
            MethodResponse::Success(zone_id)
        } else {
            log_method_unsupported(TZ_CHANNEL, call.method());
            MethodResponse::NotImplemented
        }
    }
}
