use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::channel::method_call::{MethodCall, MethodResponse};
use crate::utils::logging::{log_method_call, log_method_unsupported};

/// A handler bound to one channel of the messenger.
///
/// Handlers may be invoked from any thread, so implementations must be pure
/// reads or synchronize internally.
pub trait MethodCallHandler: Send + Sync {
    /// Serves one incoming call on the handler's channel.
    fn on_method_call(&self, call: &MethodCall) -> MethodResponse;
}

/// The host engine's request-dispatch registration point.
///
/// Channels are identified by name. At most one handler is bound per channel;
/// binding again replaces the previous handler.
#[derive(Default)]
pub struct ChannelMessenger {
    handlers: RwLock<HashMap<String, Arc<dyn MethodCallHandler>>>,
}

impl ChannelMessenger {
    /// Creates a messenger with no channels bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` to `channel`, replacing any existing binding.
    pub fn set_handler(&self, channel: &str, handler: Arc<dyn MethodCallHandler>) {
        let previous = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(channel.to_string(), handler);
        if previous.is_some() {
            tracing::debug!("Replaced existing handler on channel {}", channel);
        }
    }

    /// Removes the binding for `channel`. Idempotent.
    pub fn clear_handler(&self, channel: &str) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(channel);
    }

    /// True if a handler is currently bound to `channel`.
    pub fn has_handler(&self, channel: &str) -> bool {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(channel)
    }

    /// Routes `call` to the handler bound to `channel`.
    ///
    /// A channel with no handler responds `NotImplemented`, the same signal a
    /// handler gives for an unknown method name, so callers see one
    /// capability-miss shape either way.
    pub fn invoke(&self, channel: &str, call: &MethodCall) -> MethodResponse {
        log_method_call(channel, call.method());

        let handler = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(channel)
            .cloned();

        match handler {
            Some(handler) => handler.on_method_call(call),
            None => {
                log_method_unsupported(channel, call.method());
                MethodResponse::NotImplemented
            }
        }
    }
}
