//! Lifecycle seam between a plugin and its hosting application engine.
//!
//! The engine itself is an external collaborator; this module models only
//! what crosses the seam: the registration point handed to an attaching
//! plugin, the opaque handle that stands for one registration, and the
//! attach/detach interface plugins implement.

use std::sync::Arc;

use crate::channel::messenger::ChannelMessenger;

/// What the host engine supplies to an attaching plugin: access to the
/// shared request-dispatch registration point.
#[derive(Default, Clone)]
pub struct EngineContext {
    messenger: Arc<ChannelMessenger>,
}

impl EngineContext {
    /// Creates a context with a fresh, empty messenger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine's channel registration point.
    pub fn messenger(&self) -> &ChannelMessenger {
        &self.messenger
    }
}

/// Opaque token for one channel registration, returned by attach and
/// consumed by detach.
#[derive(Debug)]
pub struct HandlerHandle {
    channel: String,
}

impl HandlerHandle {
    pub(crate) fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    /// The channel this handle's registration lives on.
    pub fn channel(&self) -> &str {
        &self.channel
    }
}

/// Lifecycle interface a plugin exposes to the host engine.
pub trait EnginePlugin {
    /// Binds the plugin's handlers into the engine's messenger.
    ///
    /// Attaching never fails; the only non-success case in this crate is an
    /// unsupported method name at call time.
    fn attach(&self, context: &EngineContext) -> HandlerHandle;

    /// Releases the registration identified by `handle`.
    fn detach(&self, context: &EngineContext, handle: HandlerHandle);
}
