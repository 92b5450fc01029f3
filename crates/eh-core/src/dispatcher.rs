//! Dispatcher feeds actions back into the store
//!
//! Cloneable and usable from any thread or task. Actions are queued on the
//! store's channel and processed in arrival order by the store loop.

use crate::actions::Action;
use std::time::Duration;
use tokio::sync::mpsc;

/// Handle for queueing actions onto the store loop
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { tx }
    }

    /// Dispatch an action
    ///
    /// Fire-and-forget; the action is processed in a later loop iteration.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::error!("Failed to dispatch action: {}", e);
        }
    }

    /// Dispatch an action once `delay` has passed
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch_after(&self, delay: Duration, action: Action) {
        let dispatcher = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            dispatcher.dispatch(action);
        });
    }
}
