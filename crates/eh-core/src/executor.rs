//! Command executors
//!
//! The store hands every command to a `CommandExecutor`. The executor runs
//! it off the store loop and dispatches the resulting `Done` action exactly
//! once.

use eh_client::GalleryClient;
use std::sync::Arc;

use crate::commands::Command;
use crate::dispatcher::Dispatcher;

pub trait CommandExecutor: Send + Sync {
    /// Start `command`; must not block the caller
    fn execute(&self, command: Command, dispatcher: Dispatcher);
}

/// Runs commands against a gallery client on spawned tokio tasks
pub struct ClientExecutor {
    client: Arc<dyn GalleryClient>,
}

impl ClientExecutor {
    pub fn new(client: Arc<dyn GalleryClient>) -> Self {
        Self { client }
    }
}

impl CommandExecutor for ClientExecutor {
    fn execute(&self, command: Command, dispatcher: Dispatcher) {
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            let action = command.run(client.as_ref()).await;
            dispatcher.dispatch(action);
        });
    }
}
