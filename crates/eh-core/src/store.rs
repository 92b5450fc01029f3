use eh_client::GalleryClient;
use eh_config::{AppConfig, JsonFileStore, Persistence, PersistenceError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, watch};

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::effect::{Context, Effect};
use crate::executor::{ClientExecutor, CommandExecutor};
use crate::middleware::{LoggingMiddleware, Middleware};
use crate::reducer::reduce;
use crate::state::AppState;

/// Unrecoverable failures of the dispatch loop
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("persistence write failed: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Store - holds application state and runs the dispatch loop
///
/// Every action goes through the middleware chain, then the reducer. The new
/// state is committed and published before any effect runs:
///
/// ```text
/// dispatch ─▶ channel ─▶ middleware ─▶ reduce ─▶ commit ─▶ publish ─▶ effects
///    ▲                                                                  │
///    └────────────── Done actions, follow-ups, delayed retries ─────────┘
/// ```
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    receiver: mpsc::UnboundedReceiver<Action>,
    persistence: Arc<dyn Persistence>,
    executor: Arc<dyn CommandExecutor>,
    state_tx: watch::Sender<AppState>,
    gap_skip_delay: Duration,
}

impl Store {
    pub fn new(
        initial_state: AppState,
        persistence: Arc<dyn Persistence>,
        executor: Arc<dyn CommandExecutor>,
        gap_skip_delay: Duration,
    ) -> Self {
        let (tx, receiver) = mpsc::unbounded_channel();
        let (state_tx, _) = watch::channel(initial_state.clone());
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(tx),
            receiver,
            persistence,
            executor,
            state_tx,
            gap_skip_delay,
        }
    }

    /// Production store: JSON file persistence, network executor and logging
    pub fn from_config(config: &AppConfig, client: Arc<dyn GalleryClient>) -> anyhow::Result<Self> {
        let path = config.store_path()?;
        log::info!(
            "Opening store at {} for host {}",
            path.display(),
            config.gallery_host
        );
        let persistence = Arc::new(JsonFileStore::open(path)?);
        let state = AppState::load(persistence.as_ref());

        let mut store = Self::new(
            state,
            persistence,
            Arc::new(ClientExecutor::new(client)),
            config.gap_skip_delay(),
        );
        store.add_middleware(LoggingMiddleware::new());
        Ok(store)
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Receive every committed state
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state_tx.subscribe()
    }

    /// Process an action through middleware chain and reducer, then apply
    /// the resulting effects
    pub fn process(&mut self, action: Action) -> Result<(), StoreError> {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return Ok(());
            }
        }

        let ctx = Context::new(self.persistence.as_ref(), self.gap_skip_delay);
        let (new_state, effects) = reduce(self.state.clone(), &action, &ctx);
        self.state = new_state;
        self.state_tx.send_replace(self.state.clone());

        for effect in effects {
            self.apply(effect)?;
        }
        Ok(())
    }

    fn apply(&self, effect: Effect) -> Result<(), StoreError> {
        match effect {
            Effect::Command(command) => {
                log::trace!("Command: {:?}", command);
                self.executor.execute(command, self.dispatcher.clone());
            }
            Effect::Persist(op) => op.apply(self.persistence.as_ref())?,
            Effect::Dispatch(action) => self.dispatcher.dispatch(action),
            Effect::DispatchAfter { delay, action } => {
                self.dispatcher.dispatch_after(delay, action)
            }
        }
        Ok(())
    }

    /// Wait for the next queued action and process it
    ///
    /// Returns `false` once no more actions can arrive.
    pub async fn step(&mut self) -> Result<bool, StoreError> {
        match self.receiver.recv().await {
            Some(action) => {
                self.process(action)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Run the dispatch loop until `Action::Quit` was processed
    ///
    /// Returns the final state, or the first persistence failure.
    pub async fn run(mut self) -> Result<AppState, StoreError> {
        log::info!("Dispatch loop started");
        while self.state.running {
            if !self.step().await? {
                break;
            }
        }
        log::info!("Dispatch loop stopped");
        Ok(self.state)
    }
}
