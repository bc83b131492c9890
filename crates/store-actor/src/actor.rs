//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the component that owns one shared
//! state value. It implements the "Server" side of the Actor Model,
//! processing snapshot and dispatch requests sequentially and publishing
//! every committed state to subscribers.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::state::StoreState;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The generic actor that owns a single shared state value.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the committed
/// state, the receiver end of the request channel, and the sender end of the
/// watch channel that carries committed states to subscribers.
///
/// **Concurrency Model**:
/// Many `StoreActor` instances can run at once, but each one applies its own
/// actions *sequentially* in a loop. There is no `Mutex` or `RwLock` around
/// the state; exclusive ownership within the task is the whole locking story.
///
/// # Usage Pattern
///
/// The canonical way to create and wire stores is:
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (reference data, other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use store_actor::{StoreActor, StoreState};
/// use async_trait::async_trait;
///
/// // Minimal state definition
/// #[derive(Clone, Debug)]
/// struct Counter { value: u32 }
///
/// #[derive(Debug)]
/// enum CounterAction { Increment }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("counter error")]
/// struct CounterError;
///
/// #[async_trait]
/// impl StoreState for Counter {
///     type Action = CounterAction;
///     type Context = (); // No dependencies in this example
///     type Error = CounterError;
///
///     async fn apply(&mut self, action: CounterAction, _ctx: &()) -> Result<(), CounterError> {
///         match action {
///             CounterAction::Increment => self.value += 1,
///         }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     // 1. Create
///     let (actor, client) = StoreActor::new(Counter { value: 0 }, 10);
///
///     // 2. Wire & Run
///     tokio::spawn(actor.run(()));
///
///     // 3. Use
///     let state = client.dispatch(CounterAction::Increment).await.unwrap();
///     assert_eq!(state.value, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Snapshot**:
///     1. Clones the committed state.
///     2. Sends the clone back to the caller.
///
/// * **Dispatch** (copy-apply-commit):
///     1. Clones the committed state into a scratch copy.
///     2. Calls [`StoreState::apply`] on the copy with the injected context.
///     3. On `Ok`: commits the copy, publishes it on the watch channel, and
///        responds with the new state.
///     4. On `Err`: discards the copy and responds with
///        [`StoreError::Rejected`]; the committed state and the watch channel
///        are untouched.
///
/// The publication in step 3 happens *before* the response, so by the time a
/// dispatch resolves every subscriber can already observe the new state.
pub struct StoreActor<S: StoreState> {
    receiver: mpsc::Receiver<StoreRequest<S>>,
    state: S,
    publisher: watch::Sender<S>,
}

impl<S: StoreState> StoreActor<S> {
    /// Creates a new `StoreActor` seeded with `initial` and its associated
    /// `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `initial` - The state the store starts with (and the first value
    ///   subscribers observe).
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls on the client will wait until there is space.
    pub fn new(initial: S, buffer_size: usize) -> (Self, StoreClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watch_rx) = watch::channel(initial.clone());
        let actor = Self {
            receiver,
            state: initial,
            publisher,
        };
        let client = StoreClient::new(sender, watch_rx);
        (actor, client)
    }

    /// Runs the store's event loop, processing requests until the channel
    /// closes (i.e. until every client is dropped).
    ///
    /// # Context Injection
    /// The `context` argument is passed to every `apply` call. This allows
    /// states to reach dependencies (like reference data or other clients)
    /// that were created *after* the actor was instantiated but *before* the
    /// loop started.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g., "CartState" instead of "comanda_app::model::cart::CartState")
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                StoreRequest::Dispatch { action, respond_to } => {
                    debug!(state_type, ?action, "Dispatch");
                    let mut next = self.state.clone();
                    match next.apply(action, &context).await {
                        Ok(()) => {
                            self.state = next;
                            // Publish before responding so the dispatcher's
                            // subscribers are never behind its return value.
                            self.publisher.send_replace(self.state.clone());
                            info!(state_type, "Applied");
                            let _ = respond_to.send(Ok(self.state.clone()));
                        }
                        Err(e) => {
                            warn!(state_type, error = %e, "Action rejected");
                            let _ = respond_to.send(Err(StoreError::Rejected(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(state_type, "Shutdown");
    }
}
