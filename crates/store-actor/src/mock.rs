//! # Mock Stores & Testing Guide
//!
//! The `MockStore<S>` type hands out the same `StoreClient<S>` API as a
//! running actor but answers from scripted expectations held in memory. It
//! lets you set responses and error injections for unit tests, enabling fast,
//! deterministic testing of client wrappers without spawning any stores.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | MockStore | Real Store |
//! |---------|-----------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real copy-apply-commit |
//! | **Use Case** | Unit testing logic *around* the client | Testing the state transitions or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! Three patterns cover store-based systems:
//!
//! 1. **Client Logic Test (Pure Mock)**: script a `MockStore`, wrap its
//!    client in your domain wrapper, assert the wrapper's mapping logic.
//! 2. **Single Store Test**: spawn one real actor with a real context and
//!    drive it through the client; exercises the `apply` transitions.
//! 3. **Full Session Test**: build the whole session (every store plus a
//!    mocked outbound gateway) and walk an end-to-end flow.
//!
//! ### Pattern 1: Client Logic Test
//!
//! ```rust
//! use store_actor::mock::MockStore;
//! use store_actor::{StoreClient, StoreState};
//! use async_trait::async_trait;
//!
//! // --- Define a minimal state for the test ---
//! #[derive(Clone, Debug, PartialEq)]
//! struct Tally { count: u32 }
//!
//! #[derive(Debug)]
//! enum TallyAction { Bump }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("Tally error")]
//! struct TallyError;
//!
//! #[async_trait]
//! impl StoreState for Tally {
//!     type Action = TallyAction;
//!     type Context = ();
//!     type Error = TallyError;
//!     async fn apply(&mut self, action: TallyAction, _: &()) -> Result<(), TallyError> {
//!         match action { TallyAction::Bump => self.count += 1 }
//!         Ok(())
//!     }
//! }
//!
//! // --- Define a minimal client wrapper ---
//! struct TallyClient { client: StoreClient<Tally> }
//! impl TallyClient {
//!     fn new(client: StoreClient<Tally>) -> Self { Self { client } }
//!     async fn bump(&self) -> Result<u32, TallyError> {
//!         let state = self.client.dispatch(TallyAction::Bump).await.map_err(|_| TallyError)?;
//!         Ok(state.count)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Setup mock
//!     let mut mock = MockStore::new(Tally { count: 0 });
//!     mock.expect_dispatch().return_ok(Tally { count: 1 });
//!
//!     // 2. Create client with the mock
//!     let tally_client = TallyClient::new(mock.client());
//!
//!     // 3. Test logic
//!     let count = tally_client.bump().await.unwrap();
//!     assert_eq!(count, 1);
//!     mock.verify();
//! }
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! The biggest advantage of `MockStore` is simulating failures that are hard
//! to reproduce with real actors (a store that already shut down, a rejected
//! action):
//!
//! ```rust
//! use store_actor::mock::MockStore;
//! use store_actor::{StoreError, StoreState};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Tally { count: u32 }
//!
//! #[derive(Debug)]
//! enum TallyAction { Bump }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("Tally error")]
//! struct TallyError;
//!
//! #[async_trait]
//! impl StoreState for Tally {
//!     type Action = TallyAction;
//!     type Context = ();
//!     type Error = TallyError;
//!     async fn apply(&mut self, action: TallyAction, _: &()) -> Result<(), TallyError> {
//!         match action { TallyAction::Bump => self.count += 1 }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::new(Tally { count: 0 });
//!     let client = mock.client();
//!
//!     // Simulate a store that has already shut down
//!     mock.expect_snapshot().return_err(StoreError::StoreClosed);
//!
//!     // Verify your code handles it gracefully
//!     let result = client.snapshot().await;
//!     assert!(matches!(result, Err(StoreError::StoreClosed)));
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a raw request receiver, or
//! use the fluent [`MockStore`] API.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::state::StoreState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock store.
///
/// This enum is used internally by `MockStore` to track what requests are
/// expected and what responses should be returned.
enum Expectation<S: StoreState> {
    Snapshot {
        response: Result<S, StoreError>,
    },
    Dispatch {
        response: Result<S, StoreError>,
    },
}

/// A mock store with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockStore::new(CartState::default());
/// mock.expect_dispatch().return_ok(cart_with_one_line);
/// mock.expect_snapshot().return_ok(cart_with_one_line);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockStore<S: StoreState> {
    client: StoreClient<S>,
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
    // Keeps subscribe() receivers connected for the mock's lifetime.
    _publisher: watch::Sender<S>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: StoreState + Default> Default for MockStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: StoreState> MockStore<S> {
    /// Creates a new mock store with no expectations.
    ///
    /// `seed` is the value handed to subscribers; the mock never updates it.
    pub fn new(seed: S) -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<S>>(100);
        let (publisher, watch_rx) = watch::channel(seed);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut exps = expectations_clone.lock().unwrap();
                let expectation = exps.pop_front();
                drop(exps); // Release lock before async operations

                match (request, expectation) {
                    (
                        StoreRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Dispatch {
                            action: _,
                            respond_to,
                        },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender, watch_rx),
            expectations,
            _publisher: publisher,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<S> {
        self.client.clone()
    }

    /// Expects a `snapshot` operation.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<S> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `dispatch` operation.
    pub fn expect_dispatch(&mut self) -> DispatchExpectationBuilder<S> {
        DispatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<S: StoreState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: StoreState> SnapshotExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, state: S) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Ok(state),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Err(error),
        });
    }
}

/// Builder for `dispatch` expectations.
pub struct DispatchExpectationBuilder<S: StoreState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: StoreState> DispatchExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, state: S) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch {
            response: Ok(state),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch {
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit tests we don't want to spin up a full `StoreActor` if we are just
/// testing the *client* logic (e.g., a `CartClient` wrapper).
///
/// Instead, we create a "mock client". This client sends messages to a
/// channel we control (`receiver`). We can then inspect the messages arriving
/// on that channel and assert they are correct, responding with whatever the
/// scenario needs (success, rejection, silence).
///
/// The returned `watch::Sender` seeds `subscribe()`; keep it bound (even as
/// `_publisher`) for as long as a test reads from a subscription.
///
/// **Note**: Consider using [`MockStore`] for a more fluent API.
pub fn create_mock_client<S: StoreState>(
    seed: S,
    buffer_size: usize,
) -> (
    StoreClient<S>,
    mpsc::Receiver<StoreRequest<S>>,
    watch::Sender<S>,
) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (publisher, watch_rx) = watch::channel(seed);
    (StoreClient::new(sender, watch_rx), receiver, publisher)
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<tokio::sync::oneshot::Sender<Result<S, StoreError>>> {
    match receiver.recv().await {
        Some(StoreRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<S: StoreState>(
    receiver: &mut mpsc::Receiver<StoreRequest<S>>,
) -> Option<(
    S::Action,
    tokio::sync::oneshot::Sender<Result<S, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StoreState;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq, Default)]
    struct Banner {
        text: String,
    }

    #[derive(Debug)]
    enum BannerAction {
        SetText(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Banner error")]
    struct BannerError;

    #[async_trait]
    impl StoreState for Banner {
        type Action = BannerAction;
        type Context = ();
        type Error = BannerError;

        async fn apply(&mut self, action: BannerAction, _ctx: &()) -> Result<(), BannerError> {
            match action {
                BannerAction::SetText(text) => self.text = text,
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver, _publisher) = create_mock_client::<Banner>(Banner::default(), 10);

        // Test Dispatch
        let dispatch_task = tokio::spawn(async move {
            client
                .dispatch(BannerAction::SetText("hello".to_string()))
                .await
        });

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        let BannerAction::SetText(text) = action;
        assert_eq!(text, "hello");
        responder
            .send(Ok(Banner {
                text: "hello".to_string(),
            }))
            .unwrap();

        let result = dispatch_task.await.unwrap();
        assert!(matches!(result, Ok(banner) if banner.text == "hello"));
    }

    #[tokio::test]
    async fn test_mock_store_with_expectations() {
        // Create mock with fluent expectation API
        let mut mock = MockStore::<Banner>::default();

        // Set up expectations
        mock.expect_dispatch().return_ok(Banner {
            text: "hello".to_string(),
        });
        mock.expect_snapshot().return_ok(Banner {
            text: "hello".to_string(),
        });

        let client = mock.client();

        // Execute operations
        let updated = client
            .dispatch(BannerAction::SetText("hello".to_string()))
            .await
            .unwrap();
        assert_eq!(updated.text, "hello");

        let fetched = client.snapshot().await.unwrap();
        assert_eq!(fetched.text, "hello");

        // Verify all expectations were met
        mock.verify();
    }
}
