//! # Generic Messages
//!
//! This module defines the generic message types used for communication
//! between the `StoreClient` and `StoreActor`.

use crate::error::StoreError;
use crate::state::StoreState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by store actors.
pub type Response<S> = oneshot::Sender<Result<S, StoreError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The Store Pattern
/// A store offers exactly two operations, mirroring how shared UI state is
/// consumed: read the current value, or dispatch a typed action at it.
///
/// - **Snapshot**: Retrieval. Returns a clone of the committed state.
/// - **Dispatch**: Mutation. Applies one [`StoreState::Action`] and returns
///   the state after the commit, so the caller continues with the exact value
///   its action produced.
///
/// # State Interaction
/// The enum is generic over `S: StoreState` and uses the associated `Action`
/// type for type safety: a request built for one store cannot be sent to
/// another.
#[derive(Debug)]
pub enum StoreRequest<S: StoreState> {
    Snapshot {
        respond_to: Response<S>,
    },
    Dispatch {
        action: S::Action,
        respond_to: Response<S>,
    },
}
