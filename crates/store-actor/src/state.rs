//! # StoreState Trait
//!
//! The `StoreState` trait defines the contract that every shared state value
//! (cart, form draft, route, …) must implement to be owned by a generic
//! `StoreActor`. It specifies associated types for actions, context, and
//! errors, plus the single transition hook `apply`. Implementing this trait
//! gives any domain value a uniform dispatch/snapshot/subscribe API.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any shared state value must implement to be owned by a
/// [`StoreActor`](crate::StoreActor).
///
/// # Architecture Note
/// By defining one contract for all shared state (cart, checkout draft,
/// route), the actor run loop is written *once* and reused everywhere. The
/// associated `Action` type keeps the contract safe: a cart store only accepts
/// cart actions, and the compiler rejects anything else.
///
/// # Async & Context
/// The trait is `#[async_trait]` so that transitions can await other stores or
/// services. The `Context` type is injected into every `apply` call, allowing
/// "late binding" of dependencies (passing them to `run()` instead of `new()`).
#[async_trait]
pub trait StoreState: Clone + Debug + Send + Sync + 'static {
    /// Enum of the mutations this store accepts (e.g. `Add`, `Clear`).
    type Action: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the store.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for rejected actions.
    /// Must implement std::error::Error for proper error propagation.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum covers the whole store rather than one type per action.
    /// Clients then deal with a single error type, and a store with ten
    /// actions does not need ten enums. The trade-off is that the type is the
    /// union of everything the store can reject, even for actions that cannot
    /// fail; a store whose actions never fail can use
    /// `std::convert::Infallible`.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply one action to the state.
    ///
    /// The actor calls this on a *copy* of the committed state. Returning
    /// `Ok(())` commits and publishes the copy; returning `Err` discards it,
    /// so a failed action never leaves a half-applied value behind.
    async fn apply(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
