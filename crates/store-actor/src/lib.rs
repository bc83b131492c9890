//! # Store Actor
//!
//! This crate provides the building blocks for managing shared UI state as
//! actors in Rust. It implements the **store pattern** (one owner per piece of
//! shared state, mutations expressed as dispatched actions) on top of the
//! **Actor Model**, so that views read consistent snapshots while events flow
//! through typed, sequential mutation points.
//!
//! ## Why Stores + Actor Model?
//!
//! Component UIs share state through providers: a cart, a form draft, a route.
//! Every consumer reads the same value, and every mutation funnels through one
//! dispatcher. Translating that shape to Rust, the natural owner of each store
//! is an actor:
//!
//! ### The Store Pattern
//!
//! - One value per store, read as immutable snapshots
//! - Mutations are typed actions, never direct field writes
//! - Consumers subscribe and re-render when the value changes
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates race conditions
//!
//! ### The Synergy
//!
//! - **Ownership**: each store (cart, checkout draft, route) gets its own
//!   actor with completely isolated state
//! - **One-directional flow**: events are dispatched up through a client,
//!   committed states are published down a watch channel
//! - **Atomic commits**: an action is applied to a copy of the state; a
//!   rejected action leaves the committed value and every subscriber untouched
//! - **Maintainability**: a new store is one trait impl, not a new channel
//!   protocol
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model) - Foundational concurrency pattern by Carl Hewitt
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **State Layer** ([`StoreState`]) - Your domain value and how actions change it
//! 2. **Runtime Layer** ([`StoreActor`]) - Message processing and publication
//! 3. **Interface Layer** ([`StoreClient`]) - Type-safe dispatch and snapshots
//!
//! You write the state transition **once** in the trait impl, and the crate
//! handles the async message passing, error propagation, and change
//! notification.
//!
//! ## Core Abstractions
//!
//! ### [`StoreState`] - The State Transition
//!
//! Define what the store holds and how actions change it:
//!
//! ```rust
//! use store_actor::{StoreActor, StoreState};
//! use async_trait::async_trait;
//!
//! // 1. Define the state
//! #[derive(Clone, Debug)]
//! struct Panel {
//!     open: bool,
//! }
//!
//! #[derive(Debug)]
//! enum PanelAction {
//!     Open,
//!     Close,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("panel error")]
//! struct PanelError;
//!
//! #[async_trait]
//! impl StoreState for Panel {
//!     type Action = PanelAction;
//!     type Context = ();
//!     type Error = PanelError;
//!
//!     async fn apply(&mut self, action: PanelAction, _ctx: &()) -> Result<(), PanelError> {
//!         match action {
//!             PanelAction::Open => self.open = true,
//!             PanelAction::Close => self.open = false,
//!         }
//!         Ok(())
//!     }
//! }
//!
//! // 2. Run the store
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::new(Panel { open: false }, 10);
//!     tokio::spawn(actor.run(()));
//!
//!     let state = client.dispatch(PanelAction::Open).await.unwrap();
//!     assert!(state.open);
//!
//!     let snapshot = client.snapshot().await.unwrap();
//!     assert!(snapshot.open);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies (reference data, other clients) are injected at **runtime**
//! via the `run()` method, not at construction time. A store that needs a
//! catalog to price its actions declares `type Context = Catalog` and receives
//! it in every `apply` call. This "late binding" keeps construction free of
//! dependency ordering problems: create every store first, wire contexts when
//! spawning.
//!
//! ## Subscriptions
//!
//! Every committed state is published on a `tokio::sync::watch` channel.
//! [`StoreClient::subscribe`] returns a receiver; view code can await
//! `changed()` and re-render from `borrow_and_update()`. A dispatch resolves
//! only after the publication, so the dispatcher's subscribers are never
//! behind the value the dispatch returned.
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task
//! - Actions are applied **sequentially** within a store (no locks needed!)
//! - Multiple stores run in **parallel**
//! - No shared mutable state (message passing only)
//!
//! ## Testing
//!
//! The crate provides a **MockStore** type that hands out real
//! `StoreClient<S>` values backed by scripted expectations instead of a
//! running actor. It lets you write fast, deterministic unit tests for client
//! wrappers without spawning anything. See the [`mock`] module for the full
//! API and usage patterns.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::StoreHandle;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use state::StoreState;
