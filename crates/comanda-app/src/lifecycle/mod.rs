//! # Session Lifecycle & Orchestration
//!
//! Individual stores are simple; wiring them together is where the
//! complexity lives. This module provides the conductor for a guest's
//! visit: one [`TableSession`] owns the cart, checkout, and router stores
//! plus the HTTP gateway, and walks them through the order-submission
//! sequence.
//!
//! ## Dependency Injection via Context
//!
//! Stores are created without dependencies and receive them at `run()`:
//!
//! ```rust,ignore
//! let (cart_actor, cart_client) = cart_store::new();
//! // The cart prices items from the menu, so it runs with the restaurant
//! let cart_handle = tokio::spawn(cart_actor.run(restaurant.clone()));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. Drop all clients, closing the sender side of the channels
//! 2. Stores detect closure and exit their event loops
//! 3. Await the task handles, reporting any panic
//!
//! ## Observability
//!
//! Install [`store_actor::tracing::setup_tracing`] once at startup:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Lifecycle events
//! RUST_LOG=debug cargo run     # Every request and action
//! ```

pub mod session;

pub use session::*;
