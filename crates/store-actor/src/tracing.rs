//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for store-based systems.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. Every store logs its lifecycle and every client method
//! opens an instrument span, so the log stream shows the complete path of an
//! event: dispatch at the client, application at the store, publication to
//! subscribers.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); log lines carry a `state_type` field instead.
//! Levels are configured through the standard `RUST_LOG` variable:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full action payloads
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup and shutdown, keyed by `state_type`
//! - **Operations**: snapshots at `debug`, committed dispatches at `info`
//! - **Rejections**: refused actions at `warn` with the domain error
//!
//! With `RUST_LOG=debug`, the `?action` fields show the full dispatched
//! payloads once per request; `info` keeps only the workflow hierarchy.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use state_type instead
        .compact() // Compact format shows spans inline (e.g., "checkout:place_order")
        .init();
}
