//! # Comanda App Library
//!
//! This library exposes the core modules of the application for integration testing.

pub mod api;
pub mod cart_store;
pub mod checkout_store;
pub mod clients;
pub mod config;
pub mod form;
pub mod lifecycle;
pub mod model;
pub mod router_store;
pub mod views;
