//! Type-safe wrappers around [`StoreClient`](store_actor::StoreClient).

pub mod cart_client;
pub mod checkout_client;
pub mod router_client;

pub use cart_client::*;
pub use checkout_client::*;
pub use router_client::*;
