//! # Domain Model
//!
//! Pure data structures shared by the stores, the views, and the session:
//! restaurant reference data, the cart, the checkout draft, and the route.

pub mod cart;
pub mod checkout;
pub mod payment;
pub mod restaurant;
pub mod route;

pub use cart::*;
pub use checkout::*;
pub use payment::*;
pub use restaurant::*;
pub use route::*;
