//! Backend API module
//!
//! Wire types plus the `BreachApi` seam the controller talks through.

pub mod client;
pub mod types;

pub use client::{BreachApi, HttpBreachApi};
pub use types::*;
