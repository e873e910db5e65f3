pub mod auth;
pub mod client;
pub mod error;
pub mod events;

pub use client::*;
pub use error::*;
