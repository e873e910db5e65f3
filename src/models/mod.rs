pub mod auth;
pub mod event;
pub mod registration;

pub use auth::*;
pub use event::*;
pub use registration::*;
