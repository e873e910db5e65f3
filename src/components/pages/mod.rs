mod about;
mod contact;
mod home;
mod not_found;
mod tracks;

pub use about::*;
pub use contact::*;
pub use home::*;
pub use not_found::*;
pub use tracks::*;
