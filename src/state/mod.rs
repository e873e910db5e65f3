pub mod login;
pub mod registration;
pub mod session;
pub mod ui;

pub use login::*;
pub use registration::*;
pub use session::*;
pub use ui::*;
