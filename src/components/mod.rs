pub mod common;
pub mod footer;
pub mod header;
pub mod login;
pub mod pages;
pub mod registration;

pub use footer::Footer;
pub use header::Header;
pub use login::LoginPage;
pub use registration::RegistrationPanel;
