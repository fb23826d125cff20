//! Pages

pub mod index;
pub mod login;

pub use index::IndexPage;
pub use login::LoginForm;
