//! Reusable UI components

pub mod button;
pub mod card;
pub mod field;
pub mod loading;

pub use button::LinkButton;
pub use card::FormCard;
pub use field::TextField;
pub use loading::LoadingSpinner;
