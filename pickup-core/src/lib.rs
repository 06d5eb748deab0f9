pub mod calculations;
pub mod form;
pub mod models;

pub use form::{BookingForm, FormEvent};
pub use models::*;
