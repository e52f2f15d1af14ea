pub mod components;
pub mod validation;
