pub mod actions;
pub mod components;
