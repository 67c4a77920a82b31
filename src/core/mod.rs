// src/core/mod.rs
pub mod config;
pub mod form;

pub use form::PasswordForm;
