//! Request handlers

pub mod assets;
pub mod auth;
pub mod description;
pub mod health;
