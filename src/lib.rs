#![doc = "The `todoguard` library crate."]
#![doc = ""]
#![doc = "A per-user task list service: password registration and login, signed bearer tokens,"]
#![doc = "and task records that only their owner can read or change. The binary (`main.rs`)"]
#![doc = "loads the configuration, picks a store and serves the routes wired by [`app::AppState`]."]

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod tasks;

pub use crate::app::AppState;
pub use crate::error::AppError;
