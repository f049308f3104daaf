//! Core modules for Lightquest

pub mod store;
pub mod catalog;
pub mod quiz;
pub mod timer;
pub mod tubes;
pub mod chat;
pub mod controller;
pub mod command;
pub mod animation;
pub mod api;

pub use store::SessionStore;
pub use catalog::{standard_catalog, Catalog};
pub use controller::StageController;
pub use command::{parse_command, Command, HELP};
pub use animation::{empty_descriptor, AnimationLoader};
pub use api::{create_router, run_server, AppState};
