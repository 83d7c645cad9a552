// src/copier/mod.rs

pub mod grid;
pub mod edit;
pub mod view;
pub mod events;
pub mod io; // Dictionary import/export

pub mod handler;
pub mod processes;
pub mod plugin;

pub use plugin::{CopierPlugin, StartupDict};
