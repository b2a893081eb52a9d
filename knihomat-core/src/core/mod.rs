//! Core module: configuration and application state

mod config;
mod state;

pub use config::Config;
pub use state::AppState;
