//! Server setup: configuration, state, and initialization.

pub mod config;
pub mod init;
pub mod state;

pub use init::create_app;
pub use state::AppState;
