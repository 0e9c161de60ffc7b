//! Panda assistant server.
//!
//! Exposes the command router over HTTP so a browser front end can send
//! transcribed voice commands and show the replies.

pub mod api;
pub mod assistant;
pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use assistant::build_command_router;
pub use error::ApiError;
