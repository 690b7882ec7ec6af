pub mod config;
pub mod server;
pub mod state;

pub use config::*;
pub use server::*;
pub use state::*;
