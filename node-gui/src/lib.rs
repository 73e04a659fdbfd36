pub mod args;
pub mod config;
pub mod dir;
pub mod export;
pub mod gallery;
pub mod logger;
pub mod window;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
