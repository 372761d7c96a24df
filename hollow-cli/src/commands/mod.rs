pub mod config;
pub mod render;
pub mod sessions;
pub mod themes;
pub mod watch;
