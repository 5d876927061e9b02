pub mod config;
pub mod logging;

// Bootstrap flow modules
pub mod app;
pub mod context;
pub mod fetch;
pub mod loader;
