pub mod routes;
pub mod server;

pub use server::config::configure_app;

// Re-export specific items from server
pub use server::services;
