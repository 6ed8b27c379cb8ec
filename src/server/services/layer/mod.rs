pub mod service;
pub mod types;

pub use service::{LayerConfig, LayerService, DEFAULT_BASE_URL};
