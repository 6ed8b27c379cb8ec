pub mod gateway;
pub mod layer;

pub use gateway::{Gateway, GatewayError, GenerationResult, Message};
pub use layer::{LayerConfig, LayerService};
