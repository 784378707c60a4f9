//! Domain layer
//!
//! Error types shared by the model and widget layers.

pub mod errors;

pub use errors::{ModelError, ModelResult};
