pub mod config;
pub mod deck;
pub mod error;

pub use config::{AppConfig, EasingType, RailConfig, ReaderConfig, ScrollConfig};
pub use deck::{Deck, Section};
pub use error::{Error, Result};
