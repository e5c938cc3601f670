//! Configuration module for sva

mod display;

pub use display::{DisplayConfig, DisplayConfigBuilder, DEFAULT_HEIGHT, DEFAULT_WIDTH};
