pub mod error;
pub mod keys;
pub mod normalize;
pub mod types;

pub use error::{ConfigError, Error, Result};
