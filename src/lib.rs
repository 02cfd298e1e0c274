pub mod buffer;
pub mod config;
pub mod error;
pub mod shared;

pub use buffer::{CircularBuffer, Iter};
pub use config::Config;
pub use error::{Error, Result};
pub use shared::SharedCircularBuffer;
