mod error;
mod logger;

pub use error::Error;
pub use logger::*;
