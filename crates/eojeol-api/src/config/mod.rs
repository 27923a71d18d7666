//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, MAX_TEXT_LENGTH, SERVICE_NAME};
pub use env::Config;
