//! Runtime concerns shared by every service.
//!
//! This includes the API's configuration, the error type returned by every
//! fallible HTTP handler, and the global panic hook.

pub mod config;
pub use config::{Config, InitializeConfigError};

mod error;
pub use error::{Error, Result};

pub mod panic_hook;
pub mod signal;
