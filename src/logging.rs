// src/logging.rs - tracing setup for the desktop shell

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Initializes the global tracing subscriber.
///
/// `filter` is an `EnvFilter` directive string such as `"info"` or
/// `"share_card=debug"`. A `RUST_LOG` value in the environment takes
/// precedence over it. The WASM build sets up tracing in the
/// `wasm_bindgen(start)` entry instead.
pub fn init(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}
