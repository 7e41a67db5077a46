//! Logging setup for the DealPulse storefront.
//!
//! UI code emits `tracing` events directly. This crate owns the shared
//! logging configuration and installs the subscriber on the server:
//! - `LogLevel` / `LogFormat` - configurable verbosity and output shape
//! - `LoggingConfig` - the `[logging]` table of the site configuration
//! - `init_logging` - installs a `tracing-subscriber` fmt subscriber

mod logging;

pub use logging::*;
