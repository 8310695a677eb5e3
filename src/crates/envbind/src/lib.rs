//! Bind environment variables into typed configuration records
//!
//! A record declares, per field, which variable it reads and how: whether
//! the variable is required, a default, `min`/`max` overrides and a
//! sequence delimiter. Binding fills the record in place and reports every
//! misconfigured field at once.
//!
//! # Modules
//!
//! - `binder` - Record schemas, the `EnvRecord` trait and `Binder`
//! - `config` - Environment sources and binder options
//! - `descriptor` - Per-field metadata
//! - `dispatch` - Routing raw values into fields by shape
//! - `error` - Error taxonomy, diagnostics and chain formatting
//! - `logging` - Scope logging and secret redaction
//! - `parse` - Scalar and sequence parsers
//! - `resolve` - Choosing the raw value for a field
//! - `shape` - Supported field shapes
//! - `validation` - Natural and overridden numeric bounds
//!
//! # Example
//!
//! ```rust
//! use envbind::{env_record, field, EnvRecord, MapEnv};
//! use url::Url;
//!
//! #[derive(Debug, Default)]
//! struct AppConfig {
//!     debug: bool,
//!     port: u16,
//!     upstream: Option<Url>,
//!     allowed: Vec<String>,
//! }
//!
//! env_record!(AppConfig {
//!     debug => field("APP_DEBUG"),
//!     port => field("APP_PORT").required(true).min("1024"),
//!     upstream => field("APP_UPSTREAM"),
//!     allowed => field("APP_ALLOWED").delimiter(";"),
//! });
//!
//! let env = MapEnv::new()
//!     .with("APP_PORT", "8443")
//!     .with("APP_UPSTREAM", "https://backend.internal:9000")
//!     .with("APP_ALLOWED", "alice; bob");
//!
//! let config = AppConfig::from_source(&env).unwrap();
//! assert_eq!(config.port, 8443);
//! assert_eq!(config.allowed, vec!["alice", "bob"]);
//! assert_eq!(config.upstream.unwrap().port(), Some(9000));
//!
//! let error = AppConfig::from_source(&MapEnv::new().with("APP_PORT", "80")).unwrap_err();
//! assert_eq!(error.to_string(), "port: port must be at least 1024");
//! ```

pub mod binder;
pub mod config;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod logging;
mod macros;
pub mod parse;
pub mod resolve;
pub mod shape;
pub mod validation;

pub use binder::{Binder, EnvRecord, FieldBinding, Schema};
pub use config::{BindOptions, EnvSource, MapEnv, ProcessEnv};
pub use descriptor::{field, FieldDescriptor};
pub use error::{BindError, Diagnostics, Error, FieldError, Result};
pub use shape::{IntoSlot, Kind, Shape, Slot, Width};

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
