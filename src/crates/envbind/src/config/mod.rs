//! Binder configuration and environment sources
//!
//! - [`EnvSource`] abstracts the flat string key/value environment a record
//!   is bound from. [`ProcessEnv`] reads the process environment, [`MapEnv`]
//!   and the std maps serve fixed snapshots (tests, layered loaders).
//! - [`BindOptions`] tunes the few knobs the binder itself has.
//!
//! # Example
//!
//! ```rust
//! use envbind::config::{EnvSource, MapEnv};
//!
//! let env: MapEnv = [("PORT", "8080"), ("HOST", " localhost ")].into_iter().collect();
//! assert_eq!(env.lookup("PORT").as_deref(), Some("8080"));
//! assert_eq!(env.lookup("MISSING"), None);
//! ```

mod env;
mod options;

pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use options::BindOptions;
