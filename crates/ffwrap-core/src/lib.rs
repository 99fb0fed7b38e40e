//! ffwrap-core: shared error and configuration types.
//!
//! Every other ffwrap crate funnels its failures into [`Error`] and reads its
//! settings from [`config::Config`].

pub mod config;
pub mod error;

pub use config::{Config, TempConfig, ToolsConfig};
pub use error::{Error, Result};
