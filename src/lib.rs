//! MCP server exposing a read-only catalog of internal services.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod tools;
pub mod transport;

pub use catalog::{CatalogSource, CatalogStore, FileSource, Service, Technologies};
pub use error::{CatalogError, ToolError};
pub use server::CatalogServer;
pub use tools::{CallId, ToolRegistry};
