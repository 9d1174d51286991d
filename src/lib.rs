#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

//! Async Wikimedia Commons category crawler: enumerates image files reachable
//! from a set of root categories via paginated `categorymembers` queries, with
//! per-root depth limits, cycle avoidance, and wiremock tests.

/// Result post-processing (dedup + extension filter)
pub mod assemble;
/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Category-tree traversal engine
pub mod traverse;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::CommonsConfig;
pub use crate::error::{ApiErrorObject, CommonsError};
pub use crate::traverse::{ErrorPolicy, Harvest, SubtreeError, TraversalOptions, collect_images};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::traverse::{ErrorPolicy, Harvest, SubtreeError, TraversalOptions, collect_images};
    pub use crate::types::*;
    pub use crate::{Client, CommonsConfig};
}
