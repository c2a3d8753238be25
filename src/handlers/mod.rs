//! HTTP handlers for API management and mock resolution.

pub mod api;
pub mod mock;
pub use api::*;
pub use mock::*;
