pub mod registry;
pub mod resolver;

pub use registry::ApiRegistry;
pub use resolver::{item_matches, MockResolver};
