//! Fake API builder: define mock HTTP endpoints with canned JSON responses,
//! persist them as one JSON file each, and serve them back.

pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use error::{AppError, ConfigError, ResolveError, StoreError};
pub use model::{ApiConfig, ApiMethod, CreateApiRequest};
pub use routes::{api_routes, app, common_routes};
pub use service::{ApiRegistry, MockResolver};
pub use settings::ServerConfig;
pub use state::AppState;
pub use store::{ConfigStore, FileStore, MemoryStore};
