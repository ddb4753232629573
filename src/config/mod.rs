pub mod credentials;
pub mod loader;
pub mod types;

pub use credentials::SecureString;
pub use loader::{ConfigError, ENV_API_TOKEN, ENV_DATASET, ENV_PROJECT_ID};
pub use types::{Config, ContactConfig, ContentConfig, DisplayConfig, NetworkConfig};
