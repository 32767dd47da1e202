mod credentials;
mod loader;
mod store;
mod types;

pub use credentials::{AuthType, CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, AuthConfig, Config, ListConfig};
