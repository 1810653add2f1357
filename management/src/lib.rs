pub mod client;
pub mod config;
pub mod error;
pub mod token;

pub use client::{ManagementClient, ManagementClientBuilder};
pub use config::{ClientCredentials, RetryConfig};
pub use error::{ManagementError, ManagementResult};

/// Release version of this client library, reported in the user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
