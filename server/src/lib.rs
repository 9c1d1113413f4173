pub mod error;
pub mod github;
pub mod messages;
pub mod metrics;
pub mod store;
pub mod types;

pub use error::FetchError;
