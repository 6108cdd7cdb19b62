pub mod client;
pub mod convert;
pub mod error;
pub mod loader;
pub mod queries;
pub mod types;

pub use client::StorefrontClient;
pub use error::StorefrontError;
pub use loader::{load_homepage, DeferredProducts, Homepage};
