pub mod models;
pub mod queries;
pub mod schema;
pub mod store;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use store::{Store, StoreError};
