pub mod models;
pub mod seed;
pub mod storage;

pub use storage::{SearchResults, Storage, StorageError};
