#![forbid(unsafe_code)]

pub mod progress;
pub mod repository;
pub mod sqlite;

pub use progress::{BADGES_KEY, CONSULTATIONS_KEY, ProgressStore};
pub use repository::{InMemoryRepository, KeyValueRepository, Storage, StorageError};
