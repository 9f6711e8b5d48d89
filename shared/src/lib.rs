pub mod error;
pub mod ids;
pub mod models;
pub mod share;
pub mod storage;
pub mod validation;

pub use error::{Error, ErrorCode, Result};
pub use models::*;
pub use validation::*;
pub use storage::{KeyValueStore, MemoryStore, Repository};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

#[cfg(test)]
mod tests;
