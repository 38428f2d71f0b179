pub mod json_backend;

use crate::{
    domain::{Casting, Transaction},
    errors::ArtfinError,
};

pub type Result<T> = std::result::Result<T, ArtfinError>;

/// Abstraction over the two-key blob store holding the full collections.
/// Loads must degrade to an empty collection when the blob is absent or
/// unreadable; they never fail the app.
pub trait StorageBackend: Send + Sync {
    fn load_castings(&self) -> Result<Vec<Casting>>;
    fn save_castings(&self, castings: &[Casting]) -> Result<()>;
    fn load_transactions(&self) -> Result<Vec<Transaction>>;
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;
}

pub use json_backend::JsonStorage;
