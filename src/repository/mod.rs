//! Persistence boundary for client records.
//!
//! Services depend on the [`ClientReader`] and [`ClientWriter`] traits only;
//! [`DieselRepository`] is the SQLite implementation used by the server.

use crate::db::DbPool;
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Read access to stored clients.
pub trait ClientReader {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
    /// All clients ordered by id.
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    /// Clients whose first name, mobile number or id number match the `LIKE`
    /// pattern `key`. The pattern is used verbatim; callers supply wildcards.
    fn search_clients(&self, key: &str) -> RepositoryResult<Vec<Client>>;
}

/// Write access to stored clients.
pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update_client(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client>;
}

/// Diesel-backed repository sharing a connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
