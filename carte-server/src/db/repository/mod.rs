//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

pub mod category;
pub mod menu;
pub mod menu_item;
pub mod restaurant;
pub mod user;

// Re-exports
pub use category::CategoryRepository;
pub use menu::MenuRepository;
pub use menu_item::MenuItemRepository;
pub use restaurant::RestaurantRepository;
pub use user::UserRepository;

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:id" 格式
// =============================================================================
//
// API 路径既接受纯 key 也接受带表前缀的 "table:id"，
// 统一通过 record_id() 归一化为 RecordId。

/// Normalize an incoming id string (with or without table prefix) to a RecordId
pub fn record_id(table: &str, id: &str) -> RecordId {
    let key = id
        .strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id);
    RecordId::from_table_key(table, key)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_accepts_bare_key() {
        let id = record_id("menu", "abc123");
        assert_eq!(id.to_string(), "menu:abc123");
    }

    #[test]
    fn test_record_id_strips_table_prefix() {
        let id = record_id("menu", "menu:abc123");
        assert_eq!(id.to_string(), "menu:abc123");
    }
}
