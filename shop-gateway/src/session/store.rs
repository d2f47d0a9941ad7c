//! redb-based storage for session flags
//!
//! 登录/登出流程写入，守卫和请求签名器只读。键是店面约定的四个
//! 字符串 (`sellerLoggedIn` 等)，值是纯文本；进程重启后标志仍在。

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use shared::SessionRead;

/// Session flags table: key = flag name, value = plain string
const SESSION_TABLE: TableDefinition<&str, &str> = TableDefinition::new("session_flags");

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Persistent session-flag store
#[derive(Clone)]
pub struct SessionStore {
    db: Arc<Database>,
}

impl SessionStore {
    /// Open the store at `path`, creating the file on first run
    pub fn open(path: impl AsRef<Path>) -> SessionStoreResult<Self> {
        let db = Database::create(path)?;

        // first open creates the table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Store backed by memory only, no file
    #[cfg(test)]
    pub fn open_in_memory() -> SessionStoreResult<Self> {
        let db =
            Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Read a single flag
    pub fn get(&self, key: &str) -> SessionStoreResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    /// Write several flags in one transaction
    ///
    /// 登录流程一次写入标志和令牌；原子提交保证守卫和签名器
    /// 不会看到只有其中一个的中间态。
    pub fn put_many(&self, entries: &[(&str, &str)]) -> SessionStoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            for (key, value) in entries {
                table.insert(*key, *value)?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove several flags in one transaction
    pub fn remove_many(&self, keys: &[&str]) -> SessionStoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            for key in keys {
                let _ = table.remove(*key)?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// All stored flags, for diagnostics and health checks
    pub fn snapshot(&self) -> SessionStoreResult<Vec<(String, String)>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;
        let mut entries = Vec::new();
        for item in table.iter()? {
            let (key, value) = item?;
            entries.push((key.value().to_string(), value.value().to_string()));
        }
        Ok(entries)
    }
}

impl SessionRead for SessionStore {
    /// 读失败降级为"无此标志"，守卫据此把用户送去登录页
    fn get(&self, key: &str) -> Option<String> {
        match SessionStore::get(self, key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Session read failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::session::keys;

    #[test]
    fn test_put_and_get() {
        let store = SessionStore::open_in_memory().unwrap();
        store
            .put_many(&[(keys::SELLER_LOGGED_IN, "true"), (keys::SELLER_TOKEN, "abc")])
            .unwrap();

        assert_eq!(
            store.get(keys::SELLER_LOGGED_IN).unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(store.get(keys::SELLER_TOKEN).unwrap().as_deref(), Some("abc"));
        assert_eq!(store.get(keys::CUSTOMER_TOKEN).unwrap(), None);
    }

    #[test]
    fn test_remove_many_clears_a_portal() {
        let store = SessionStore::open_in_memory().unwrap();
        store
            .put_many(&[
                (keys::SELLER_LOGGED_IN, "true"),
                (keys::SELLER_TOKEN, "abc"),
                (keys::CUSTOMER_LOGGED_IN, "true"),
            ])
            .unwrap();

        store
            .remove_many(&[keys::SELLER_LOGGED_IN, keys::SELLER_TOKEN])
            .unwrap();

        assert_eq!(store.get(keys::SELLER_LOGGED_IN).unwrap(), None);
        assert_eq!(store.get(keys::SELLER_TOKEN).unwrap(), None);
        // 另一门户的标志不受影响
        assert_eq!(
            store.get(keys::CUSTOMER_LOGGED_IN).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_remove_missing_key_is_not_an_error() {
        let store = SessionStore::open_in_memory().unwrap();
        store.remove_many(&[keys::SELLER_TOKEN]).unwrap();
    }

    #[test]
    fn test_snapshot_lists_all_flags() {
        let store = SessionStore::open_in_memory().unwrap();
        store
            .put_many(&[(keys::CUSTOMER_LOGGED_IN, "true"), (keys::CUSTOMER_TOKEN, "t")])
            .unwrap();

        let mut snapshot = store.snapshot().unwrap();
        snapshot.sort();
        assert_eq!(
            snapshot,
            vec![
                ("customerLoggedIn".to_string(), "true".to_string()),
                ("customerToken".to_string(), "t".to_string()),
            ]
        );
    }

    #[test]
    fn test_session_read_view() {
        let store = SessionStore::open_in_memory().unwrap();
        store.put_many(&[(keys::SELLER_LOGGED_IN, "true")]).unwrap();

        let reader: &dyn SessionRead = &store;
        assert!(reader.contains(keys::SELLER_LOGGED_IN));
        assert!(!reader.contains(keys::CUSTOMER_LOGGED_IN));
    }

    #[test]
    fn test_flags_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.redb");

        {
            let store = SessionStore::open(&path).unwrap();
            store.put_many(&[(keys::CUSTOMER_TOKEN, "tok-1")]).unwrap();
        }

        let store = SessionStore::open(&path).unwrap();
        assert_eq!(
            store.get(keys::CUSTOMER_TOKEN).unwrap().as_deref(),
            Some("tok-1")
        );
    }
}
