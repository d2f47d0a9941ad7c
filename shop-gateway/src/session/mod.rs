//! 会话标志存储 - redb 持久化

pub mod store;

pub use store::{SessionStore, SessionStoreError, SessionStoreResult};
