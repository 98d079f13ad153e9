//! In-memory user store
//!
//! Mirrors the `users` table semantics (serial ids, unique email,
//! server-side timestamps) without a database. Used by router tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::db::store::{user_not_found, UserStore};
use crate::db::DbError;
use crate::models::{NewUser, User, UserId};

#[derive(Default)]
struct Table {
    last_id: UserId,
    rows: BTreeMap<UserId, User>,
}

/// Mutex-guarded map keyed by id; the lock is held for one operation only.
#[derive(Default)]
pub struct MemoryUserStore {
    table: Mutex<Table>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    async fn get(&self, id: UserId) -> Result<User, DbError> {
        self.lock()
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| user_not_found(id))
    }

    async fn create(&self, user: NewUser) -> Result<User, DbError> {
        let mut table = self.lock();
        if table.rows.values().any(|u| u.email == user.email()) {
            return Err(DbError::Conflict {
                resource: "user",
                field: "email",
            });
        }

        table.last_id += 1;
        let created = User {
            id: table.last_id,
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            created_at: Utc::now(),
        };
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: UserId) -> Result<(), DbError> {
        self.lock()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| user_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser::new(Some(name.into()), Some(email.into())).unwrap()
    }

    #[tokio::test]
    async fn ids_are_sequential() {
        let store = MemoryUserStore::new();
        let a = store.create(new_user("a", "a@x.com")).await.unwrap();
        let b = store.create(new_user("b", "b@x.com")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryUserStore::new();
        let a = store.create(new_user("a", "a@x.com")).await.unwrap();
        store.delete(a.id).await.unwrap();
        let b = store.create(new_user("b", "b@x.com")).await.unwrap();
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let store = MemoryUserStore::new();
        store.create(new_user("a", "a@x.com")).await.unwrap();
        let err = store.create(new_user("b", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { .. }));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = MemoryUserStore::new();
        let err = store.delete(5).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
