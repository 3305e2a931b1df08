//! Shared setup for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};

use common::DatabaseConfig;
use user_service_lib::infra::Database;
use user_service_lib::repository::UserStore;
use user_service_lib::service::UserManager;

/// Fresh in-memory database with migrations applied.
pub async fn setup_db() -> Database {
    Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("failed to open in-memory database")
}

pub async fn setup_store() -> UserStore {
    UserStore::new(setup_db().await.get_connection())
}

pub async fn setup_service() -> UserManager {
    UserManager::new(Arc::new(setup_store().await))
}

pub fn user_input(name: &str, email: &str, age: i64) -> Value {
    json!({ "name": name, "email": email, "age": age })
}
