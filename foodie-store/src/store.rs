use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel::SqliteConnection;
use tracing::debug;

use crate::schema::{dishes, restaurants};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("Query failed: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("Query task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Shared, read-only handle to the SQLite database.
///
/// Cloning is cheap; every clone checks connections out of the same pool.
#[derive(Clone)]
pub struct Store {
    pool: Pool<ConnectionManager<SqliteConnection>>,
}

impl Store {
    /// Opens the pool and verifies both tables are queryable.
    ///
    /// A `Store` is only handed out once this probe succeeds, so callers can
    /// start serving as soon as it returns.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = tokio::task::spawn_blocking(move || Pool::builder().build(manager)).await??;

        let store = Self { pool };
        let (restaurant_count, dish_count) = store
            .run(|conn| {
                let restaurant_count = restaurants::table.count().get_result::<i64>(conn)?;
                let dish_count = dishes::table.count().get_result::<i64>(conn)?;
                Ok((restaurant_count, dish_count))
            })
            .await?;
        debug!(restaurant_count, dish_count, "store ready");

        Ok(store)
    }

    /// Runs `f` on a pooled connection on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<T, StoreError> {
            let mut conn = pool.get()?;
            Ok(f(&mut *conn)?)
        })
        .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_restaurants, TestDatabase};
    use crate::queries;

    #[tokio::test]
    async fn test_connect_and_run() {
        let db = TestDatabase::seeded(&sample_restaurants(), &[]);
        let store = Store::connect(db.url()).await.unwrap();

        let results = store.run(queries::list_restaurants).await.unwrap();
        assert_eq!(results, sample_restaurants());

        let found = store
            .run(|conn| queries::get_restaurant(conn, 2))
            .await
            .unwrap();
        assert_eq!(found.map(|r| r.name), Some("Bangkok Street".to_string()));
    }

    #[tokio::test]
    async fn test_connect_fails_without_schema() {
        let dir = tempfile::tempdir().unwrap();
        let url = dir.path().join("empty.sqlite");

        let result = Store::connect(url.to_str().unwrap()).await;

        assert!(matches!(result, Err(StoreError::Query(_))));
    }

    #[tokio::test]
    async fn test_query_error_is_reported() {
        let db = TestDatabase::new();
        let store = Store::connect(db.url()).await.unwrap();

        let result = store
            .run(|conn| diesel::sql_query("SELECT * FROM missing_table").execute(conn))
            .await;

        assert!(matches!(result, Err(StoreError::Query(_))));
    }
}
