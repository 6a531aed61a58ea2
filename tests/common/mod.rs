use std::time::{SystemTime, UNIX_EPOCH};

use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{ConfigAndPool, MiddlewarePool, MiddlewarePoolConnection};

/// Build a uniquely-named in-memory sqlite catalog, apply the schema, then
/// any fixture SQL.
pub async fn setup_catalog(fixture_sql: &str) -> Result<ConfigAndPool, SqlMiddlewareDbError> {
    let db_name = format!(
        "file:test_db_{}?mode=memory&cache=shared",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time went backwards")
            .as_nanos()
    );

    let config_and_pool = ConfigAndPool::new_sqlite(db_name).await?;

    execute_batch(
        &config_and_pool,
        include_str!("../../src/sql/schema/sqlite/00_table_drop.sql"),
    )
    .await?;

    let schema = [
        include_str!("../../src/sql/schema/sqlite/01_courses.sql"),
        include_str!("../../src/sql/schema/sqlite/02_holes.sql"),
    ]
    .join("\n");
    execute_batch(&config_and_pool, &schema).await?;

    execute_batch(&config_and_pool, fixture_sql).await?;

    Ok(config_and_pool)
}

pub async fn execute_batch(
    config_and_pool: &ConfigAndPool,
    sql: &str,
) -> Result<(), SqlMiddlewareDbError> {
    if sql.trim().is_empty() {
        return Ok(());
    }

    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;
    match conn {
        MiddlewarePoolConnection::Postgres(mut pg_handle) => {
            let tx = pg_handle.transaction().await?;
            tx.batch_execute(sql).await?;
            tx.commit().await?;
            Ok(())
        }
        MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
            let sql = sql.to_string();
            sqlite_conn
                .interact(move |db_conn| {
                    let tx = db_conn.transaction()?;
                    tx.execute_batch(&sql)?;
                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(())
                })
                .await?
        }
    }
}
