use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connection pool shared across requests. Each query checks a connection
/// out for its own duration and returns it when done, so no handler holds
/// a session beyond the statement it runs.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}
