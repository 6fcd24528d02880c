use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// One table per section kind plus the registrations table. The kinds are
/// independent by design: no foreign keys, no uniqueness constraints, and
/// nothing here is ever UPDATEd through the API.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS registrations (
        id UUID PRIMARY KEY,
        email TEXT NOT NULL,
        registered BOOLEAN NOT NULL DEFAULT FALSE
    )",
    "CREATE TABLE IF NOT EXISTS basic_info (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        title TEXT NOT NULL,
        linkedin TEXT NOT NULL,
        github TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS work_entries (
        id UUID PRIMARY KEY,
        certification_link TEXT NOT NULL,
        company_name TEXT NOT NULL,
        start_date DATE NOT NULL,
        end_date DATE NOT NULL,
        location TEXT NOT NULL,
        title TEXT NOT NULL,
        points TEXT[] NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS projects (
        id UUID PRIMARY KEY,
        github TEXT NOT NULL,
        link TEXT NOT NULL,
        overview TEXT NOT NULL,
        title TEXT NOT NULL,
        points TEXT[] NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS education_entries (
        id UUID PRIMARY KEY,
        college TEXT NOT NULL,
        title TEXT NOT NULL,
        start_date DATE NOT NULL,
        end_date DATE NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS achievement_sets (
        id UUID PRIMARY KEY,
        points TEXT[] NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS summaries (
        id UUID PRIMARY KEY,
        summary TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS other_notes (
        id UUID PRIMARY KEY,
        other TEXT NOT NULL
    )",
];

/// Idempotently creates the tables the API writes to.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    info!("Database schema ensured");
    Ok(())
}
