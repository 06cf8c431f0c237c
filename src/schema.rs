//! First-run provisioning: database creation and `supplier` table DDL.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Create the `supplier` table if it does not exist. Idempotent; runs on
/// every startup.
pub async fn ensure_supplier_table(pool: &PgPool) -> Result<(), AppError> {
    const DDL: &str = r#"
        CREATE TABLE IF NOT EXISTS supplier (
            supplier_id BIGSERIAL PRIMARY KEY,
            create_date DATE,
            name TEXT,
            phone TEXT,
            email TEXT,
            address TEXT,
            address2 TEXT,
            city TEXT,
            state TEXT,
            zip TEXT,
            country TEXT
        )
    "#;
    sqlx::query(DDL).execute(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects
/// to the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_database_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Config(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection URL into (url pointing at the `postgres` admin
/// database, target database name).
fn split_database_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::Config("DATABASE_URL: no database path".into()))?
        + 1;
    let db_name = url
        .get(path_start..)
        .unwrap_or("")
        .split('?')
        .next()
        .unwrap_or("")
        .trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_extracts_db_name() {
        let (admin, name) = split_database_url("postgres://localhost:5432/supplier").expect("split");
        assert_eq!(admin, "postgres://localhost:5432/postgres");
        assert_eq!(name, "supplier");
    }

    #[test]
    fn split_drops_query_params() {
        let (_, name) =
            split_database_url("postgres://localhost/supplier?sslmode=disable").expect("split");
        assert_eq!(name, "supplier");
    }

    #[test]
    fn quote_escapes_quotes() {
        assert_eq!(quote_ident(r#"we"ird"#), r#""we\"ird""#);
    }
}
