//! Data access for the `supplier` table.

use crate::error::AppError;
use crate::model::{Supplier, SupplierDraft};
use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

/// Sort order for list queries. Only named columns are representable, so the
/// ORDER BY clause is never built from request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplierSort {
    Name,
}

impl SupplierSort {
    fn column(self) -> &'static str {
        match self {
            SupplierSort::Name => "name",
        }
    }
}

const SUPPLIER_COLUMNS: &str =
    "supplier_id, create_date, name, phone, email, address, address2, city, state, zip, country";

/// Supplier table access. Holds the connection pool; write methods take the
/// caller's transaction connection, so the handler owns the commit/rollback
/// boundary.
#[derive(Clone)]
pub struct SupplierRepository {
    pool: PgPool,
}

impl SupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        SupplierRepository { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Open the transaction for one write request. Dropping it without
    /// committing rolls back.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, AppError> {
        Ok(self.pool.begin().await?)
    }

    /// All suppliers, full scan, ordered ascending by the given column.
    pub async fn list_all(&self, sort: SupplierSort) -> Result<Vec<Supplier>, AppError> {
        let sql = format!(
            "SELECT {} FROM supplier ORDER BY {} ASC",
            SUPPLIER_COLUMNS,
            sort.column()
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Supplier>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Point lookup by primary key. An absent row is `Ok(None)`.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Supplier>, AppError> {
        let sql = format!(
            "SELECT {} FROM supplier WHERE supplier_id = $1",
            SUPPLIER_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Supplier>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert a new row. The generated key comes back on the returned value.
    pub async fn persist(
        &self,
        conn: &mut PgConnection,
        draft: &SupplierDraft,
        create_date: NaiveDate,
    ) -> Result<Supplier, AppError> {
        let sql = format!(
            "INSERT INTO supplier \
             (create_date, name, phone, email, address, address2, city, state, zip, country) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {}",
            SUPPLIER_COLUMNS
        );
        tracing::debug!(sql = %sql, "query (tx)");
        let row = sqlx::query_as::<_, Supplier>(&sql)
            .bind(create_date)
            .bind(draft.name.as_deref())
            .bind(draft.phone.as_deref())
            .bind(draft.email.as_deref())
            .bind(draft.address.as_deref())
            .bind(draft.address2.as_deref())
            .bind(draft.city.as_deref())
            .bind(draft.state.as_deref())
            .bind(draft.zip.as_deref())
            .bind(draft.country.as_deref())
            .fetch_one(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Full-replace update: every mutable column is assigned from the draft,
    /// absent fields included (they overwrite with null). `create_date` is
    /// left alone. Returns `None` when the id has no row.
    pub async fn update(
        &self,
        conn: &mut PgConnection,
        id: i64,
        draft: &SupplierDraft,
    ) -> Result<Option<Supplier>, AppError> {
        let sql = format!(
            "UPDATE supplier SET \
             name = $2, phone = $3, email = $4, address = $5, address2 = $6, \
             city = $7, state = $8, zip = $9, country = $10 \
             WHERE supplier_id = $1 \
             RETURNING {}",
            SUPPLIER_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query (tx)");
        let row = sqlx::query_as::<_, Supplier>(&sql)
            .bind(id)
            .bind(draft.name.as_deref())
            .bind(draft.phone.as_deref())
            .bind(draft.email.as_deref())
            .bind(draft.address.as_deref())
            .bind(draft.address2.as_deref())
            .bind(draft.city.as_deref())
            .bind(draft.state.as_deref())
            .bind(draft.zip.as_deref())
            .bind(draft.country.as_deref())
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Hard delete by primary key. `false` when the id has no row.
    pub async fn delete(&self, conn: &mut PgConnection, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM supplier WHERE supplier_id = $1 RETURNING supplier_id";
        tracing::debug!(sql = %sql, id, "query (tx)");
        let row = sqlx::query(sql).bind(id).fetch_optional(&mut *conn).await?;
        Ok(row.is_some())
    }
}
