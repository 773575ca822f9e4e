//! MySQL-backed product store.
//!
//! Every operation is a single parameterized statement against the
//! `products` table (two for `create`: insert, then read-back by the
//! generated key). Connections come from the SQLx pool per statement and
//! are released on every exit path, including failure.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;

use catalogd_core::ProductId;
use catalogd_products::{Product, ProductDraft};

use crate::error::StoreResult;
use crate::store::ProductStore;

/// Product store backed by a pooled MySQL connection source.
///
/// The pool is internally `Arc`ed by SQLx, so this type is cheap to clone
/// and safe to share across request handlers.
#[derive(Clone)]
pub struct MySqlProductStore {
    pool: MySqlPool,
}

impl MySqlProductStore {
    /// Wrap an existing connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Connect a new pool with the given size cap.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl ProductStore for MySqlProductStore {
    async fn get_all(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query(
            "SELECT ProductId, ProductName, UnitPrice FROM products ORDER BY ProductId",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(parse_product).collect()
    }

    async fn get_by_id(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let row = sqlx::query(
            "SELECT ProductId, ProductName, UnitPrice FROM products WHERE ProductId = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(parse_product).transpose()
    }

    async fn create(&self, draft: &ProductDraft) -> StoreResult<Option<Product>> {
        let result = sqlx::query("INSERT INTO products (ProductName, UnitPrice) VALUES (?, ?)")
            .bind(draft.product_name())
            .bind(draft.unit_price())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        // MySQL reports 0 when no auto-increment key was generated.
        let generated = result.last_insert_id();
        let Ok(id) = i64::try_from(generated) else {
            return Ok(None);
        };
        if id == 0 {
            return Ok(None);
        }

        self.get_by_id(ProductId::new(id)).await
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> StoreResult<()> {
        let result =
            sqlx::query("UPDATE products SET ProductName = ?, UnitPrice = ? WHERE ProductId = ?")
                .bind(draft.product_name())
                .bind(draft.unit_price())
                .bind(id.as_i64())
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(product_id = %id, "update matched no product row");
        }

        Ok(())
    }

    async fn delete(&self, id: ProductId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE ProductId = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(product_id = %id, "delete matched no product row");
        }

        Ok(())
    }
}

fn parse_product(row: &MySqlRow) -> StoreResult<Product> {
    Ok(Product {
        product_id: ProductId::new(row.try_get("ProductId")?),
        product_name: row.try_get("ProductName")?,
        unit_price: row.try_get("UnitPrice")?,
    })
}
