//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - Predicate rendering for the catalog count and page queries
//! - Substring search over name, type and brand
//! - CRUD operations
//!
//! ## Query Rendering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 One Predicate, Two Statements                           │
//! │                                                                         │
//! │  Predicate [type = "conifer", price >= 1000]                           │
//! │       │                                                                 │
//! │       ├──► SELECT COUNT(*) FROM products                               │
//! │       │    WHERE "type" = ? AND price_cents >= ?                       │
//! │       │                                                                 │
//! │       └──► SELECT id, name, ... FROM products                          │
//! │            WHERE "type" = ? AND price_cents >= ?                       │
//! │            ORDER BY price_cents ASC, id ASC                            │
//! │            LIMIT ? OFFSET ?                                            │
//! │                                                                         │
//! │  Both WHERE clauses come from push_predicate(), so the count always    │
//! │  describes exactly the rows the page is cut from.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::{debug, warn};

use crate::error::{DbError, DbResult};
use crate::store::ProductStore;
use forestal_core::predicate::Value;
use forestal_core::{PageWindow, Predicate, Product, ProductDraft, SortClause};

/// Column list matching [`Product`]'s `FromRow` mapping.
const PRODUCT_COLUMNS: &str = r#"id, name, "type", brand, description, price_cents, stock, image"#;

const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let results = repo.search("pine").await?;
/// let product = repo.get_by_id(42).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository {
            pool,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Sets the upper bound on each store call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    /// Runs one store call under the query timeout.
    ///
    /// Dropping the timed-out future returns its connection to the pool.
    async fn timed<T, F>(&self, operation: &'static str, call: F) -> DbResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        match tokio::time::timeout(self.query_timeout, call).await {
            Ok(result) => result.map_err(DbError::from),
            Err(_) => {
                warn!(
                    operation,
                    timeout_ms = self.query_timeout.as_millis() as u64,
                    "Store call timed out"
                );
                Err(DbError::Timeout(self.query_timeout))
            }
        }
    }

    /// Case-insensitive substring search over name, type and brand.
    ///
    /// `%` and `_` in `term` match literally. Results are unpaginated and
    /// ordered by id. The caller validates the term.
    pub async fn search(&self, term: &str) -> DbResult<Vec<Product>> {
        debug!(term = %term, "Searching products");

        let pattern = like_pattern(term);
        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE name LIKE ?1 ESCAPE '\'
               OR "type" LIKE ?1 ESCAPE '\'
               OR brand LIKE ?1 ESCAPE '\'
            ORDER BY id ASC
            "#
        );

        let products = self
            .timed(
                "search",
                sqlx::query_as::<_, Product>(&sql)
                    .bind(pattern)
                    .fetch_all(&self.pool),
            )
            .await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Inserts a new product and returns its store-assigned id.
    ///
    /// ## Returns
    /// * `Ok(id)` - Row inserted
    /// * `Err(DbError::ConstraintViolation)` - Negative price or stock
    pub async fn insert(&self, draft: &ProductDraft) -> DbResult<i64> {
        debug!(name = %draft.name, "Inserting product");

        let result = self
            .timed(
                "insert",
                sqlx::query(
                    r#"
                    INSERT INTO products (
                        name, "type", brand, description, price_cents, stock, image
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                    "#,
                )
                .bind(draft.name.as_str())
                .bind(draft.product_type.as_str())
                .bind(draft.brand.as_str())
                .bind(draft.description.as_str())
                .bind(draft.price)
                .bind(draft.stock)
                .bind(draft.image.as_str())
                .execute(&self.pool),
            )
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replaces every writable field of an existing product.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, id: i64, draft: &ProductDraft) -> DbResult<()> {
        debug!(id, "Updating product");

        let result = self
            .timed(
                "update",
                sqlx::query(
                    r#"
                    UPDATE products SET
                        name = ?2,
                        "type" = ?3,
                        brand = ?4,
                        description = ?5,
                        price_cents = ?6,
                        stock = ?7,
                        image = ?8
                    WHERE id = ?1
                    "#,
                )
                .bind(id)
                .bind(draft.name.as_str())
                .bind(draft.product_type.as_str())
                .bind(draft.brand.as_str())
                .bind(draft.description.as_str())
                .bind(draft.price)
                .bind(draft.stock)
                .bind(draft.image.as_str())
                .execute(&self.pool),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = self
            .timed(
                "delete",
                sqlx::query("DELETE FROM products WHERE id = ?1")
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts all products (for diagnostics and the seed binary).
    pub async fn count_all(&self) -> DbResult<u64> {
        self.count(&Predicate::match_all()).await
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn count(&self, predicate: &Predicate) -> DbResult<u64> {
        debug!(
            conditions = predicate.conditions().len(),
            params = ?predicate.parameters().collect::<Vec<_>>(),
            "Counting products"
        );

        let mut qb = count_query(predicate);
        let count: i64 = self
            .timed(
                "count",
                qb.build_query_scalar::<i64>().fetch_one(&self.pool),
            )
            .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn select(
        &self,
        predicate: &Predicate,
        sort: SortClause,
        window: &PageWindow,
    ) -> DbResult<Vec<Product>> {
        debug!(
            sort = %sort.to_sql(),
            offset = window.offset,
            limit = window.limit,
            "Selecting product page"
        );

        let mut qb = select_query(predicate, sort, window);
        self.timed(
            "select",
            qb.build_query_as::<Product>().fetch_all(&self.pool),
        )
        .await
    }

    async fn get_by_id(&self, id: i64) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");
        self.timed(
            "get_by_id",
            sqlx::query_as::<_, Product>(&sql)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn list_all(&self) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id ASC");
        self.timed(
            "list_all",
            sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool),
        )
        .await
    }
}

// =============================================================================
// SQL Rendering
// =============================================================================

/// Appends ` WHERE a AND b ...` for a non-empty predicate.
///
/// Identifiers and operators come from the predicate's fixed enums. Every
/// value goes through `push_bind`.
fn push_predicate(qb: &mut QueryBuilder<'_, Sqlite>, predicate: &Predicate) {
    for (i, condition) in predicate.conditions().iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        qb.push(condition.column_sql());
        qb.push(" ");
        qb.push(condition.op().as_sql());
        qb.push(" ");
        match condition.value() {
            Value::Text(text) => qb.push_bind(text.to_string()),
            Value::Cents(cents) => qb.push_bind(cents),
        };
    }
}

fn count_query(predicate: &Predicate) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM products");
    push_predicate(&mut qb, predicate);
    qb
}

fn select_query(
    predicate: &Predicate,
    sort: SortClause,
    window: &PageWindow,
) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products"));
    push_predicate(&mut qb, predicate);
    qb.push(" ORDER BY ");
    qb.push(sort.to_sql());
    qb.push(" LIMIT ");
    qb.push_bind(sql_int(window.limit));
    qb.push(" OFFSET ");
    qb.push_bind(sql_int(window.offset));
    qb
}

/// SQLite integers are signed 64-bit.
fn sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Wraps a search term in `%...%`, escaping LIKE metacharacters with `\`.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// =============================================================================
// Unit Tests
// =============================================================================
