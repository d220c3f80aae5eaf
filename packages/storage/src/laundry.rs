// ABOUTME: Laundry item storage layer using SQLite
// ABOUTME: CRUD for laundry items with tag_id uniqueness enforcement

use laundry_core::{
    normalize_tag_id, LaundryItem, LaundryItemCreateInput, LaundryItemUpdateInput, Patch,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::debug;

use crate::{StorageError, StorageResult};

/// Writers take the lock up front. A deferred transaction that reads first
/// gets SQLITE_BUSY on upgrade without waiting out the busy timeout.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

const SELECT_ITEM: &str =
    "SELECT id, label, material, color, tag_id, status FROM laundry_items";

#[derive(Clone)]
pub struct LaundryStorage {
    pool: SqlitePool,
}

impl LaundryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all items in insertion order
    pub async fn list(&self) -> StorageResult<Vec<LaundryItem>> {
        debug!("Fetching laundry items");

        let rows = sqlx::query(&format!("{} ORDER BY id", SELECT_ITEM))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_item).collect()
    }

    /// Get a single item by ID
    pub async fn get(&self, id: i64) -> StorageResult<LaundryItem> {
        debug!("Fetching laundry item: {}", id);

        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_ITEM))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => row_to_item(&row),
            None => Err(StorageError::NotFound),
        }
    }

    /// Create a new item. Status defaults to `dirty`.
    pub async fn create(&self, input: LaundryItemCreateInput) -> StorageResult<LaundryItem> {
        let tag_id = normalize_tag_id(input.tag_id);
        let status = input.status.unwrap_or_default();

        debug!("Creating laundry item (label: {}, tag_id: {:?})", input.label, tag_id);

        let mut tx = self.pool.begin_with(BEGIN_WRITE).await?;

        if let Some(tag) = &tag_id {
            ensure_tag_available(&mut tx, tag, None).await?;
        }

        let result = sqlx::query(
            r#"
            INSERT INTO laundry_items (label, material, color, tag_id, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.label)
        .bind(&input.material)
        .bind(&input.color)
        .bind(&tag_id)
        .bind(status)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, tag_id.as_deref()))?;

        let item = fetch_item(&mut tx, result.last_insert_rowid()).await?;
        tx.commit().await?;

        Ok(item)
    }

    /// Apply a partial update. Fields absent from `input` keep their values.
    pub async fn update(
        &self,
        id: i64,
        input: LaundryItemUpdateInput,
    ) -> StorageResult<LaundryItem> {
        debug!("Updating laundry item: {}", id);

        let mut tx = self.pool.begin_with(BEGIN_WRITE).await?;

        // Existence check first so a missing item wins over a tag conflict
        let current = fetch_item(&mut tx, id).await?;

        if input.is_empty() {
            return Ok(current);
        }

        let tag_id = match input.tag_id {
            Patch::Value(tag) if tag.trim().is_empty() => Patch::Null,
            other => other,
        };

        if let Patch::Value(tag) = &tag_id {
            ensure_tag_available(&mut tx, tag, Some(id)).await?;
        }

        // Build update query dynamically based on provided fields
        let mut query_parts = Vec::new();

        if input.label.is_some() {
            query_parts.push("label = ?");
        }
        if input.material.is_present() {
            query_parts.push("material = ?");
        }
        if input.color.is_present() {
            query_parts.push("color = ?");
        }
        if tag_id.is_present() {
            query_parts.push("tag_id = ?");
        }
        if input.status.is_some() {
            query_parts.push("status = ?");
        }

        let query_str = format!(
            "UPDATE laundry_items SET {} WHERE id = ?",
            query_parts.join(", ")
        );
        let mut query = sqlx::query(&query_str);

        // Bind parameters in the same order
        if let Some(label) = &input.label {
            query = query.bind(label);
        }
        if input.material.is_present() {
            query = query.bind(input.material.as_value());
        }
        if input.color.is_present() {
            query = query.bind(input.color.as_value());
        }
        if tag_id.is_present() {
            query = query.bind(tag_id.as_value());
        }
        if let Some(status) = input.status {
            query = query.bind(status);
        }

        query
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, tag_id.as_value().map(String::as_str)))?;

        let item = fetch_item(&mut tx, id).await?;
        tx.commit().await?;

        Ok(item)
    }

    /// Delete an item permanently
    pub async fn delete(&self, id: i64) -> StorageResult<()> {
        debug!("Deleting laundry item: {}", id);

        let result = sqlx::query("DELETE FROM laundry_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

async fn fetch_item(conn: &mut SqliteConnection, id: i64) -> StorageResult<LaundryItem> {
    let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_ITEM))
        .bind(id)
        .fetch_optional(conn)
        .await?;

    match row {
        Some(row) => row_to_item(&row),
        None => Err(StorageError::NotFound),
    }
}

/// Fail with `TagInUse` if any item other than `exclude_id` holds `tag_id`
async fn ensure_tag_available(
    conn: &mut SqliteConnection,
    tag_id: &str,
    exclude_id: Option<i64>,
) -> StorageResult<()> {
    // `id IS NOT NULL` matches every row, so a missing exclusion checks them all
    let holder: Option<i64> =
        sqlx::query_scalar("SELECT id FROM laundry_items WHERE tag_id = ? AND id IS NOT ?")
            .bind(tag_id)
            .bind(exclude_id)
            .fetch_optional(conn)
            .await?;

    if let Some(holder) = holder {
        debug!("tag_id {} already held by item {}", tag_id, holder);
        return Err(StorageError::TagInUse(tag_id.to_string()));
    }

    Ok(())
}

/// The unique index on `tag_id` is the only unique constraint a write can trip
fn map_write_error(err: sqlx::Error, tag_id: Option<&str>) -> StorageError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StorageError::TagInUse(tag_id.unwrap_or_default().to_string());
        }
    }
    StorageError::Sqlx(err)
}

/// Convert a database row to a LaundryItem
fn row_to_item(row: &SqliteRow) -> StorageResult<LaundryItem> {
    Ok(LaundryItem {
        id: row.try_get("id")?,
        label: row.try_get("label")?,
        material: row.try_get("material")?,
        color: row.try_get("color")?,
        tag_id: row.try_get("tag_id")?,
        status: row.try_get("status")?,
    })
}
