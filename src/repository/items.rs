//! Items repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::item::{Item, ItemFields},
};

const ITEM_COLUMNS: &str = "id, title, creator, publication_year, category";

#[derive(Clone)]
pub struct ItemsRepository {
    pool: Pool<Sqlite>,
}

impl ItemsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all items
    pub async fn list(&self) -> AppResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT {} FROM items ORDER BY id",
            ITEM_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// Get item by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(&format!("SELECT {} FROM items WHERE id = ?", ITEM_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))
    }

    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    /// Create a new item
    pub async fn create(&self, item: &ItemFields) -> AppResult<Item> {
        let row = sqlx::query_as::<_, Item>(&format!(
            r#"
            INSERT INTO items (title, creator, publication_year, category)
            VALUES (?, ?, ?, ?)
            RETURNING {}
            "#,
            ITEM_COLUMNS
        ))
        .bind(&item.title)
        .bind(&item.creator)
        .bind(item.publication_year)
        .bind(item.category.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite every mutable column of an item
    pub async fn replace(&self, id: i64, item: &ItemFields) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(&format!(
            r#"
            UPDATE items
            SET title = ?, creator = ?, publication_year = ?, category = ?
            WHERE id = ?
            RETURNING {}
            "#,
            ITEM_COLUMNS
        ))
        .bind(&item.title)
        .bind(&item.creator)
        .bind(item.publication_year)
        .bind(item.category.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))
    }

    /// Delete an item
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Item with id {} not found", id)));
        }
        Ok(())
    }

    #[cfg(test)]
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::AppError,
        models::{category::Category, item::ItemFields},
        repository::test_support::memory_repository,
    };

    fn dune() -> ItemFields {
        ItemFields {
            title: "Dune".into(),
            creator: "Herbert".into(),
            publication_year: Some(1965),
            category: Category::Standard,
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repo = memory_repository().await;
        let created = repo.items.create(&dune()).await.unwrap();

        let fetched = repo.items.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.fields(), dune());
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let repo = memory_repository().await;
        let a = repo.items.create(&dune()).await.unwrap();
        let b = repo.items.create(&dune()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn unknown_category_round_trips() {
        let repo = memory_repository().await;
        let fields = ItemFields {
            category: Category::Unknown("atlas".into()),
            ..dune()
        };
        let created = repo.items.create(&fields).await.unwrap();
        let fetched = repo.items.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.category, Category::Unknown("atlas".into()));
    }

    #[tokio::test]
    async fn replace_clears_omitted_optional_fields() {
        let repo = memory_repository().await;
        let created = repo.items.create(&dune()).await.unwrap();

        let replacement = ItemFields {
            title: "Dune Messiah".into(),
            creator: "Frank Herbert".into(),
            publication_year: None,
            category: Category::Express,
        };
        repo.items.replace(created.id, &replacement).await.unwrap();
        repo.items.replace(created.id, &replacement).await.unwrap();

        let fetched = repo.items.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.fields(), replacement);
    }

    #[tokio::test]
    async fn absent_id_is_not_found() {
        let repo = memory_repository().await;
        assert!(matches!(repo.items.get_by_id(42).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            repo.items.replace(42, &dune()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(repo.items.delete(42).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let repo = memory_repository().await;
        let created = repo.items.create(&dune()).await.unwrap();

        repo.items.delete(created.id).await.unwrap();
        assert!(matches!(
            repo.items.get_by_id(created.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            repo.items.delete(created.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_reflects_creates_and_deletes() {
        let repo = memory_repository().await;
        let mut ids = Vec::new();
        for year in 1965..1970 {
            let fields = ItemFields {
                publication_year: Some(year),
                ..dune()
            };
            ids.push(repo.items.create(&fields).await.unwrap().id);
        }
        repo.items.delete(ids[1]).await.unwrap();
        repo.items.delete(ids[3]).await.unwrap();

        let items = repo.items.list().await.unwrap();
        assert_eq!(items.len(), 3);
        let years: Vec<_> = items.iter().map(|i| i.publication_year).collect();
        assert_eq!(years, vec![Some(1965), Some(1967), Some(1969)]);
        assert_eq!(repo.items.count().await.unwrap(), 3);
    }
}
