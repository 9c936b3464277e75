//! Catalog (item) management service

use crate::{
    error::{AppError, AppResult},
    models::item::{Item, ItemPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_items(&self) -> AppResult<Vec<Item>> {
        self.repository.items.list().await
    }

    pub async fn get_item(&self, id: i64) -> AppResult<Item> {
        self.repository.items.get_by_id(id).await
    }

    /// Validate and store a new item
    pub async fn create_item(&self, payload: ItemPayload) -> AppResult<Item> {
        let fields = payload.into_fields()?;
        let item = self.repository.items.create(&fields).await?;
        tracing::info!(
            "Catalog: created item id={} category={}",
            item.id,
            item.category
        );
        Ok(item)
    }

    /// Validate and overwrite an existing item
    pub async fn replace_item(&self, id: i64, payload: ItemPayload) -> AppResult<Item> {
        let fields = payload.into_fields()?;
        let item = self.repository.items.replace(id, &fields).await?;
        tracing::info!("Catalog: replaced item id={}", id);
        Ok(item)
    }

    /// Delete an item no loan refers to
    pub async fn delete_item(&self, id: i64) -> AppResult<()> {
        let loans = self.repository.loans.count_for_item(id).await?;
        if loans > 0 {
            tracing::warn!("Catalog: refusing to delete item id={} ({} loans)", id, loans);
            return Err(AppError::Conflict(format!(
                "Item {} is referenced by {} loan(s)",
                id, loans
            )));
        }
        self.repository.items.delete(id).await?;
        tracing::info!("Catalog: deleted item id={}", id);
        Ok(())
    }
}
