//! Borrowers repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::borrower::{Borrower, BorrowerFields},
};

#[derive(Clone)]
pub struct BorrowersRepository {
    pool: Pool<Sqlite>,
}

impl BorrowersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all borrowers
    pub async fn list(&self) -> AppResult<Vec<Borrower>> {
        let borrowers = sqlx::query_as::<_, Borrower>(
            "SELECT id, name, city, age FROM borrowers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(borrowers)
    }

    /// Get borrower by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Borrower> {
        sqlx::query_as::<_, Borrower>("SELECT id, name, city, age FROM borrowers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrower with id {} not found", id)))
    }

    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM borrowers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    /// Create a new borrower
    pub async fn create(&self, borrower: &BorrowerFields) -> AppResult<Borrower> {
        let row = sqlx::query_as::<_, Borrower>(
            r#"
            INSERT INTO borrowers (name, city, age)
            VALUES (?, ?, ?)
            RETURNING id, name, city, age
            "#,
        )
        .bind(&borrower.name)
        .bind(&borrower.city)
        .bind(borrower.age)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite every mutable column of a borrower
    pub async fn replace(&self, id: i64, borrower: &BorrowerFields) -> AppResult<Borrower> {
        sqlx::query_as::<_, Borrower>(
            r#"
            UPDATE borrowers SET name = ?, city = ?, age = ?
            WHERE id = ?
            RETURNING id, name, city, age
            "#,
        )
        .bind(&borrower.name)
        .bind(&borrower.city)
        .bind(borrower.age)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Borrower with id {} not found", id)))
    }

    /// Delete a borrower
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM borrowers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Borrower with id {} not found", id)));
        }
        Ok(())
    }

    #[cfg(test)]
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM borrowers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
