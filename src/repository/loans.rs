//! Loans repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::loan::{Loan, LoanFields},
};

const LOAN_COLUMNS: &str = "id, borrower_id, item_id, loan_date, return_date";

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Sqlite>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all loans, outstanding and returned
    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>(&format!(
            "SELECT {} FROM loans ORDER BY id",
            LOAN_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(loans)
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>(&format!("SELECT {} FROM loans WHERE id = ?", LOAN_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// Create a new loan
    pub async fn create(&self, loan: &LoanFields) -> AppResult<Loan> {
        let row = sqlx::query_as::<_, Loan>(&format!(
            r#"
            INSERT INTO loans (borrower_id, item_id, loan_date, return_date)
            VALUES (?, ?, ?, ?)
            RETURNING {}
            "#,
            LOAN_COLUMNS
        ))
        .bind(loan.borrower_id)
        .bind(loan.item_id)
        .bind(loan.loan_date)
        .bind(loan.return_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite every mutable column of a loan
    pub async fn replace(&self, id: i64, loan: &LoanFields) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>(&format!(
            r#"
            UPDATE loans
            SET borrower_id = ?, item_id = ?, loan_date = ?, return_date = ?
            WHERE id = ?
            RETURNING {}
            "#,
            LOAN_COLUMNS
        ))
        .bind(loan.borrower_id)
        .bind(loan.item_id)
        .bind(loan.loan_date)
        .bind(loan.return_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// Delete a loan
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM loans WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Loan with id {} not found", id)));
        }
        Ok(())
    }

    #[cfg(test)]
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Number of loans (any state) pointing at an item
    pub async fn count_for_item(&self, item_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans WHERE item_id = ?")
            .bind(item_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Number of loans (any state) pointing at a borrower
    pub async fn count_for_borrower(&self, borrower_id: i64) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans WHERE borrower_id = ?")
            .bind(borrower_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        error::AppError,
        models::{
            borrower::BorrowerFields, category::Category, item::ItemFields, loan::LoanFields,
        },
        repository::{test_support::memory_repository, Repository},
    };

    async fn seed(repo: &Repository) -> (i64, i64) {
        let item = repo
            .items
            .create(&ItemFields {
                title: "Dune".into(),
                creator: "Herbert".into(),
                publication_year: None,
                category: Category::Short,
            })
            .await
            .unwrap();
        let borrower = repo
            .borrowers
            .create(&BorrowerFields {
                name: "Ada".into(),
                city: "London".into(),
                age: None,
            })
            .await
            .unwrap();
        (borrower.id, item.id)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn create_return_and_count_references() {
        let repo = memory_repository().await;
        let (borrower_id, item_id) = seed(&repo).await;

        let fields = LoanFields {
            borrower_id,
            item_id,
            loan_date: date(2024, 3, 1),
            return_date: None,
        };
        let loan = repo.loans.create(&fields).await.unwrap();
        assert_eq!(loan.return_date, None);
        assert_eq!(repo.loans.get_by_id(loan.id).await.unwrap(), loan);

        let returned = LoanFields {
            return_date: Some(date(2024, 3, 4)),
            ..fields
        };
        let loan = repo.loans.replace(loan.id, &returned).await.unwrap();
        assert_eq!(loan.return_date, Some(date(2024, 3, 4)));

        assert_eq!(repo.loans.count_for_item(item_id).await.unwrap(), 1);
        assert_eq!(repo.loans.count_for_borrower(borrower_id).await.unwrap(), 1);
        assert_eq!(repo.loans.count_for_item(item_id + 100).await.unwrap(), 0);

        repo.loans.delete(loan.id).await.unwrap();
        assert!(matches!(repo.loans.delete(loan.id).await, Err(AppError::NotFound(_))));
        assert!(repo.loans.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let repo = memory_repository().await;
        let fields = LoanFields {
            borrower_id: 7,
            item_id: 9,
            loan_date: date(2024, 1, 1),
            return_date: None,
        };
        assert!(matches!(
            repo.loans.create(&fields).await,
            Err(AppError::Database(_))
        ));
        assert_eq!(repo.loans.count().await.unwrap(), 0);
    }
}
