//! Borrower management service

use crate::{
    error::{AppError, AppResult},
    models::borrower::{Borrower, BorrowerPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowersService {
    repository: Repository,
}

impl BorrowersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Borrower>> {
        self.repository.borrowers.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Borrower> {
        self.repository.borrowers.get_by_id(id).await
    }

    pub async fn create(&self, payload: BorrowerPayload) -> AppResult<Borrower> {
        let fields = payload.into_fields()?;
        let borrower = self.repository.borrowers.create(&fields).await?;
        tracing::info!("Borrowers: created borrower id={}", borrower.id);
        Ok(borrower)
    }

    pub async fn replace(&self, id: i64, payload: BorrowerPayload) -> AppResult<Borrower> {
        let fields = payload.into_fields()?;
        let borrower = self.repository.borrowers.replace(id, &fields).await?;
        tracing::info!("Borrowers: replaced borrower id={}", id);
        Ok(borrower)
    }

    /// Delete a borrower who holds no loan records
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let loans = self.repository.loans.count_for_borrower(id).await?;
        if loans > 0 {
            tracing::warn!("Borrowers: refusing to delete borrower id={} ({} loans)", id, loans);
            return Err(AppError::Conflict(format!(
                "Borrower {} is referenced by {} loan(s)",
                id, loans
            )));
        }
        self.repository.borrowers.delete(id).await?;
        tracing::info!("Borrowers: deleted borrower id={}", id);
        Ok(())
    }
}
