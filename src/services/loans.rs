//! Loan management service

use crate::{
    error::{AppError, AppResult},
    models::loan::{Loan, LoanFields, LoanPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        self.repository.loans.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Loan> {
        self.repository.loans.get_by_id(id).await
    }

    /// Record a new loan
    pub async fn create(&self, payload: LoanPayload) -> AppResult<Loan> {
        let fields = payload.into_fields()?;
        self.check_references(&fields).await?;
        let loan = self.repository.loans.create(&fields).await?;
        tracing::info!(
            "Loans: created loan id={} borrower={} item={}",
            loan.id,
            loan.borrower_id,
            loan.item_id
        );
        Ok(loan)
    }

    /// Overwrite a loan record, e.g. to set its return date
    pub async fn replace(&self, id: i64, payload: LoanPayload) -> AppResult<Loan> {
        let fields = payload.into_fields()?;
        // An unknown loan id is NotFound even when its references are also bad
        self.repository.loans.get_by_id(id).await?;
        self.check_references(&fields).await?;
        let loan = self.repository.loans.replace(id, &fields).await?;
        tracing::info!("Loans: replaced loan id={}", id);
        Ok(loan)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.loans.delete(id).await?;
        tracing::info!("Loans: deleted loan id={}", id);
        Ok(())
    }

    async fn check_references(&self, fields: &LoanFields) -> AppResult<()> {
        if !self.repository.borrowers.exists(fields.borrower_id).await? {
            return Err(AppError::Validation(format!(
                "borrower_id: borrower {} does not exist",
                fields.borrower_id
            )));
        }
        if !self.repository.items.exists(fields.item_id).await? {
            return Err(AppError::Validation(format!(
                "item_id: item {} does not exist",
                fields.item_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{borrower::BorrowerPayload, item::ItemPayload},
        repository::test_support::memory_repository,
        services::Services,
    };

    async fn seeded() -> (Services, i64, i64) {
        let services = Services::new(memory_repository().await);
        let item = services
            .catalog
            .create_item(ItemPayload {
                title: Some("Dune".into()),
                creator: Some("Herbert".into()),
                publication_year: Some(1965),
                category: Some("1".into()),
            })
            .await
            .unwrap();
        let borrower = services
            .borrowers
            .create(BorrowerPayload {
                name: Some("Ada".into()),
                city: Some("London".into()),
                age: None,
            })
            .await
            .unwrap();
        (services, borrower.id, item.id)
    }

    fn loan(borrower_id: i64, item_id: i64) -> LoanPayload {
        LoanPayload {
            borrower_id: Some(borrower_id),
            item_id: Some(item_id),
            loan_date: Some("2024-05-01".into()),
            return_date: None,
        }
    }

    #[tokio::test]
    async fn dangling_references_are_validation_errors() {
        let (services, borrower_id, item_id) = seeded().await;

        let err = services.loans.create(loan(borrower_id + 10, item_id)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("borrower_id")));

        let err = services.loans.create(loan(borrower_id, item_id + 10)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("item_id")));

        assert!(services.loans.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replace_with_dangling_reference_keeps_stored_loan() {
        let (services, borrower_id, item_id) = seeded().await;
        let created = services.loans.create(loan(borrower_id, item_id)).await.unwrap();

        let moved = LoanPayload {
            return_date: Some("2024-05-09".into()),
            ..loan(borrower_id + 10, item_id)
        };
        let err = services.loans.replace(created.id, moved).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("borrower_id")));

        let err = services
            .loans
            .replace(created.id, loan(borrower_id, item_id + 10))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("item_id")));

        assert_eq!(services.loans.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn replace_unknown_loan_is_not_found() {
        let (services, borrower_id, item_id) = seeded().await;
        assert!(matches!(
            services.loans.replace(99, loan(borrower_id, item_id)).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn referenced_rows_cannot_be_deleted() {
        let (services, borrower_id, item_id) = seeded().await;
        let created = services.loans.create(loan(borrower_id, item_id)).await.unwrap();

        assert!(matches!(
            services.catalog.delete_item(item_id).await,
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(
            services.borrowers.delete(borrower_id).await,
            Err(AppError::Conflict(_))
        ));
        services.catalog.get_item(item_id).await.unwrap();
        services.borrowers.get_by_id(borrower_id).await.unwrap();

        services.loans.delete(created.id).await.unwrap();
        services.catalog.delete_item(item_id).await.unwrap();
        services.borrowers.delete(borrower_id).await.unwrap();
    }

    #[tokio::test]
    async fn invalid_create_leaves_store_untouched() {
        let (services, _, _) = seeded().await;
        let err = services
            .catalog
            .create_item(ItemPayload {
                title: Some("Untitled".into()),
                creator: Some("Nobody".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(services.catalog.list_items().await.unwrap().len(), 1);
    }
}
