use std::sync::Arc;
use tracing::{debug, instrument};

use models::errors::StorageError;
use models::tender::Tender;

use crate::tender::repository::TenderRepository;
use crate::tender::stats::TenderStats;

/// Application service for tenders.
///
/// Forwards each call to the repository unchanged; it is the place where
/// business rules would go without touching the HTTP layer.
pub struct TenderService<R: TenderRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: TenderRepository + ?Sized> TenderService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All stored tenders, in storage order.
    ///
    /// # Examples
    /// ```
    /// use service::tender::{repository::mock::MockTenderRepository, TenderService};
    /// use std::sync::Arc;
    /// let svc = TenderService::new(Arc::new(MockTenderRepository::new()));
    /// let all = tokio_test::block_on(svc.find_all_tenders()).unwrap();
    /// assert!(all.is_empty());
    /// ```
    #[instrument(skip(self))]
    pub async fn find_all_tenders(&self) -> Result<Vec<Tender>, StorageError> {
        let all = self.repo.find_all().await?;
        debug!(count = all.len(), "tenders listed");
        Ok(all)
    }

    #[instrument(skip(self))]
    pub async fn find_tender_by_id(&self, id: i64) -> Result<Option<Tender>, StorageError> {
        self.repo.find_by_id(id).await
    }

    /// Insert or replace, depending on whether `tender.id` names a stored record.
    ///
    /// # Examples
    /// ```
    /// use models::tender::Tender;
    /// use service::tender::{repository::mock::MockTenderRepository, TenderService};
    /// use std::sync::Arc;
    /// let svc = TenderService::new(Arc::new(MockTenderRepository::new()));
    /// let draft = Tender { procurement_number: Some("PN-1".into()), ..Default::default() };
    /// let saved = tokio_test::block_on(svc.save_tender(draft)).unwrap();
    /// assert!(saved.id.is_some());
    /// ```
    #[instrument(skip(self, tender), fields(id = ?tender.id))]
    pub async fn save_tender(&self, tender: Tender) -> Result<Tender, StorageError> {
        self.repo.save(tender).await
    }

    #[instrument(skip(self))]
    pub async fn delete_tender_by_id(&self, id: i64) -> Result<(), StorageError> {
        self.repo.delete_by_id(id).await
    }

    /// Dashboard summary over every stored tender.
    #[instrument(skip(self))]
    pub async fn summarize_tenders(&self) -> Result<TenderStats, StorageError> {
        let all = self.repo.find_all().await?;
        Ok(TenderStats::from_tenders(&all))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tender::repository::mock::{FailingTenderRepository, MockTenderRepository};

    fn svc() -> TenderService<dyn TenderRepository> {
        let repo: Arc<dyn TenderRepository> = Arc::new(MockTenderRepository::new());
        TenderService::new(repo)
    }

    #[tokio::test]
    async fn save_then_find_round_trips() {
        let svc = svc();
        let saved = svc
            .save_tender(Tender { procurement_number: Some("PN-1".into()), budget_amount: 1000.0, ..Default::default() })
            .await
            .unwrap();
        let id = saved.id.expect("id assigned");
        assert_eq!(svc.find_tender_by_id(id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn unknown_id_is_absent_not_an_error() {
        assert_eq!(svc().find_tender_by_id(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let svc = svc();
        let saved = svc.save_tender(Tender::default()).await.unwrap();
        let id = saved.id.unwrap();
        svc.delete_tender_by_id(id).await.unwrap();
        assert_eq!(svc.find_tender_by_id(id).await.unwrap(), None);
        svc.delete_tender_by_id(id).await.unwrap();
        assert!(svc.find_all_tenders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn summary_reflects_stored_tenders() {
        let svc = svc();
        svc.save_tender(Tender { status: Some("Awarded".into()), budget_amount: 10.0, ..Default::default() })
            .await
            .unwrap();
        svc.save_tender(Tender { budget_amount: 30.0, ..Default::default() }).await.unwrap();
        let stats = svc.summarize_tenders().await.unwrap();
        assert_eq!(stats.total_tenders, 2);
        assert_eq!(stats.awarded_tenders, 1);
        assert_eq!(stats.average_budget, 20.0);
    }

    #[tokio::test]
    async fn storage_faults_pass_through_untranslated() {
        let svc = TenderService::new(Arc::new(FailingTenderRepository));
        let err = svc.find_all_tenders().await.unwrap_err();
        assert_eq!(err.to_string(), "storage error: connection refused");
        assert!(svc.find_tender_by_id(1).await.is_err());
        assert!(svc.save_tender(Tender::default()).await.is_err());
        assert!(svc.delete_tender_by_id(1).await.is_err());
    }
}
