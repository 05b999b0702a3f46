use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use models::errors::StorageError;
use models::tender::{self, Tender};

/// Persistence primitives for tenders, keyed by `id`.
#[async_trait]
pub trait TenderRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Tender>, StorageError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Tender>, StorageError>;
    /// Insert when `id` is unset or unknown (a fresh id is assigned), replace otherwise.
    async fn save(&self, tender: Tender) -> Result<Tender, StorageError>;
    /// Absent ids are ignored.
    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmTenderRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmTenderRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl TenderRepository for SeaOrmTenderRepository {
    async fn find_all(&self) -> Result<Vec<Tender>, StorageError> {
        let rows = tender::Entity::find()
            .order_by_asc(tender::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Tender::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tender>, StorageError> {
        let found = tender::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Tender::from))
    }

    async fn save(&self, tender: Tender) -> Result<Tender, StorageError> {
        let existing = match tender.id {
            Some(id) => tender::Entity::find_by_id(id).one(&self.db).await?.map(|m| m.id),
            None => None,
        };
        let saved = match existing {
            Some(id) => tender.into_active_model_with_id(id).update(&self.db).await?,
            None => tender.into_new_active_model().insert(&self.db).await?,
        };
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StorageError> {
        tender::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i64, Tender>,
        last_id: i64,
    }

    /// Same contract as the SeaORM repository; ids start at 1 and are never reused.
    #[derive(Default)]
    pub struct MockTenderRepository {
        table: Mutex<Table>,
    }

    impl MockTenderRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl TenderRepository for MockTenderRepository {
        async fn find_all(&self) -> Result<Vec<Tender>, StorageError> {
            let table = self.table.lock().await;
            Ok(table.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Tender>, StorageError> {
            let table = self.table.lock().await;
            Ok(table.rows.get(&id).cloned())
        }

        async fn save(&self, mut tender: Tender) -> Result<Tender, StorageError> {
            let mut table = self.table.lock().await;
            let id = match tender.id {
                Some(id) if table.rows.contains_key(&id) => id,
                _ => {
                    table.last_id += 1;
                    table.last_id
                }
            };
            tender.id = Some(id);
            table.rows.insert(id, tender.clone());
            Ok(tender)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), StorageError> {
            let mut table = self.table.lock().await;
            table.rows.remove(&id);
            Ok(())
        }
    }

    /// Repository whose every call fails, for exercising storage-fault paths.
    #[derive(Default)]
    pub struct FailingTenderRepository;

    #[async_trait]
    impl TenderRepository for FailingTenderRepository {
        async fn find_all(&self) -> Result<Vec<Tender>, StorageError> {
            Err(StorageError("connection refused".into()))
        }

        async fn find_by_id(&self, _id: i64) -> Result<Option<Tender>, StorageError> {
            Err(StorageError("connection refused".into()))
        }

        async fn save(&self, _tender: Tender) -> Result<Tender, StorageError> {
            Err(StorageError("connection refused".into()))
        }

        async fn delete_by_id(&self, _id: i64) -> Result<(), StorageError> {
            Err(StorageError("connection refused".into()))
        }
    }
}
