//! Create `tenders` table.
//!
//! One row per procurement record; every attribute except the key is nullable
//! apart from the budget, which defaults to zero.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tenders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tenders::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_null(Tenders::ProcurementNumber))
                    .col(string_null(Tenders::SubjectOfProcurement))
                    .col(string_null(Tenders::ProcuringEntity))
                    .col(string_null(Tenders::Status))
                    .col(timestamp_with_time_zone_null(Tenders::TenderDeadline))
                    .col(double(Tenders::BudgetAmount).default(0.0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tenders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tenders {
    Table,
    Id,
    ProcurementNumber,
    SubjectOfProcurement,
    ProcuringEntity,
    Status,
    TenderDeadline,
    BudgetAmount,
}
