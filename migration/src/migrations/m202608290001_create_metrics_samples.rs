use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum MetricsSamples {
    Table,
    Id,
    Timestamp,
    CpuUsage,
    RamUsage,
    Temperature,
    StorageUsage,
}

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202608290001_create_metrics_samples"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MetricsSamples::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MetricsSamples::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MetricsSamples::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MetricsSamples::CpuUsage)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MetricsSamples::RamUsage)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MetricsSamples::Temperature)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MetricsSamples::StorageUsage)
                            .double()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MetricsSamples::Table).to_owned())
            .await
    }
}
