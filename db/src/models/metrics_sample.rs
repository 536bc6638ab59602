use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One persisted telemetry sample. Rows are append-only: nothing updates a
/// sample in place, the dedupe routine rewrites the table wholesale instead.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "metrics_samples")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_serializing)]
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub cpu_usage: f64,     // 0..100, one decimal
    pub ram_usage: f64,     // 0..100, one decimal
    pub temperature: f64,   // 20..35, one decimal
    pub storage_usage: f64, // 0..100, one decimal
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
