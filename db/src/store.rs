//! Persistence gateway for the metrics collection.
//!
//! All store access goes through the free functions here: appending one
//! sample, querying a closed timestamp interval, and the wholesale
//! replace/dedupe path used by the maintenance tool.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::collections::HashSet;
use thiserror::Error;

use crate::generator::Sample;
use crate::models::metrics_sample::{ActiveModel, Column, Entity, Model};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to metrics store: {0}")]
    Connection(#[source] DbErr),
    #[error("metrics store write failed: {0}")]
    Write(#[source] DbErr),
    #[error("metrics store query failed: {0}")]
    Query(#[source] DbErr),
}

/// Counts reported by [`deduplicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupeOutcome {
    pub scanned: usize,
    pub kept: usize,
    pub removed: usize,
}

/// Appends one sample to the collection.
pub async fn insert_sample(
    db: &DatabaseConnection,
    sample: Sample,
) -> Result<Model, StoreError> {
    sample
        .into_active_model()
        .insert(db)
        .await
        .map_err(StoreError::Write)
}

/// Returns every sample whose timestamp falls within the closed interval
/// `[start, end]`, ascending by timestamp. An empty match is an empty vec,
/// not an error.
pub async fn query_range(
    db: &DatabaseConnection,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<Model>, StoreError> {
    Entity::find()
        .filter(Column::Timestamp.gte(start))
        .filter(Column::Timestamp.lte(end))
        .order_by_asc(Column::Timestamp)
        .all(db)
        .await
        .map_err(StoreError::Query)
}

/// Replaces the entire collection contents with `rows`, keeping their ids.
///
/// Runs inside a transaction, so a crash mid-replace cannot leave the
/// collection empty or half-populated.
pub async fn replace_all(
    db: &DatabaseConnection,
    rows: Vec<Model>,
) -> Result<(), StoreError> {
    let txn = db.begin().await.map_err(StoreError::Write)?;

    Entity::delete_many()
        .exec(&txn)
        .await
        .map_err(StoreError::Write)?;

    // insert_many rejects an empty batch.
    if !rows.is_empty() {
        Entity::insert_many(rows.into_iter().map(keep_id))
            .exec(&txn)
            .await
            .map_err(StoreError::Write)?;
    }

    txn.commit().await.map_err(StoreError::Write)
}

/// Collapses samples that share a whole-second timestamp, keeping the first
/// row per second in the store's natural iteration order.
///
/// Running it again on an already-deduplicated collection is a no-op.
pub async fn deduplicate(db: &DatabaseConnection) -> Result<DedupeOutcome, StoreError> {
    let rows = Entity::find().all(db).await.map_err(StoreError::Query)?;
    let scanned = rows.len();

    let mut seen: HashSet<i64> = HashSet::new();
    let mut representatives: Vec<Model> = Vec::with_capacity(scanned);
    for row in rows {
        // Grouping key: the timestamp truncated to whole seconds.
        if seen.insert(row.timestamp.timestamp()) {
            representatives.push(row);
        }
    }

    let kept = representatives.len();
    let removed = scanned - kept;

    if removed > 0 {
        replace_all(db, representatives).await?;
    }

    tracing::info!(scanned, kept, removed, "deduplicated metrics collection");
    Ok(DedupeOutcome {
        scanned,
        kept,
        removed,
    })
}

fn keep_id(m: Model) -> ActiveModel {
    ActiveModel {
        id: Set(m.id),
        timestamp: Set(m.timestamp),
        cpu_usage: Set(m.cpu_usage),
        ram_usage: Set(m.ram_usage),
        temperature: Set(m.temperature),
        storage_usage: Set(m.storage_usage),
    }
}
