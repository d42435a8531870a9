// file: src/connector/mod.rs
// description: dataset connector capability trait and supporting contract types
// reference: host data-platform connector interface

pub mod threatfox;

pub use threatfox::ThreatFoxConnector;

use crate::error::Result;
use crate::feed::RecordIter;
use crate::models::IocRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Column types the hosting platform understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Int,
    BigInt,
    Float,
    Double,
    Date,
    Boolean,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

/// Schema a connector may declare up front. A connector that returns no
/// schema leaves the host to infer one from the first yielded records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    pub columns: Vec<Column>,
}

/// Partitioning scheme description for partitioned datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partitioning {
    pub dimensions: Vec<String>,
}

/// Row sink for connectors with write support.
pub trait RecordWriter: Send {
    fn write_row(&mut self, record: &IocRecord) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}

/// Capability set a dataset connector exposes to the hosting runtime.
/// Operations a connector does not support return
/// [`ConnectorError::Unsupported`](crate::error::ConnectorError::Unsupported)
/// rather than panicking, so the host can surface a clean failure.
#[async_trait]
pub trait DatasetConnector: Send + Sync {
    /// Schema of the rows this connector generates, or `None` to let the
    /// host infer it.
    fn get_read_schema(&self) -> Result<Option<Schema>>;

    /// The main reading method: a lazy, finite, non-restartable iterator
    /// over the dataset's records, optionally capped at `records_limit`.
    async fn generate_rows(&self, records_limit: Option<usize>) -> Result<RecordIter>;

    /// Writer for datasets with write support.
    fn get_writer(&self) -> Result<Box<dyn RecordWriter>>;

    /// Partitioning scheme of the dataset.
    fn get_partitioning(&self) -> Result<Partitioning>;

    /// Identifiers of the dataset's partitions.
    fn list_partitions(&self) -> Result<Vec<String>>;

    /// Whether the given partition exists.
    fn partition_exists(&self, partition_id: &str) -> Result<bool>;

    /// Total record count, for connectors that can answer cheaply.
    fn get_records_count(&self) -> Result<usize>;
}
