// file: src/connector/threatfox.rs
// description: ThreatFox feed connector implementation
// reference: https://threatfox.abuse.ch/export/

use crate::config::FeedConfig;
use crate::connector::{DatasetConnector, Partitioning, RecordWriter, Schema};
use crate::error::{ConnectorError, Result};
use crate::feed::{self, FeedDownload, HttpDownloader, RecordIter};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Connector over the ThreatFox full CSV export. Each read pass downloads
/// the zip archive for the configured `ioc_type`, extracts the single
/// expected member and streams its records. Nothing is cached between
/// passes.
pub struct ThreatFoxConnector {
    config: FeedConfig,
    downloader: Arc<dyn FeedDownload>,
}

impl ThreatFoxConnector {
    pub fn new(config: FeedConfig) -> Result<Self> {
        let downloader = HttpDownloader::new(config.verify_tls, config.timeout_secs)?;
        Ok(Self::with_downloader(config, Arc::new(downloader)))
    }

    /// Build the connector with an alternative transport.
    pub fn with_downloader(config: FeedConfig, downloader: Arc<dyn FeedDownload>) -> Self {
        Self { config, downloader }
    }

    pub fn ioc_type(&self) -> &str {
        &self.config.ioc_type
    }

    /// URL of the full export for the configured ioc_type. The ioc_type is
    /// used verbatim as a path segment, matching the upstream layout.
    pub fn export_url(&self) -> String {
        format!(
            "{}/{}/full/",
            self.config.base_url.trim_end_matches('/'),
            self.config.ioc_type
        )
    }

    /// Name of the CSV member the export archive is expected to contain.
    pub fn member_name(&self) -> String {
        format!("full_{}.csv", self.config.ioc_type)
    }
}

#[async_trait]
impl DatasetConnector for ThreatFoxConnector {
    fn get_read_schema(&self) -> Result<Option<Schema>> {
        // No declared schema; the host infers one from the yielded records.
        Ok(None)
    }

    async fn generate_rows(&self, records_limit: Option<usize>) -> Result<RecordIter> {
        let url = self.export_url();
        info!("Reading ThreatFox {} feed from {}", self.config.ioc_type, url);

        let body = self.downloader.fetch(&url).await?;
        let text = feed::extract_member(&body, &self.member_name())?;

        Ok(feed::parse_records(&text, records_limit))
    }

    fn get_writer(&self) -> Result<Box<dyn RecordWriter>> {
        Err(ConnectorError::Unsupported("get_writer"))
    }

    fn get_partitioning(&self) -> Result<Partitioning> {
        Err(ConnectorError::Unsupported("get_partitioning"))
    }

    fn list_partitions(&self) -> Result<Vec<String>> {
        // The feed is a single unpartitioned dataset.
        Ok(Vec::new())
    }

    fn partition_exists(&self, _partition_id: &str) -> Result<bool> {
        Err(ConnectorError::Unsupported("partition_exists"))
    }

    fn get_records_count(&self) -> Result<usize> {
        Err(ConnectorError::Unsupported("get_records_count"))
    }
}
