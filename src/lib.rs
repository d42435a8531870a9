// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod connector;
pub mod error;
pub mod exporter;
pub mod feed;
pub mod models;
pub mod utils;

pub use config::{Config, ExportConfig, FeedConfig};
pub use connector::{
    Column, ColumnType, DatasetConnector, Partitioning, RecordWriter, Schema, ThreatFoxConnector,
};
pub use error::{ConnectorError, Result};
pub use exporter::{ExportManifest, JsonExporter};
pub use feed::{FeedDownload, HttpDownloader, RecordIter};
pub use models::{COLUMN_NAMES, IocRecord};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _record = IocRecord::default();
        assert_eq!(COLUMN_NAMES.len(), 14);
    }
}
