// file: src/exporter/json.rs
// description: json export utilities for fetched feed records
// reference: internal export format

use crate::error::Result;
use crate::models::IocRecord;
use chrono::Utc;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub ioc_type: String,
    pub total_records: usize,
    pub files: Vec<String>,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Drain `records` into `<ioc_type>_records.json` and write a manifest
    /// alongside it. Compact mode writes one JSON object per line; pretty
    /// mode writes a formatted array.
    pub fn export_records<I>(
        &self,
        ioc_type: &str,
        records: I,
        pretty: bool,
    ) -> Result<ExportManifest>
    where
        I: IntoIterator<Item = Result<IocRecord>>,
    {
        let records_file = format!("{}_records.json", ioc_type.replace([':', '/'], "_"));
        let records_path = self.output_dir.join(&records_file);

        info!("Exporting {} feed records to {:?}", ioc_type, records_path);

        let mut total_records = 0;
        let mut writer = BufWriter::new(File::create(&records_path)?);

        if pretty {
            let collected: Vec<IocRecord> = records
                .into_iter()
                .collect::<Result<Vec<_>>>()?;
            total_records = collected.len();
            serde_json::to_writer_pretty(&mut writer, &collected)?;
            writer.write_all(b"\n")?;
        } else {
            for record in records {
                let record = record?;
                serde_json::to_writer(&mut writer, &record)?;
                writer.write_all(b"\n")?;
                total_records += 1;
            }
        }
        writer.flush()?;

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            ioc_type: ioc_type.to_string(),
            total_records,
            files: vec![records_file],
        };

        let manifest_path = self.output_dir.join("manifest.json");
        let manifest_json = serde_json::to_string_pretty(&manifest)?;
        fs::write(&manifest_path, manifest_json)?;

        info!(
            "Export complete: {} records, manifest at {:?}",
            manifest.total_records, manifest_path
        );
        Ok(manifest)
    }
}
