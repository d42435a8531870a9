// file: src/feed/archive.rs
// description: in-memory zip member extraction and UTF-8 decoding
// reference: https://docs.rs/zip

use crate::error::{ConnectorError, Result};
use std::io::{Cursor, Read};
use tracing::debug;
use zip::ZipArchive;

/// Open `body` as a zip archive and return the decoded text of the named
/// member. The archive is never written to disk; the whole member is read
/// into memory before decoding.
pub fn extract_member(body: &[u8], member: &str) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(body))
        .map_err(|e| ConnectorError::Archive(format!("invalid zip archive: {}", e)))?;

    let mut file = archive.by_name(member).map_err(|e| {
        ConnectorError::Archive(format!("member {} not found in archive: {}", member, e))
    })?;

    let mut raw = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut raw)
        .map_err(|e| ConnectorError::Archive(format!("failed to read member {}: {}", member, e)))?;

    debug!("Extracted member {} ({} bytes)", member, raw.len());

    Ok(String::from_utf8(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConnectorError;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    fn zip_with_member(member: &str, content: &[u8]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        writer.start_file(member, options).unwrap();
        writer.write_all(content).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extract_named_member() {
        let body = zip_with_member("full_ip.csv", b"line one\nline two\n");
        let text = extract_member(&body, "full_ip.csv").unwrap();
        assert_eq!(text, "line one\nline two\n");
    }

    #[test]
    fn test_invalid_archive() {
        let result = extract_member(b"definitely not a zip", "full_ip.csv");
        assert!(matches!(result, Err(ConnectorError::Archive(_))));
    }

    #[test]
    fn test_missing_member() {
        let body = zip_with_member("other.csv", b"data");
        let result = extract_member(&body, "full_ip.csv");

        match result {
            Err(ConnectorError::Archive(msg)) => assert!(msg.contains("full_ip.csv")),
            other => panic!("expected archive error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_utf8_member() {
        let body = zip_with_member("full_ip.csv", &[0xff, 0xfe, 0x00, 0x01]);
        let result = extract_member(&body, "full_ip.csv");
        assert!(matches!(result, Err(ConnectorError::Encoding(_))));
    }
}
