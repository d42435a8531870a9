// file: src/feed/parser.rs
// description: comment filtering, feed CSV dialect and lazy record iteration
// reference: https://docs.rs/csv

use crate::error::Result;
use crate::models::IocRecord;
use csv::{ReaderBuilder, StringRecordsIntoIter, Trim};
use lazy_static::lazy_static;
use regex::Regex;
use std::io::Cursor;

lazy_static! {
    // The export pads each delimiter with a space before the next quoted
    // field. The csv reader only honors a quote in the first byte of a
    // field, so the padding has to be collapsed before parsing.
    static ref DELIMITER_PAD: Regex =
        Regex::new(r#"(?m)(^|,)[ \t]+""#).expect("DELIMITER_PAD regex is valid");
}

/// Lazy iterator over the records of one feed read pass. Finite and not
/// restartable; the decoded text stays in memory while the host drains it.
pub struct RecordIter {
    records: StringRecordsIntoIter<Cursor<Vec<u8>>>,
    remaining: Option<usize>,
}

impl Iterator for RecordIter {
    type Item = Result<IocRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }

        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }

        Some(Ok(IocRecord::from_fields(record.iter())))
    }
}

/// Parse decoded feed text into records. Lines whose first character is
/// `#` are comments and are dropped wherever they appear. Remaining lines
/// are read as CSV with double-quote quoting, no doubled-quote escaping,
/// and positional column assignment; field-count mismatches are tolerated.
pub fn parse_records(text: &str, records_limit: Option<usize>) -> RecordIter {
    let data: String = text
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n");

    let data = DELIMITER_PAD.replace_all(&data, "${1}\"").into_owned();

    let reader = ReaderBuilder::new()
        .has_headers(false)
        .double_quote(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(Cursor::new(data.into_bytes()));

    RecordIter {
        records: reader.into_records(),
        remaining: records_limit,
    }
}
