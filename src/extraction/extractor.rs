use chrono::{NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::records;
use crate::core::error::Result;
use crate::extraction::record::LogRecord;
use crate::reporting::logging;

use std::borrow::Cow;
use std::fs;
use std::path::Path;

static ENTRY_MATCHER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(records::ENTRY_PATTERN).expect("Failed to compile log entry pattern")
});

/// Earliest and latest timestamps kept, at microsecond resolution
static TIMESTAMP_BOUNDS: Lazy<(NaiveDateTime, NaiveDateTime)> = Lazy::new(|| {
    let parse = |raw| {
        NaiveDateTime::parse_from_str(raw, records::TIMESTAMP_FORMAT)
            .expect("Failed to parse timestamp bound")
    };
    (parse(records::MIN_TIMESTAMP), parse(records::MAX_TIMESTAMP))
});

pub trait RecordExtractor {
    fn extract_records(&self, text: &str) -> Vec<LogRecord>;
}

#[derive(Default, Debug)]
pub struct Extractor {}

impl RecordExtractor for Extractor {
    /// Scan the whole text for entries, in order of appearance.
    ///
    /// Line endings are normalized first, so `\r\n` and a lone `\r` both end
    /// a line. Entries whose timestamp does not parse are dropped without a
    /// trace.
    fn extract_records(&self, text: &str) -> Vec<LogRecord> {
        let text = normalize_line_endings(text);
        ENTRY_MATCHER
            .captures_iter(&text)
            .filter_map(|caps| {
                let timestamp = Self::parse_timestamp(caps.get(1)?.as_str())?;
                let message = caps.get(2).map_or("", |m| m.as_str());
                Some(LogRecord::from_parts(timestamp, message))
            })
            .collect()
    }
}

impl Extractor {
    /// Parse an entry timestamp, rejecting leap seconds and dates outside
    /// `TIMESTAMP_BOUNDS`.
    fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
        let timestamp = NaiveDateTime::parse_from_str(raw, records::TIMESTAMP_FORMAT).ok()?;
        if timestamp.nanosecond() >= 1_000_000_000 {
            return None;
        }
        let (min, max) = *TIMESTAMP_BOUNDS;
        (min..=max).contains(&timestamp).then_some(timestamp)
    }
}

/// Replace `\r\n` and lone `\r` with `\n`
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Read the whole log file and extract its records.
///
/// A missing or unreadable file is an error; invalid UTF-8 sequences are
/// replaced rather than rejected.
pub fn parse_log_file<P: AsRef<Path>>(path: P) -> Result<Vec<LogRecord>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    let records = Extractor::default().extract_records(&text);
    logging::log_extraction(path, records.len());
    Ok(records)
}
