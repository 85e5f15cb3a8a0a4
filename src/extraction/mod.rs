//! Log record extraction
//!
//! This module turns raw log text into structured records: it finds
//! timestamped entries and derives the fields the dashboard groups on.

pub mod extractor;
pub mod record;

// Re-export commonly used items
pub use extractor::{Extractor, RecordExtractor, parse_log_file};
pub use record::{LogRecord, derive_action_type, derive_user};
