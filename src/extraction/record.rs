use chrono::{Datelike, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::{calendar, records};

static ACTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(records::ACTION_PATTERN).expect("Failed to compile action marker pattern")
});

/// One log entry enriched with the fields the dashboard groups on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub message: String,
    /// 0-23, taken from the naive timestamp without timezone conversion
    pub hour: u32,
    /// English day name, Monday first
    pub weekday: &'static str,
    pub user: String,
    /// Character count of `message`, not bytes
    pub message_length: usize,
    pub action_type: String,
}

impl LogRecord {
    /// Derive every field from a parsed timestamp and its trailing message.
    pub fn from_parts(timestamp: NaiveDateTime, message: &str) -> Self {
        Self {
            timestamp,
            message: message.to_string(),
            hour: timestamp.hour(),
            weekday: weekday_name(&timestamp),
            user: derive_user(message),
            message_length: message.chars().count(),
            action_type: derive_action_type(message),
        }
    }

    /// Position of the weekday in Monday..Sunday order
    pub fn weekday_index(&self) -> usize {
        self.timestamp.weekday().num_days_from_monday() as usize
    }
}

fn weekday_name(timestamp: &NaiveDateTime) -> &'static str {
    calendar::WEEKDAYS[timestamp.weekday().num_days_from_monday() as usize]
}

/// First token of a message with at least two tokens, `unknown` otherwise.
pub fn derive_user(message: &str) -> String {
    let mut tokens = message.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(first), Some(_)) => first.to_string(),
        _ => records::UNKNOWN_USER.to_string(),
    }
}

/// Token following the first `action=` marker.
///
/// A missing marker, or one followed directly by a space or the end of the
/// message, yields the `login` fallback.
pub fn derive_action_type(message: &str) -> String {
    ACTION_MARKER
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|action| !action.is_empty())
        .unwrap_or(records::FALLBACK_ACTION)
        .to_string()
}
