//! Session Tools
//!
//! Tools for reading conversion history and toggling dark mode.

use serde::Serialize;

use crate::models::{ConversionRecord, Session};

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub line: String,
    pub record: ConversionRecord,
}

/// Response for conversion_history
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryEntry>,
    pub returned: usize,
    pub total: usize,
}

/// Response for toggle_dark_mode
#[derive(Debug, Serialize)]
pub struct DarkModeResponse {
    pub dark_mode: bool,
    pub message: String,
}

/// History newest first, optionally capped at `limit` entries
pub fn conversion_history(session: &Session, limit: Option<usize>) -> HistoryResponse {
    let total = session.history_len();
    let entries: Vec<HistoryEntry> = session
        .history()
        .iter()
        .rev()
        .take(limit.unwrap_or(total))
        .map(|record| HistoryEntry {
            line: record.to_string(),
            record: record.clone(),
        })
        .collect();

    HistoryResponse {
        returned: entries.len(),
        entries,
        total,
    }
}

pub fn toggle_dark_mode(session: &mut Session) -> DarkModeResponse {
    let dark_mode = session.toggle_dark_mode();
    DarkModeResponse {
        dark_mode,
        message: format!("Dark mode {}", if dark_mode { "enabled" } else { "disabled" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::UnitCategory;
    use crate::models::ConversionRecordCreate;

    fn session_with(values: &[f64]) -> Session {
        let mut session = Session::new();
        for &value in values {
            session.record(ConversionRecordCreate {
                category: UnitCategory::Length,
                value,
                from_unit: "meters".to_string(),
                result: value * 100.0,
                to_unit: "centimeters".to_string(),
            });
        }
        session
    }

    #[test]
    fn test_history_newest_first() {
        let session = session_with(&[1.0, 2.0, 3.0]);
        let response = conversion_history(&session, None);
        let values: Vec<f64> = response.entries.iter().map(|e| e.record.value).collect();
        assert_eq!(values, vec![3.0, 2.0, 1.0]);
        assert_eq!(response.total, 3);
        assert!(response.entries[0].line.ends_with("3 meters → 300.0000 centimeters"));
    }

    #[test]
    fn test_history_limit() {
        let session = session_with(&[1.0, 2.0, 3.0]);
        let response = conversion_history(&session, Some(2));
        assert_eq!(response.returned, 2);
        assert_eq!(response.total, 3);
        assert_eq!(response.entries[1].record.value, 2.0);
    }

    #[test]
    fn test_history_empty() {
        let response = conversion_history(&Session::new(), Some(10));
        assert_eq!(response.returned, 0);
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut session = Session::new();
        let on = toggle_dark_mode(&mut session);
        assert!(on.dark_mode);
        assert_eq!(on.message, "Dark mode enabled");
        assert!(!toggle_dark_mode(&mut session).dark_mode);
    }
}
