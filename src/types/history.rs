//! Session history record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored run in the session log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub score: f64,
}
