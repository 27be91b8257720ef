//! Work item record shared by the normalizer, record files and views.
//!
//! A work item describes one unit of scheduled production work: what was
//! produced, when the work started and ended, and two magnitudes (distance
//! and monetary amount) that travel with the record untouched.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use worknorm::libs::work_item::WorkItem;
//!
//! let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! let item = WorkItem::new(
//!     1,
//!     "Product A",
//!     day.and_hms_opt(8, 0, 0).unwrap(),
//!     day.and_hms_opt(12, 0, 0).unwrap(),
//!     100.0,
//!     1000.0,
//! );
//! assert_eq!(item.duration(), Duration::hours(4));
//! ```

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One unit of scheduled work.
///
/// The identifier is not required to be unique; deduplication is left to
/// whoever assembles the record list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: i32,
    /// Descriptive label, usually the product name.
    pub product: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Distance-like magnitude. Never read by the normalizer.
    pub km: f64,
    /// Monetary-like magnitude. Never read by the normalizer.
    pub amount: f64,
}

impl WorkItem {
    pub fn new(id: i32, product: &str, start: NaiveDateTime, end: NaiveDateTime, km: f64, amount: f64) -> Self {
        WorkItem {
            id,
            product: product.to_string(),
            start,
            end,
            km,
            amount,
        }
    }

    /// Signed length of the work interval (`end - start`).
    ///
    /// Zero or negative for malformed records.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Copy of this item whose end lies exactly `duration` after its start.
    ///
    /// `None` when that end falls outside the representable date range.
    pub fn with_duration(&self, duration: Duration) -> Option<Self> {
        let end = self.start.checked_add_signed(duration)?;
        Some(WorkItem { end, ..self.clone() })
    }
}
