//! Duration normalization for work items.
//!
//! Brings the duration of every work item toward a target value by moving its
//! end timestamp. Two directions are supported:
//!
//! - **Compress**: items longer than the target are shortened to it
//! - **Stretch**: items shorter than the target are lengthened to it
//!
//! Items already on the right side of the target are copied unchanged. The
//! start timestamp, identifier, product and both magnitudes are never touched.
//!
//! ## Ownership
//!
//! Inputs are borrowed immutably and every call returns a freshly allocated
//! vector, so the caller's records look exactly the same after the call. The
//! functions hold no state and can be called from any number of threads.
//!
//! ## Argument Contracts
//!
//! `compress` and `stretch` reject a missing record list with
//! [`NormalizeError::NullInput`] and a zero or negative target with
//! [`NormalizeError::InvalidTargetDuration`]. A positive target that would
//! push an end timestamp past the last representable date fails with
//! [`NormalizeError::EndOutOfRange`]. The validation predicates never fail;
//! they answer `false` instead.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use worknorm::libs::normalizer::{compress, stretch};
//! use worknorm::libs::work_item::WorkItem;
//!
//! let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! let items = vec![WorkItem::new(
//!     1,
//!     "Product A",
//!     day.and_hms_opt(8, 0, 0).unwrap(),
//!     day.and_hms_opt(12, 0, 0).unwrap(),
//!     100.0,
//!     1000.0,
//! )];
//!
//! let compressed = compress(Some(items.as_slice()), Duration::hours(2)).unwrap();
//! assert_eq!(compressed[0].end, day.and_hms_opt(10, 0, 0).unwrap());
//!
//! let stretched = stretch(Some(items.as_slice()), Duration::hours(6)).unwrap();
//! assert_eq!(stretched[0].end, day.and_hms_opt(14, 0, 0).unwrap());
//! ```

use super::work_item::WorkItem;
use chrono::Duration;
use std::fmt;
use thiserror::Error;

/// Argument-contract violations raised by [`compress`] and [`stretch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("work items must be provided")]
    NullInput,

    #[error("target duration must be positive, got {0}")]
    InvalidTargetDuration(Duration),

    #[error("target duration {target} moves the end of work item {id} past the supported date range")]
    EndOutOfRange { id: i32, target: Duration },
}

/// Direction in which durations are pulled toward the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum NormalizeMode {
    /// Shorten items that run longer than the target
    Compress,
    /// Lengthen items that run shorter than the target
    Stretch,
}

impl NormalizeMode {
    /// Whether `item` would be moved onto the target in this mode.
    pub fn needs_adjustment(self, item: &WorkItem, target: Duration) -> bool {
        match self {
            NormalizeMode::Compress => item.duration() > target,
            NormalizeMode::Stretch => item.duration() < target,
        }
    }

    /// Normalizes `records` toward `target`, returning new items in input order.
    ///
    /// Both contracts are checked before any item is looked at, the missing
    /// list first. A target so large that an item's new end leaves chrono's
    /// date range fails with [`NormalizeError::EndOutOfRange`].
    pub fn apply(self, records: Option<&[WorkItem]>, target: Duration) -> Result<Vec<WorkItem>, NormalizeError> {
        let records = records.ok_or(NormalizeError::NullInput)?;
        if target <= Duration::zero() {
            return Err(NormalizeError::InvalidTargetDuration(target));
        }

        let mut adjusted = 0usize;
        let result = records
            .iter()
            .map(|item| {
                if !self.needs_adjustment(item, target) {
                    return Ok(item.clone());
                }
                adjusted += 1;
                tracing::trace!(id = item.id, from = %item.duration(), to = %target, "{} item", self);
                item.with_duration(target)
                    .ok_or(NormalizeError::EndOutOfRange { id: item.id, target })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(mode = %self, total = result.len(), adjusted, target = %target, "normalized work items");
        Ok(result)
    }
}

impl fmt::Display for NormalizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeMode::Compress => write!(f, "compress"),
            NormalizeMode::Stretch => write!(f, "stretch"),
        }
    }
}

/// Shortens every item longer than `target` so that it lasts exactly `target`.
pub fn compress(records: Option<&[WorkItem]>, target: Duration) -> Result<Vec<WorkItem>, NormalizeError> {
    NormalizeMode::Compress.apply(records, target)
}

/// Lengthens every item shorter than `target` so that it lasts exactly `target`.
pub fn stretch(records: Option<&[WorkItem]>, target: Duration) -> Result<Vec<WorkItem>, NormalizeError> {
    NormalizeMode::Stretch.apply(records, target)
}

/// True when the item is present and ends strictly after it starts.
pub fn validate_date_range(item: Option<&WorkItem>) -> bool {
    item.is_some_and(|item| item.end > item.start)
}

/// True when the list is present, non-empty, and every item has a valid range.
///
/// An empty list carries no work and is reported as invalid, unlike
/// [`compress`] and [`stretch`] which accept it.
pub fn validate_items(records: Option<&[WorkItem]>) -> bool {
    match records {
        Some(items) if !items.is_empty() => items.iter().all(|item| validate_date_range(Some(item))),
        _ => false,
    }
}

/// Before/after comparison of one normalization run.
///
/// Totals saturate instead of overflowing, so very long records can still be
/// summarized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub total: usize,
    /// Items whose end timestamp moved.
    pub adjusted: usize,
    pub total_before: Duration,
    pub total_after: Duration,
}

impl NormalizeSummary {
    /// Compares `source` with the `result` produced from it, pairwise by position.
    pub fn between(source: &[WorkItem], result: &[WorkItem]) -> Self {
        let adjusted = source.iter().zip(result).filter(|(before, after)| before.end != after.end).count();

        NormalizeSummary {
            total: result.len(),
            adjusted,
            total_before: total_duration(source),
            total_after: total_duration(result),
        }
    }
}

// Sum of all durations, saturating at the bounds of `Duration`.
fn total_duration(items: &[WorkItem]) -> Duration {
    items.iter().fold(Duration::zero(), |sum, item| {
        let duration = item.duration();
        sum.checked_add(&duration).unwrap_or(if duration > Duration::zero() {
            Duration::MAX
        } else {
            Duration::MIN
        })
    })
}
