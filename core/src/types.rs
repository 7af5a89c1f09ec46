//! Shared primitive types used across every dataset.

/// A stable, human-readable record identifier (`CUST001`, `PROP042`).
pub type RecordId = String;

/// Zero-based day offset from a dataset's start date.
pub type DayIndex = u32;

/// Calendar date at daily granularity.
pub type Date = chrono::NaiveDate;
