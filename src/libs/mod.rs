//! Core library modules for worknorm.
//!
//! - **Normalization**: the compress/stretch transforms and date range validation
//! - **Records**: the work item type and CSV/JSON files holding lists of them
//! - **Infrastructure**: configuration, data storage, messaging
//! - **Presentation**: duration formatting and console tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Duration;
//! use worknorm::libs::normalizer::compress;
//! use worknorm::libs::records::RecordFile;
//!
//! let items = RecordFile::new("items.csv", None)?.read()?;
//! let compressed = compress(Some(items.as_slice()), Duration::hours(2))?;
//! RecordFile::new("compressed.csv", None)?.write(&compressed)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod normalizer;
pub mod records;
pub mod view;
pub mod work_item;
