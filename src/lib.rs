//! # Worknorm - Work record duration normalizer
//!
//! A library and command-line utility that pulls the duration of work items
//! toward a target value while leaving every other field untouched.
//!
//! ## Features
//!
//! - **Compress**: Shorten items that run longer than the target
//! - **Stretch**: Lengthen items that run shorter than the target
//! - **Validation**: Check that every item ends after it starts
//! - **Record Files**: Read and write work items as CSV or JSON
//! - **Configuration**: Persist default targets and output format
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worknorm::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
