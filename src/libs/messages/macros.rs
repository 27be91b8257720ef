//! Printing macros for [`Message`](super::Message) values.
//!
//! Each macro picks its output channel at runtime:
//!
//! ```text
//! msg_info!(..) ──▶ WORKNORM_DEBUG or RUST_LOG set? ──yes──▶ tracing::info!
//!                                                   └─no───▶ println!
//! ```
//!
//! In debug mode the subscriber installed by `main` receives every message,
//! so user output and library diagnostics end up interleaved on stderr in one
//! stream. Otherwise messages go straight to the terminal with an emoji
//! prefix.
//!
//! | Macro               | Prefix | Normal output | Debug output      |
//! |---------------------|--------|---------------|-------------------|
//! | `msg_print!`        |        | stdout        | `tracing::info!`  |
//! | `msg_success!`      | ✅     | stdout        | `tracing::info!`  |
//! | `msg_info!`         | ℹ️     | stdout        | `tracing::info!`  |
//! | `msg_warning!`      | ⚠️     | stdout        | `tracing::warn!`  |
//! | `msg_debug!`        | 🔍     | (suppressed)  | `tracing::debug!` |
//!
//! `msg_error_anyhow!` and `msg_bail_anyhow!` build an `anyhow::Error` from a
//! message instead of printing it.
//!
//! ```rust
//! use worknorm::libs::messages::Message;
//! use worknorm::{msg_bail_anyhow, msg_success};
//!
//! fn check(count: usize) -> anyhow::Result<()> {
//!     if count == 0 {
//!         msg_bail_anyhow!(Message::NoItemsToValidate);
//!     }
//!     msg_success!(Message::ItemsValid(count));
//!     Ok(())
//! }
//!
//! assert!(check(0).is_err());
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages should be routed to `tracing` instead of the terminal.
///
/// True when `WORKNORM_DEBUG` or `RUST_LOG` is set. Read once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("WORKNORM_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message without prefix. Pass `true` to surround it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints a warning with ⚠️ prefix.
///
/// Used when processing continues but the user should know something is off,
/// such as malformed date ranges in the input.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Emits a 🔍 diagnostic in debug mode; prints nothing otherwise.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` carrying the message with ❌ prefix.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early from the enclosing function with [`msg_error_anyhow!`].
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
