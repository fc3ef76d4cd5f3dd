//! # Console Error Type
//!
//! Unified error type for the menu loop.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Purchase errors (inactive / stock / quantity / overflow)               │
//! │     └──► caught in `make_order`, printed, session continues             │
//! │                                                                         │
//! │  End of input (Ctrl-D)                                                  │
//! │     └──► InputClosed ──► session ends cleanly                           │
//! │                                                                         │
//! │  Terminal I/O failure, any other ShopError                              │
//! │     └──► ConsoleError ──► main ──► anyhow report, non-zero exit         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shop_core::ShopError;
use thiserror::Error;

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading stdin or writing stdout failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream reached end of file.
    #[error("Input closed")]
    InputClosed,

    /// A domain error the console does not handle itself.
    #[error(transparent)]
    Shop(#[from] ShopError),
}

/// Convenience type alias for console Results.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
