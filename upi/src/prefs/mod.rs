//! Build-time tunables for the page, the QR service and app launching.

pub mod page_prefs;
pub mod qr_prefs;
pub mod user_prefs;

use thiserror::Error;

use crate::amount::ParseAmountError;

/// A malformed preference value. The affected setting keeps its default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefsError {
    #[error("{key}: expected <width>x<height>, got {value:?}")]
    InvalidSize { key: &'static str, value: String },
    #[error("{key}: {source}")]
    InvalidAmount {
        key: &'static str,
        source: ParseAmountError,
    },
    #[error("{key}: expected milliseconds, got {value:?}")]
    InvalidDelay { key: &'static str, value: String },
    #[error("{key}: must not be empty")]
    Empty { key: &'static str },
}
