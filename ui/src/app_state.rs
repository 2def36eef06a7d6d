use std::ops::Deref;
use std::sync::Arc;

use upi::prefs::page_prefs::FIXED_AMOUNT_KEY;
use upi::prefs::page_prefs::FIXED_DESCRIPTION_KEY;
use upi::prefs::page_prefs::FIXED_PAYEE_KEY;
use upi::prefs::qr_prefs::ENDPOINT_KEY;
use upi::prefs::qr_prefs::SIZE_KEY;
use upi::prefs::user_prefs::UserPrefs;
use upi::prefs::user_prefs::ADVISORY_DELAY_KEY;
use upi::prefs::PrefsError;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: UserPrefs,
}

/// Stable, non-reactive state shared with every component through context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: UserPrefs) -> Self {
        Self(Arc::new(AppStateData { prefs }))
    }

    /// Builds the state from variables captured when the crate was compiled.
    /// Values that could not be used are returned so the caller can log them.
    pub fn from_build_env() -> (Self, Vec<PrefsError>) {
        let (prefs, errors) = UserPrefs::from_lookup(build_time_value);
        (Self::new(prefs), errors)
    }
}

// option_env! needs a literal, hence the match.
fn build_time_value(key: &str) -> Option<String> {
    let value = match key {
        ENDPOINT_KEY => option_env!("UPI_QR_ENDPOINT"),
        SIZE_KEY => option_env!("UPI_QR_SIZE"),
        FIXED_PAYEE_KEY => option_env!("UPI_FIXED_PAYEE"),
        FIXED_AMOUNT_KEY => option_env!("UPI_FIXED_AMOUNT"),
        FIXED_DESCRIPTION_KEY => option_env!("UPI_FIXED_DESCRIPTION"),
        ADVISORY_DELAY_KEY => option_env!("UPI_ADVISORY_DELAY_MS"),
        _ => None,
    };
    value.map(str::to_string)
}
