use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use super::page_prefs::PagePrefs;
use super::qr_prefs::QrPrefs;
use super::PrefsError;
use crate::notice::DEFAULT_ADVISORY_DELAY;

pub const ADVISORY_DELAY_KEY: &str = "UPI_ADVISORY_DELAY_MS";

/// Represents all user prefs.
///
/// There is no settings file or process environment in the browser, so the
/// UI feeds `from_lookup` with values captured at build time.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    qr: QrPrefs,
    page: PagePrefs,
    advisory_delay: Duration,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            qr: QrPrefs::default(),
            page: PagePrefs::default(),
            advisory_delay: DEFAULT_ADVISORY_DELAY,
        }
    }
}

impl UserPrefs {
    pub fn qr(&self) -> &QrPrefs {
        &self.qr
    }

    pub fn page(&self) -> &PagePrefs {
        &self.page
    }

    /// How long to wait after opening an app before showing the advisory.
    pub fn advisory_delay(&self) -> Duration {
        self.advisory_delay
    }

    /// Reads every preference through `lookup`, returning the prefs together
    /// with any values that had to be replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<PrefsError>) {
        let mut errors = vec![];

        let qr = QrPrefs::from_lookup(&lookup, &mut errors);
        let page = PagePrefs::from_lookup(&lookup, &mut errors);
        let advisory_delay = match lookup(ADVISORY_DELAY_KEY) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    errors.push(PrefsError::InvalidDelay {
                        key: ADVISORY_DELAY_KEY,
                        value: raw,
                    });
                    DEFAULT_ADVISORY_DELAY
                }
            },
            None => DEFAULT_ADVISORY_DELAY,
        };

        (
            Self {
                qr,
                page,
                advisory_delay,
            },
            errors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::page_prefs::FIXED_AMOUNT_KEY;
    use crate::prefs::page_prefs::FIXED_DESCRIPTION_KEY;
    use crate::prefs::page_prefs::FIXED_PAYEE_KEY;
    use crate::prefs::qr_prefs::SIZE_KEY;

    #[test]
    fn empty_lookup_is_default() {
        let (prefs, errors) = UserPrefs::from_lookup(|_| None);
        assert_eq!(prefs, UserPrefs::default());
        assert_eq!(prefs.advisory_delay(), Duration::from_secs(1));
        assert!(errors.is_empty());
    }

    #[test]
    fn collects_errors_from_every_section() {
        let (prefs, errors) = UserPrefs::from_lookup(|key| match key {
            SIZE_KEY => Some("big".to_string()),
            ADVISORY_DELAY_KEY => Some("soon".to_string()),
            FIXED_PAYEE_KEY => Some("cafe@okaxis".to_string()),
            _ => None,
        });
        assert_eq!(errors.len(), 2);
        assert_eq!(prefs.advisory_delay(), DEFAULT_ADVISORY_DELAY);
        assert_eq!(prefs.qr(), &QrPrefs::default());
        assert_eq!(
            prefs.page().fixed_request().map(|r| r.payee_id()),
            Some("cafe@okaxis")
        );
    }

    #[test]
    fn survives_json_round_trip() {
        let (prefs, errors) = UserPrefs::from_lookup(|key| match key {
            FIXED_PAYEE_KEY => Some("cafe@okaxis".to_string()),
            FIXED_AMOUNT_KEY => Some("120.5".to_string()),
            FIXED_DESCRIPTION_KEY => Some("Coffee & cake".to_string()),
            SIZE_KEY => Some("320x320".to_string()),
            _ => None,
        });
        assert!(errors.is_empty());

        let json = serde_json::to_string_pretty(&prefs).unwrap();
        assert!(json.contains("cafe@okaxis"), "{json}");
        let restored: UserPrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, prefs);
    }

    #[test]
    fn reads_delay_in_milliseconds() {
        let (prefs, errors) =
            UserPrefs::from_lookup(|key| (key == ADVISORY_DELAY_KEY).then(|| "2500".to_string()));
        assert_eq!(prefs.advisory_delay(), Duration::from_millis(2500));
        assert!(errors.is_empty());
    }
}
