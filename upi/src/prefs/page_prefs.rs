use serde::Deserialize;
use serde::Serialize;

use super::PrefsError;
use crate::amount::Amount;
use crate::payment_request::PaymentRequest;

pub const FIXED_PAYEE_KEY: &str = "UPI_FIXED_PAYEE";
pub const FIXED_AMOUNT_KEY: &str = "UPI_FIXED_AMOUNT";
pub const FIXED_DESCRIPTION_KEY: &str = "UPI_FIXED_DESCRIPTION";

/// Chooses between the interactive page and a page locked to one payee.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct PagePrefs {
    fixed: Option<PaymentRequest>,
}

impl PagePrefs {
    pub fn fixed(request: PaymentRequest) -> Self {
        Self {
            fixed: Some(request),
        }
    }

    /// The request to show instead of the form, if the page is locked.
    pub fn fixed_request(&self) -> Option<&PaymentRequest> {
        self.fixed.as_ref()
    }

    /// Reads the `UPI_FIXED_*` keys through `lookup`.
    ///
    /// The page is only locked when `UPI_FIXED_PAYEE` is set and not blank.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        errors: &mut Vec<PrefsError>,
    ) -> Self {
        let Some(payee_id) = lookup(FIXED_PAYEE_KEY).filter(|p| !p.trim().is_empty()) else {
            return Self::default();
        };

        let amount = match lookup(FIXED_AMOUNT_KEY) {
            Some(raw) => Amount::parse(&raw).unwrap_or_else(|source| {
                errors.push(PrefsError::InvalidAmount {
                    key: FIXED_AMOUNT_KEY,
                    source,
                });
                Amount::ZERO
            }),
            None => Amount::ZERO,
        };
        let description = lookup(FIXED_DESCRIPTION_KEY).unwrap_or_default();

        Self::fixed(PaymentRequest::new(payee_id.trim(), amount, description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::ParseAmountError;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn unlocked_without_payee() {
        let mut errors = vec![];
        assert_eq!(PagePrefs::from_lookup(lookup_from(&[]), &mut errors), PagePrefs::default());
        let blank = [(FIXED_PAYEE_KEY, "  "), (FIXED_AMOUNT_KEY, "10")];
        assert_eq!(PagePrefs::from_lookup(lookup_from(&blank), &mut errors), PagePrefs::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn locked_to_configured_payee() {
        let mut errors = vec![];
        let pairs = [
            (FIXED_PAYEE_KEY, "shop@ybl"),
            (FIXED_AMOUNT_KEY, "250"),
            (FIXED_DESCRIPTION_KEY, "Entry fee"),
        ];
        let prefs = PagePrefs::from_lookup(lookup_from(&pairs), &mut errors);
        assert_eq!(
            prefs.fixed_request(),
            Some(&PaymentRequest::new("shop@ybl", Amount::new(250.0), "Entry fee"))
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn bad_fixed_amount_is_reported() {
        let mut errors = vec![];
        let pairs = [(FIXED_PAYEE_KEY, "shop@ybl"), (FIXED_AMOUNT_KEY, "free")];
        let prefs = PagePrefs::from_lookup(lookup_from(&pairs), &mut errors);
        assert!(prefs.fixed_request().unwrap().amount().is_zero());
        assert_eq!(
            errors,
            vec![PrefsError::InvalidAmount {
                key: FIXED_AMOUNT_KEY,
                source: ParseAmountError::InvalidFormat,
            }]
        );
    }
}
