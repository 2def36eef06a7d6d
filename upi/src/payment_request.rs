//! The payment request value and the deep links built from it.

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::amount::Amount;
use crate::amount::ParseAmountError;
use crate::payment_app::PaymentApp;

/// An error that can occur when reading a deep link back into a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("not a recognised UPI link: {0}")]
    UnknownScheme(String),
    #[error("link has no payee (pa) parameter")]
    MissingPayee,
    #[error("invalid amount (am) parameter: {0}")]
    InvalidAmount(#[from] ParseAmountError),
    #[error("description (pn) parameter is not valid percent-encoded UTF-8")]
    InvalidDescription,
}

/// Who to pay, how much, and what for.
///
/// A request is rebuilt from scratch on every form submission and dropped
/// when the page is reset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentRequest {
    payee_id: String,
    amount: Amount,
    description: String,
}

impl PaymentRequest {
    pub fn new(payee_id: impl Into<String>, amount: Amount, description: impl Into<String>) -> Self {
        Self {
            payee_id: payee_id.into(),
            amount,
            description: description.into(),
        }
    }

    pub fn payee_id(&self) -> &str {
        &self.payee_id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Builds the deep link for `app`.
    ///
    /// The payee id is inserted verbatim. `am` is left out when the amount is
    /// zero and `pn` is left out when the description is empty. Every app
    /// gets the same query; only the scheme and path differ.
    ///
    /// # Examples
    /// ```
    /// use upi::{Amount, PaymentApp, PaymentRequest};
    /// let request = PaymentRequest::new("9876543210@upi", Amount::new(500.0), "Payment for services");
    /// assert_eq!(
    ///     request.deep_link(PaymentApp::Generic),
    ///     "upi://pay?pa=9876543210@upi&am=500&pn=Payment%20for%20services",
    /// );
    /// ```
    pub fn deep_link(&self, app: PaymentApp) -> String {
        format!("{}?{}", app.base(), self.query())
    }

    /// The link embedded in the QR image.
    pub fn upi_link(&self) -> String {
        self.deep_link(PaymentApp::Generic)
    }

    fn query(&self) -> String {
        let mut query = format!("pa={}", self.payee_id);
        if !self.amount.is_zero() {
            query.push_str(&format!("&am={}", self.amount));
        }
        if !self.description.is_empty() {
            query.push_str(&format!("&pn={}", urlencoding::encode(&self.description)));
        }
        query
    }

    /// Reads a deep link for any known app back into a request.
    ///
    /// Parameters may appear in any order; unknown ones are ignored.
    pub fn from_link(link: &str) -> Result<(PaymentApp, Self), LinkError> {
        let (base, query) = link.split_once('?').unwrap_or((link, ""));
        let app = PaymentApp::iter()
            .find(|app| app.base() == base)
            .ok_or_else(|| LinkError::UnknownScheme(base.to_string()))?;

        let mut payee_id = None;
        let mut amount = Amount::ZERO;
        let mut description = String::new();

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "pa" => payee_id = Some(value.to_string()),
                "am" => amount = Amount::parse(value)?,
                "pn" => {
                    description = urlencoding::decode(value)
                        .map_err(|_| LinkError::InvalidDescription)?
                        .into_owned()
                }
                _ => {}
            }
        }

        let payee_id = payee_id.ok_or(LinkError::MissingPayee)?;
        Ok((app, Self::new(payee_id, amount, description)))
    }
}
