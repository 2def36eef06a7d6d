//! Defines the payment apps a UPI link can be addressed to.

/// The app that a deep link targets.
///
/// `Generic` is the plain `upi://` scheme understood by every UPI app; the
/// others are vendor schemes that open one specific app.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Default,
    strum::EnumIs,
    strum::EnumIter,
)]
pub enum PaymentApp {
    #[default]
    Generic,
    GooglePay,
    Paytm,
    PhonePe,
}

impl PaymentApp {
    /// The vendor apps offered as buttons, in display order.
    pub const BRANDED: [PaymentApp; 3] = [Self::GooglePay, Self::Paytm, Self::PhonePe];

    /// Returns the URL scheme, without the `://` separator.
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Generic => "upi",
            Self::GooglePay => "gpay",
            Self::Paytm => "paytmmp",
            Self::PhonePe => "phonepe",
        }
    }

    /// Returns the scheme and path that precede the query string.
    ///
    /// Google Pay nests the pay action under an extra `upi/` segment.
    pub fn base(&self) -> &'static str {
        match self {
            Self::Generic => "upi://pay",
            Self::GooglePay => "gpay://upi/pay",
            Self::Paytm => "paytmmp://pay",
            Self::PhonePe => "phonepe://pay",
        }
    }

    /// Returns the human-readable name shown on buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Generic => "UPI",
            Self::GooglePay => "Google Pay",
            Self::Paytm => "Paytm",
            Self::PhonePe => "PhonePe",
        }
    }
}
