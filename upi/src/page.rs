//! What the payment page is showing.

use crate::payment_request::PaymentRequest;
use crate::prefs::page_prefs::PagePrefs;

#[derive(Debug, Clone, PartialEq, Default, strum::EnumIs)]
pub enum PageState {
    /// No request yet; the form is shown.
    #[default]
    Collecting,
    /// A request was submitted; its QR code and app links are shown.
    Showing(PaymentRequest),
}

impl PageState {
    /// The state the page opens in. A page locked to a fixed payee starts,
    /// and stays, on that payee's QR code.
    pub fn initial(prefs: &PagePrefs) -> Self {
        match prefs.fixed_request() {
            Some(request) => Self::Showing(request.clone()),
            None => Self::Collecting,
        }
    }

    pub fn submit(&mut self, request: PaymentRequest) {
        *self = Self::Showing(request);
    }

    pub fn reset(&mut self) {
        *self = Self::Collecting;
    }

    pub fn request(&self) -> Option<&PaymentRequest> {
        match self {
            Self::Collecting => None,
            Self::Showing(request) => Some(request),
        }
    }

    /// Whether a "create another" affordance should be offered.
    pub fn can_reset(&self, prefs: &PagePrefs) -> bool {
        self.is_showing() && prefs.fixed_request().is_none()
    }
}
