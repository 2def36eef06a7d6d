//! The editable contents of the payment details form.

use crate::amount::Amount;
use crate::payment_request::PaymentRequest;

/// The raw text of each form field while it is being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaymentForm {
    pub payee_id: String,
    pub amount: String,
    pub description: String,
}

impl PaymentForm {
    /// A payee id is the only required field.
    pub fn can_submit(&self) -> bool {
        !self.payee_id.trim().is_empty()
    }

    /// Turns the form into a request, or `None` if the payee id is blank.
    ///
    /// The payee id and description are passed on exactly as typed; the
    /// amount falls back to zero when it is not a usable number.
    pub fn submit(&self) -> Option<PaymentRequest> {
        if !self.can_submit() {
            return None;
        }
        Some(PaymentRequest::new(
            self.payee_id.clone(),
            Amount::parse_lenient(&self.amount),
            self.description.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(payee_id: &str, amount: &str, description: &str) -> PaymentForm {
        PaymentForm {
            payee_id: payee_id.to_string(),
            amount: amount.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn blank_payee_blocks_submission() {
        for payee in ["", "  ", "\t\n"] {
            let f = form(payee, "10", "x");
            assert!(!f.can_submit());
            assert_eq!(f.submit(), None);
        }
    }

    #[test]
    fn reference_submission() {
        let request = form("9876543210@upi", "500.00", "Payment for services")
            .submit()
            .unwrap();
        assert_eq!(request.payee_id(), "9876543210@upi");
        assert_eq!(request.amount(), Amount::new(500.0));
        assert_eq!(request.description(), "Payment for services");
    }

    #[test]
    fn optional_fields_default() {
        let request = form("a@upi", "", "").submit().unwrap();
        assert!(request.amount().is_zero());
        assert_eq!(request.description(), "");

        let request = form("a@upi", "lots", "").submit().unwrap();
        assert!(request.amount().is_zero());
    }

    #[test]
    fn fields_pass_through_untrimmed() {
        let request = form(" a@upi ", "1", "  spaced  ").submit().unwrap();
        assert_eq!(request.payee_id(), " a@upi ");
        assert_eq!(request.description(), "  spaced  ");
    }
}
