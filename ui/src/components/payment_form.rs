use dioxus::prelude::*;
use upi::form::PaymentForm;
use upi::PaymentRequest;

use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Input;

/// Collects the payee's UPI id, an optional amount and an optional
/// description.
///
/// `on_submit` only fires once the UPI id holds something other than
/// whitespace. The component keeps nothing after submitting; the caller
/// decides what to show next.
#[component]
pub fn PaymentDetailsForm(on_submit: EventHandler<PaymentRequest>) -> Element {
    let mut form = use_signal(PaymentForm::default);
    let can_submit = form.read().can_submit();

    rsx! {
        Card {
            header {
                h3 {
                    style: "margin-bottom: 0; text-align: center;",
                    "Enter UPI Details"
                }
            }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let Some(request) = form.read().submit() else {
                        return;
                    };
                    dioxus_logger::tracing::info!(
                        "payment details submitted for {} (amount: {})",
                        request.payee_id(),
                        if request.amount().is_zero() { "none".to_string() } else { request.amount().to_string() }
                    );
                    on_submit.call(request);
                },
                Input {
                    label: "UPI ID (required)".to_string(),
                    name: "upi_id".to_string(),
                    placeholder: "e.g., 9876543210@upi".to_string(),
                    value: "{form.read().payee_id}",
                    required: true,
                    on_input: move |evt: FormEvent| form.write().payee_id = evt.value(),
                }
                Input {
                    label: "Amount (optional)".to_string(),
                    name: "amount".to_string(),
                    input_type: "number".to_string(),
                    placeholder: "e.g., 500.00".to_string(),
                    min: "0".to_string(),
                    step: "0.01".to_string(),
                    value: "{form.read().amount}",
                    on_input: move |evt: FormEvent| form.write().amount = evt.value(),
                }
                Input {
                    label: "Description (optional)".to_string(),
                    name: "description".to_string(),
                    placeholder: "e.g., Payment for services".to_string(),
                    value: "{form.read().description}",
                    on_input: move |evt: FormEvent| form.write().description = evt.value(),
                }
                Button {
                    submit: true,
                    disabled: !can_submit,
                    "Generate QR Code"
                }
            }
        }
    }
}
