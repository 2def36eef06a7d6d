//=============================================================================
// File: src/screens/payment.rs
//=============================================================================
use dioxus::prelude::*;
use upi::page::PageState;

use crate::app_state::AppState;
use crate::components::payment_form::PaymentDetailsForm;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::qr_code_view::QrCodeView;

/// Shows the details form until a request is submitted, then that request's
/// QR code with a way back to an empty form.
///
/// When the page is locked to a fixed payee the form is never shown.
#[component]
pub fn PaymentScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut page = use_signal(|| PageState::initial(app_state.prefs.page()));
    let can_reset = page.read().can_reset(app_state.prefs.page());

    match page() {
        PageState::Collecting => rsx! {
            PaymentDetailsForm {
                on_submit: move |request| page.write().submit(request),
            }
        },
        PageState::Showing(request) => rsx! {
            QrCodeView {
                request,
            }
            if can_reset {
                div {
                    style: "display: flex; justify-content: center; margin-top: 1rem;",
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| {
                            dioxus_logger::tracing::info!("payment request cleared");
                            page.write().reset();
                        },
                        "Create Another QR Code"
                    }
                }
            }
        },
    }
}
