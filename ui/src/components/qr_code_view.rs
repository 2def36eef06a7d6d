use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use upi::notice;
use upi::PaymentApp;
use upi::PaymentRequest;

use crate::app_state::AppState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::qr_code::QrCode;
use crate::hooks::use_toaster::use_toaster;
use crate::hooks::use_toaster::Toaster;

/// Issues the navigation to the `app` link for `request` and schedules the
/// one notice it earns once the navigation has settled.
fn launch(app: PaymentApp, request: &PaymentRequest, toaster: Toaster, advisory_delay: Duration) {
    tracing::info!(
        "opening {} for payee {} (amount {}, description {:?})",
        app.label(),
        request.payee_id(),
        request.amount(),
        request.description()
    );

    let link = request.deep_link(app);
    spawn(async move {
        let result = crate::compat::open_url(&link).await;
        if let Err(e) = &result {
            tracing::error!("could not open {}: {}", app.label(), e);
        }
        toaster.follow_up(notice::followup(&result, advisory_delay));
    });
}

#[component]
fn OpenAppButton(app: PaymentApp, request: PaymentRequest) -> Element {
    let toaster = use_toaster();
    let advisory_delay = use_context::<AppState>().prefs.advisory_delay();

    rsx! {
        Button {
            button_type: ButtonType::Secondary,
            outline: true,
            on_click: move |_| launch(app, &request, toaster, advisory_delay),
            small {
                "{app.label()}"
            }
        }
    }
}

/// Shows the QR code for a request together with buttons that open the
/// request in a specific payment app.
///
/// Clicking the QR image opens the generic `upi://` link. No check is made on
/// the payee id; an empty one still renders.
#[component]
pub fn QrCodeView(request: PaymentRequest) -> Element {
    let app_state = use_context::<AppState>();
    let toaster = use_toaster();
    let advisory_delay = app_state.prefs.advisory_delay();

    let upi_link = request.upi_link();
    let image_url = app_state.prefs.qr().service().image_url(&upi_link);
    let tooltip = upi_link;
    let amount = request.amount();
    let qr_request = request.clone();

    rsx! {
        Card {
            div {
                style: "display: flex; flex-direction: column; align-items: center; gap: 1rem;",
                QrCode {
                    src: image_url,
                    tooltip,
                    on_click: move |_| launch(PaymentApp::Generic, &qr_request, toaster, advisory_delay),
                }
                div {
                    style: "text-align: center;",
                    p {
                        style: "font-size: 1.125rem; margin-bottom: 0.25rem;",
                        "Scan to pay via UPI"
                    }
                    p {
                        style: "color: var(--pico-muted-color); margin-bottom: 0.5rem;",
                        "UPI ID: {request.payee_id()}"
                    }
                    if !amount.is_zero() {
                        p {
                            style: "font-size: 1.25rem; font-weight: bold; margin-bottom: 0.5rem;",
                            "{amount.to_rupees()}"
                        }
                    }
                    if !request.description().is_empty() {
                        p {
                            style: "margin-bottom: 0.5rem;",
                            "{request.description()}"
                        }
                    }
                }
                div {
                    style: "width: 100%;",
                    Grid {
                        for app in PaymentApp::BRANDED {
                            OpenAppButton {
                                key: "{app.scheme()}",
                                app,
                                request: request.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}
