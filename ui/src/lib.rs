// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use app_state::AppState;
use components::pico::Container;
use components::toaster::Toaster;
use hooks::use_toaster::use_toaster_provider;
use screens::payment::PaymentScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        max-width: 28rem;
        margin: 0 auto;
        padding: 2rem 1rem;
    }

    .app-main-container header {
        text-align: center;
        margin-bottom: 1.5rem;
    }

    .app-main-container header h1 {
        margin-bottom: 0.25rem;
        color: var(--pico-primary);
    }

    /* --- QR IMAGE --- */
    .qr-frame {
        border: 4px solid var(--pico-primary);
        border-radius: 0.75rem;
        padding: 0.5rem;
        cursor: pointer;
        transition: transform 0.15s ease-in-out;
        background: #fff;
    }
    .qr-frame:hover { transform: scale(1.05); }
    .qr-frame img { display: block; width: 16rem; height: 16rem; }

    /* --- TOASTS --- */
    .toast-stack {
        position: fixed;
        right: 1rem;
        bottom: 1rem;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        max-width: 22rem;
        z-index: 1000;
    }
    .toast-stack .toast {
        display: flex;
        gap: 0.75rem;
        align-items: flex-start;
        margin: 0;
        padding: 0.75rem 1rem;
        box-shadow: 0 4px 16px rgba(0,0,0,0.2);
    }
    .toast-stack .toast.destructive {
        background-color: var(--pico-del-color);
        color: #fff;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let app_state = use_hook(|| {
        let (app_state, errors) = AppState::from_build_env();
        for e in &errors {
            dioxus_logger::tracing::warn!("ignoring build-time setting: {}", e);
        }
        match serde_json::to_string_pretty(&app_state.prefs) {
            Ok(json) => dioxus_logger::tracing::info!("prefs: {}", json),
            Err(e) => dioxus_logger::tracing::warn!("could not dump prefs: {}", e),
        }
        app_state
    });

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());
    use_toaster_provider();

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    h1 {
                        "UPI QR Mobile Pay"
                    }
                    p {
                        "Generate a UPI QR code for quick payments"
                    }
                }
                PaymentScreen {}
            }
            Toaster {}
        }
    }
}
