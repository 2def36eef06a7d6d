//=============================================================================
// File: src/components/qr_code.rs
//=============================================================================
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct QrCodeProps {
    /// URL of the rendered QR image.
    pub src: String,
    #[props(optional)]
    pub tooltip: Option<String>,
    #[props(optional)]
    pub caption: Option<String>,
    #[props(optional)]
    pub on_click: Option<EventHandler<MouseEvent>>,
}

/// Shows a QR image produced by a remote renderer.
///
/// The browser loads the image itself. A failed load leaves the usual broken
/// image placeholder; there is no retry or fallback.
#[allow(non_snake_case)]
pub fn QrCode(props: QrCodeProps) -> Element {
    let tooltip_text = props.tooltip.as_deref().unwrap_or("UPI QR Code");

    rsx! {
        figure {
            style: "margin: 0; display: flex; flex-direction: column; align-items: center;",
            div {
                class: "qr-frame",
                title: "{tooltip_text}",
                onclick: move |evt| {
                    if let Some(handler) = &props.on_click {
                        handler.call(evt);
                    }
                },
                img {
                    src: "{props.src}",
                    alt: "UPI QR Code",
                    width: "256",
                    height: "256",
                }
            }
            if let Some(caption_text) = &props.caption {
                figcaption {
                    style: "text-align: center; font-size: 14px; margin-top: 8px;",
                    "{caption_text}"
                }
            }
        }
    }
}
