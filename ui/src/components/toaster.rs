use dioxus::prelude::*;

use crate::hooks::use_toaster::use_toaster;

/// Renders the visible toasts in the bottom corner of the page.
#[component]
pub fn Toaster() -> Element {
    let mut toaster = use_toaster();
    let toasts = toaster.toasts();

    rsx! {
        div {
            class: "toast-stack",
            role: "status",
            "aria-live": "polite",
            for toast in toasts() {
                article {
                    key: "{toast.id}",
                    class: if toast.notice.severity.is_destructive() { "toast destructive" } else { "toast" },
                    div {
                        style: "flex: 1;",
                        if let Some(title) = &toast.notice.title {
                            strong {
                                "{title}"
                            }
                        }
                        p {
                            style: "margin: 0;",
                            "{toast.notice.description}"
                        }
                    }
                    a {
                        href: "#",
                        class: "close",
                        "aria-label": "Close",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            toaster.dismiss(toast.id);
                        },
                    }
                }
            }
        }
    }
}
