//! Platform-free payment types shared by every UI target.
//!
//! Nothing in here touches a UI framework: links are plain strings built from
//! a [`PaymentRequest`], and the form and page state machines are ordinary
//! values that the Dioxus components drive.

pub mod amount;
pub mod form;
pub mod notice;
pub mod page;
pub mod payment_app;
pub mod payment_request;
pub mod prefs;
pub mod qr_service;

pub use amount::Amount;
pub use payment_app::PaymentApp;
pub use payment_request::LinkError;
pub use payment_request::PaymentRequest;
pub use qr_service::QrImageService;
