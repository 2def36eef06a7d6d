//! Shared components: Pico.css primitives, the payment form, the QR view and
//! the toast stack.
pub mod payment_form;
pub mod pico;
pub mod qr_code;
pub mod qr_code_view;
pub mod toaster;
