//! Builds image URLs for the remote QR code renderer.

use crate::payment_request::PaymentRequest;

pub const DEFAULT_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const DEFAULT_SIZE: u32 = 256;

/// A remote image service that renders a QR code for arbitrary text.
///
/// The service is called by the host's own image loader through the URL
/// returned from [`QrImageService::image_url`]. Nothing is fetched or cached
/// here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImageService {
    endpoint: String,
    width: u32,
    height: u32,
}

impl Default for QrImageService {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl QrImageService {
    pub fn new(endpoint: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            endpoint: endpoint.into(),
            width,
            height,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image URL for `data`, which is percent-encoded in full.
    pub fn image_url(&self, data: &str) -> String {
        format!(
            "{}?size={}x{}&data={}",
            self.endpoint,
            self.width,
            self.height,
            urlencoding::encode(data)
        )
    }

    /// Returns the image URL for the generic UPI link of `request`.
    pub fn request_image_url(&self, request: &PaymentRequest) -> String {
        self.image_url(&request.upi_link())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;

    #[test]
    fn encodes_the_whole_link() {
        let request = PaymentRequest::new("9876543210@upi", Amount::new(500.0), "Payment for services");
        let url = QrImageService::default().request_image_url(&request);
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?size=256x256&data=\
             upi%3A%2F%2Fpay%3Fpa%3D9876543210%40upi%26am%3D500%26pn%3DPayment%2520for%2520services"
        );
    }

    #[test]
    fn data_decodes_back_to_link() {
        let request = PaymentRequest::new("shop@ybl", Amount::new(7.25), "Tea & snacks");
        let url = QrImageService::new("https://qr.example/render", 300, 200).request_image_url(&request);
        let (prefix, data) = url.split_once("&data=").unwrap();
        assert_eq!(prefix, "https://qr.example/render?size=300x200");
        assert_eq!(urlencoding::decode(data).unwrap(), request.upi_link());
    }
}
