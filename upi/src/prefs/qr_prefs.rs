use serde::Deserialize;
use serde::Serialize;

use super::PrefsError;
use crate::qr_service::QrImageService;
use crate::qr_service::DEFAULT_ENDPOINT;
use crate::qr_service::DEFAULT_SIZE;

pub const ENDPOINT_KEY: &str = "UPI_QR_ENDPOINT";
pub const SIZE_KEY: &str = "UPI_QR_SIZE";

/// Where QR images come from and how large they are requested.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct QrPrefs {
    endpoint: String,
    width: u32,
    height: u32,
}

impl Default for QrPrefs {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }
}

impl QrPrefs {
    /// Reads `UPI_QR_ENDPOINT` and `UPI_QR_SIZE` through `lookup`.
    ///
    /// Bad values are reported in `errors` and replaced by the default.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        errors: &mut Vec<PrefsError>,
    ) -> Self {
        let mut prefs = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_KEY) {
            if endpoint.trim().is_empty() {
                errors.push(PrefsError::Empty { key: ENDPOINT_KEY });
            } else {
                prefs.endpoint = endpoint.trim().to_string();
            }
        }

        if let Some(size) = lookup(SIZE_KEY) {
            match parse_size(&size) {
                Some((width, height)) => {
                    prefs.width = width;
                    prefs.height = height;
                }
                None => errors.push(PrefsError::InvalidSize {
                    key: SIZE_KEY,
                    value: size,
                }),
            }
        }

        prefs
    }

    pub fn service(&self) -> QrImageService {
        QrImageService::new(self.endpoint.clone(), self.width, self.height)
    }
}

/// Parses "<width>x<height>", both non-zero.
fn parse_size(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.trim().split_once(['x', 'X'])?;
    let w = w.trim().parse::<u32>().ok().filter(|w| *w > 0)?;
    let h = h.trim().parse::<u32>().ok().filter(|h| *h > 0)?;
    Some((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let mut errors = vec![];
        let prefs = QrPrefs::from_lookup(|_| None, &mut errors);
        assert_eq!(prefs.service(), QrImageService::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn reads_endpoint_and_size() {
        let mut errors = vec![];
        let prefs = QrPrefs::from_lookup(
            |key| match key {
                ENDPOINT_KEY => Some("https://qr.example/png".to_string()),
                SIZE_KEY => Some("300X150".to_string()),
                _ => None,
            },
            &mut errors,
        );
        let service = prefs.service();
        assert_eq!(service.endpoint(), "https://qr.example/png");
        assert_eq!((service.width(), service.height()), (300, 150));
        assert!(errors.is_empty());
    }

    #[test]
    fn bad_size_falls_back() {
        for bad in ["", "256", "0x10", "ax b", "10x-1"] {
            let mut errors = vec![];
            let prefs = QrPrefs::from_lookup(
                |key| (key == SIZE_KEY).then(|| bad.to_string()),
                &mut errors,
            );
            assert_eq!(prefs, QrPrefs::default(), "{bad:?}");
            assert_eq!(errors.len(), 1, "{bad:?}");
        }
    }
}
