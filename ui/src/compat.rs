// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

use thiserror::Error;

/// The navigation to a deep link could not be issued.
///
/// Success only means the request left the page. Whether an installed app
/// picked it up is never reported back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpenUrlError {
    #[error("no browser window is available")]
    NoWindow,
    #[error("the url could not be quoted for the webview: {0}")]
    Quote(String),
    #[error("navigation was rejected: {0}")]
    Rejected(String),
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use super::OpenUrlError;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Performs a full-page navigation to `url`.
    pub async fn open_url(url: &str) -> Result<(), OpenUrlError> {
        let window = web_sys::window().ok_or(OpenUrlError::NoWindow)?;
        window
            .location()
            .set_href(url)
            .map_err(|e| OpenUrlError::Rejected(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::fmt::Debug;
    use std::time::Duration;

    use dioxus::prelude::*;

    use super::OpenUrlError;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Asks the webview to navigate to `url`, which hands custom schemes to
    /// the operating system.
    ///
    /// Resolves once the webview has run the navigation script.
    pub async fn open_url(url: &str) -> Result<(), OpenUrlError> {
        let script = navigation_script(url)?;
        settle(document::eval(&script).await)
    }

    fn navigation_script(url: &str) -> Result<String, OpenUrlError> {
        let quoted = serde_json::to_string(url).map_err(|e| OpenUrlError::Quote(e.to_string()))?;
        Ok(format!("window.location.href = {quoted}; return true;"))
    }

    /// Maps the outcome of the navigation script to an [`OpenUrlError`].
    fn settle<T, E: Debug>(outcome: Result<T, E>) -> Result<(), OpenUrlError> {
        outcome
            .map(|_| ())
            .map_err(|e| OpenUrlError::Rejected(format!("{e:?}")))
    }

    #[cfg(test)]
    mod tests {
        use std::time::Duration;

        use upi::notice;
        use upi::notice::Followup;
        use upi::notice::Notice;

        use super::*;

        #[test]
        fn script_quotes_the_url() {
            let script = navigation_script(r#"upi://pay?pa=a@upi&pn=say%20"hi""#).unwrap();
            assert_eq!(
                script,
                r#"window.location.href = "upi://pay?pa=a@upi&pn=say%20\"hi\""; return true;"#
            );
        }

        #[test]
        fn failed_script_becomes_error_toast() {
            let result = settle::<serde_json::Value, _>(Err("webview closed"));
            assert_eq!(
                result,
                Err(OpenUrlError::Rejected("\"webview closed\"".to_string()))
            );
            assert_eq!(
                notice::followup(&result, Duration::from_secs(1)),
                Followup::Immediate(Notice::launch_failed())
            );
        }

        #[test]
        fn finished_script_gets_the_advisory() {
            let result = settle::<_, String>(Ok(serde_json::Value::Bool(true)));
            assert_eq!(result, Ok(()));
            assert!(matches!(
                notice::followup(&result, Duration::from_secs(1)),
                Followup::Delayed(..)
            ));
        }
    }
}
