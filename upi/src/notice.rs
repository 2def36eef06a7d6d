//! Messages shown to the user after trying to open a payment app.

use std::time::Duration;

pub const DEFAULT_ADVISORY_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: Option<String>,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    /// Shown after every navigation, since there is no way to tell whether
    /// an app picked the link up.
    pub fn app_may_be_missing() -> Self {
        Self {
            title: None,
            description: "If the app didn't open, you may need to install it or scan the QR code directly."
                .to_string(),
            severity: Severity::Default,
        }
    }

    /// Shown when the navigation could not even be issued.
    pub fn launch_failed() -> Self {
        Self {
            title: Some("Error".to_string()),
            description: "Could not open payment app. Try scanning the QR directly.".to_string(),
            severity: Severity::Destructive,
        }
    }
}

/// What to show after a launch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup {
    /// Show the notice once `Duration` has elapsed.
    Delayed(Notice, Duration),
    /// Show the notice right away.
    Immediate(Notice),
}

/// Maps the outcome of issuing a navigation to the single notice it earns.
///
/// A successful navigation only means the request left the page, so it
/// always gets the advisory after `delay`.
pub fn followup<E>(result: &Result<(), E>, delay: Duration) -> Followup {
    match result {
        Ok(()) => Followup::Delayed(Notice::app_may_be_missing(), delay),
        Err(_) => Followup::Immediate(Notice::launch_failed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_gets_one_delayed_advisory() {
        let ok: Result<(), String> = Ok(());
        match followup(&ok, DEFAULT_ADVISORY_DELAY) {
            Followup::Delayed(notice, delay) => {
                assert_eq!(delay, Duration::from_millis(1000));
                assert!(notice.severity.is_default());
                assert!(notice.title.is_none());
            }
            other => panic!("unexpected followup: {other:?}"),
        }
    }

    #[test]
    fn failure_gets_immediate_error_and_no_advisory() {
        let err: Result<(), String> = Err("blocked".to_string());
        assert_eq!(
            followup(&err, DEFAULT_ADVISORY_DELAY),
            Followup::Immediate(Notice::launch_failed())
        );
        assert!(Notice::launch_failed().severity.is_destructive());
    }

    #[test]
    fn each_launch_schedules_its_own_advisory() {
        let ok: Result<(), ()> = Ok(());
        let followups: Vec<_> = (0..3).map(|_| followup(&ok, DEFAULT_ADVISORY_DELAY)).collect();
        assert_eq!(followups.len(), 3);
        assert!(followups.iter().all(|f| matches!(f, Followup::Delayed(..))));
    }
}
