//! User-facing notifications produced by the contact flow

use serde::Serialize;

pub const MSG_SENT: &str = "Message sent successfully! I'll get back to you soon.";
pub const MSG_SEND_FAILED: &str =
    "Failed to send message. Please try again or contact me directly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_kind_lowercase() {
        let json = serde_json::to_value(Notification::success(MSG_SENT)).unwrap();
        assert_eq!(json["kind"], "success");
        assert_eq!(json["message"], MSG_SENT);
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }
}
