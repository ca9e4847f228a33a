//! Password Reset Form State
//!
//! What the host renders: the username field, the lock flag and the message
//! panel.

/// Status token returned by the reset endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetResponse {
    Success,
    LoginIsBlank,
    UserNotFound,
    InvalidMailAddress,
    InvalidMailConfig,
    /// Any token outside the known set
    Other(String),
}

impl ResetResponse {
    /// Parse a response body, ignoring surrounding whitespace
    pub fn parse(body: &str) -> Self {
        match body.trim() {
            "success" => Self::Success,
            "loginIsBlank" => Self::LoginIsBlank,
            "userNotFound" => Self::UserNotFound,
            "invalidMailAddress" => Self::InvalidMailAddress,
            "invalidMailConfig" => Self::InvalidMailConfig,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether the user is sent back to the login page
    ///
    /// Unknown accounts and mail problems are reported exactly like a
    /// successful request so the form does not disclose which accounts exist.
    pub fn redirects_to_login(&self) -> bool {
        matches!(
            self,
            Self::Success | Self::UserNotFound | Self::InvalidMailAddress | Self::InvalidMailConfig
        )
    }
}

/// Severity of the message panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePanel {
    pub kind: MessageKind,
    pub header: String,
    pub content: String,
}

/// Password reset form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordResetForm {
    pub username: String,
    /// Username field is flagged for correction
    pub username_invalid: bool,
    /// Input and submit button are disabled
    pub locked: bool,
    /// Visible message panel, if any
    pub message: Option<MessagePanel>,
}

impl PasswordResetForm {
    pub fn show_message(&mut self, kind: MessageKind, header: &str, content: &str) {
        self.message = Some(MessagePanel {
            kind,
            header: header.to_string(),
            content: content.to_string(),
        });
    }

    pub fn hide_message(&mut self) {
        self.message = None;
    }

    pub fn lock(&mut self, locked: bool) {
        self.locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!(ResetResponse::parse("success"), ResetResponse::Success);
        assert_eq!(ResetResponse::parse("  loginIsBlank\n"), ResetResponse::LoginIsBlank);
        assert_eq!(ResetResponse::parse("userNotFound"), ResetResponse::UserNotFound);
        assert_eq!(
            ResetResponse::parse("invalidMailConfig"),
            ResetResponse::InvalidMailConfig
        );
    }

    #[test]
    fn test_unknown_token_is_other() {
        assert_eq!(
            ResetResponse::parse("Success"),
            ResetResponse::Other("Success".to_string())
        );
        assert_eq!(ResetResponse::parse(""), ResetResponse::Other(String::new()));
    }

    #[test]
    fn test_non_disclosing_redirects() {
        assert!(ResetResponse::UserNotFound.redirects_to_login());
        assert!(ResetResponse::InvalidMailAddress.redirects_to_login());
        assert!(!ResetResponse::LoginIsBlank.redirects_to_login());
        assert!(!ResetResponse::Other("boom".into()).redirects_to_login());
    }
}
