//! Password Reset Controller
//!
//! Drives the form through a submission: lock, post, then redirect or
//! re-enable the form with feedback.

use crate::connection::PasswordResetConfig;
use crate::constants::{ENTER_KEY_CODE, PASSWORD_RESET_FLAG, PASSWORD_RESET_PAGE};
use crate::features::password_reset::{MessageKind, PasswordResetForm, ResetResponse};
use crate::services::PasswordResetTransport;

/// Result of a user interaction with the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The host should navigate to this URL
    Redirect(String),
    /// The form stays open and is unlocked again
    Stay,
}

/// Password reset page controller
pub struct PasswordResetController<T> {
    transport: T,
    config: PasswordResetConfig,
    form: PasswordResetForm,
}

impl<T: PasswordResetTransport> PasswordResetController<T> {
    /// Create a new controller
    pub fn new(transport: T, config: PasswordResetConfig) -> Self {
        Self {
            transport,
            config,
            form: PasswordResetForm::default(),
        }
    }

    pub fn form(&self) -> &PasswordResetForm {
        &self.form
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.form.username = username.into();
    }

    /// Submit the username and apply the response to the form
    pub async fn submit(&mut self) -> ResetOutcome {
        self.form.hide_message();
        self.form.username_invalid = false;
        self.form.lock(true);

        let response = self.transport.submit(&self.form.username).await;

        match response.map(|body| ResetResponse::parse(&body)) {
            Ok(response) if response.redirects_to_login() => {
                tracing::info!(?response, "Password reset accepted");
                ResetOutcome::Redirect(self.login_redirect())
            }
            Ok(ResetResponse::LoginIsBlank) => {
                self.form.username_invalid = true;
                self.form.lock(false);
                ResetOutcome::Stay
            }
            Ok(response) => {
                tracing::warn!(?response, "Password reset rejected");
                self.form.show_message(
                    MessageKind::Danger,
                    &self.config.error_header,
                    &self.config.error_content,
                );
                self.form.lock(false);
                ResetOutcome::Stay
            }
            Err(err) => {
                tracing::error!(error = %err, "Password reset request failed");
                self.form.show_message(
                    MessageKind::Danger,
                    &self.config.error_header,
                    &self.config.connection_error,
                );
                self.form.lock(false);
                ResetOutcome::Stay
            }
        }
    }

    /// Enter in the username field submits the form
    pub async fn on_key_press(&mut self, key_code: u32) -> Option<ResetOutcome> {
        if key_code == ENTER_KEY_CODE {
            Some(self.submit().await)
        } else {
            None
        }
    }

    pub fn cancel(&self) -> ResetOutcome {
        ResetOutcome::Redirect(self.config.login_page.clone())
    }

    pub fn change_language(&self, language: &str) -> ResetOutcome {
        ResetOutcome::Redirect(format!("{PASSWORD_RESET_PAGE}?lang={language}"))
    }

    fn login_redirect(&self) -> String {
        format!("{}?{PASSWORD_RESET_FLAG}=true", self.config.login_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::features::password_reset::MessagePanel;
    use futures::executor::block_on;
    use futures::future::{FutureExt, LocalBoxFuture};
    use std::cell::RefCell;

    /// Replays a canned response and records submitted usernames
    struct StubTransport {
        response: Result<String>,
        submitted: RefCell<Vec<String>>,
    }

    impl StubTransport {
        fn replying(body: &str) -> Self {
            Self {
                response: Ok(body.to_string()),
                submitted: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(Error::Network {
                    url: "passwordReset.html".into(),
                    message: "connection refused".into(),
                }),
                submitted: RefCell::new(Vec::new()),
            }
        }
    }

    impl PasswordResetTransport for StubTransport {
        fn submit<'a>(&'a self, username: &'a str) -> LocalBoxFuture<'a, Result<String>> {
            self.submitted.borrow_mut().push(username.to_string());
            let response = match &self.response {
                Ok(body) => Ok(body.clone()),
                Err(err) => Err(Error::Network {
                    url: "passwordReset.html".into(),
                    message: err.to_string(),
                }),
            };
            async move { response }.boxed_local()
        }
    }

    fn controller(transport: StubTransport) -> PasswordResetController<StubTransport> {
        let mut controller = PasswordResetController::new(transport, PasswordResetConfig::default());
        controller.set_username("admin");
        controller
    }

    #[test]
    fn test_success_redirects_with_flag() {
        let mut controller = controller(StubTransport::replying("success\n"));

        let outcome = block_on(controller.submit());

        assert_eq!(
            outcome,
            ResetOutcome::Redirect("login.html?passwordReseted=true".to_string())
        );
        assert!(controller.form().locked);
        assert_eq!(*controller.transport.submitted.borrow(), vec!["admin".to_string()]);
    }

    #[test]
    fn test_unknown_user_redirects_like_success() {
        let mut controller = controller(StubTransport::replying("userNotFound"));

        assert_eq!(
            block_on(controller.submit()),
            ResetOutcome::Redirect("login.html?passwordReseted=true".to_string())
        );
    }

    #[test]
    fn test_blank_login_marks_field_and_unlocks() {
        let mut controller = controller(StubTransport::replying("loginIsBlank"));

        assert_eq!(block_on(controller.submit()), ResetOutcome::Stay);
        assert!(controller.form().username_invalid);
        assert!(!controller.form().locked);
        assert!(controller.form().message.is_none());
    }

    #[test]
    fn test_unknown_token_shows_danger_panel() {
        let mut controller = controller(StubTransport::replying("somethingElse"));

        assert_eq!(block_on(controller.submit()), ResetOutcome::Stay);
        assert_eq!(
            controller.form().message,
            Some(MessagePanel {
                kind: MessageKind::Danger,
                header: "Error".to_string(),
                content: "Password reset failed".to_string(),
            })
        );
        assert!(!controller.form().locked);
    }

    #[test]
    fn test_network_error_shows_connection_panel() {
        let mut controller = controller(StubTransport::failing());

        assert_eq!(block_on(controller.submit()), ResetOutcome::Stay);
        let message = controller.form().message.clone().expect("panel");
        assert_eq!(message.content, "Connection error");
        assert!(!controller.form().locked);
    }

    #[test]
    fn test_resubmit_clears_previous_feedback() {
        let mut controller = controller(StubTransport::replying("loginIsBlank"));
        block_on(controller.submit());
        controller.form.show_message(MessageKind::Info, "old", "old");

        controller.transport.response = Ok("other".to_string());
        block_on(controller.submit());

        assert!(!controller.form().username_invalid);
        assert_eq!(
            controller.form().message.as_ref().map(|m| m.header.as_str()),
            Some("Error")
        );
    }

    #[test]
    fn test_enter_key_submits() {
        let mut controller = controller(StubTransport::replying("success"));

        assert_eq!(block_on(controller.on_key_press(65)), None);
        assert!(controller.transport.submitted.borrow().is_empty());

        assert!(matches!(
            block_on(controller.on_key_press(13)),
            Some(ResetOutcome::Redirect(_))
        ));
    }

    #[test]
    fn test_cancel_and_language_redirects() {
        let controller = controller(StubTransport::replying("success"));

        assert_eq!(
            controller.cancel(),
            ResetOutcome::Redirect("login.html".to_string())
        );
        assert_eq!(
            controller.change_language("pl"),
            ResetOutcome::Redirect("passwordReset.html?lang=pl".to_string())
        );
    }
}
