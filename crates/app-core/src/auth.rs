//! Sign-in form flow
//!
//! Validates the email/password form, calls the authentication backend and
//! reports the outcome: field errors inline, plus a toast for the result.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use app_state::toast::{Result as ToastResult, ToastHandle};

use crate::validation::{rules, FormValidator, SubmitError};

/// Authentication errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Backend refused the credentials, with a user-facing message
    #[error("{0}")]
    Rejected(String),

    /// Anything else (transport, malformed response)
    #[error("Unexpected authentication error: {0}")]
    Unexpected(String),
}

/// Result of a sign-in attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SignInStatus {
    /// Signed in; session is ready
    Complete {
        /// Session to activate
        session_id: String,
    },
    /// Backend needs another step (e.g. second factor)
    Incomplete {
        /// Backend status string
        status: String,
    },
}

/// Authentication backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Attempt to sign in with an identifier and password
    async fn sign_in(&self, identifier: &str, password: &str) -> Result<SignInStatus, AuthError>;
}

/// What the sign-in screen should do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Signed in with this session
    SignedIn(String),
    /// Form has local errors; nothing was sent
    Invalid,
    /// Backend wants more steps
    Incomplete(String),
    /// Backend refused or failed; errors are already shown
    Failed,
}

/// Sign-in form state
#[derive(Debug)]
pub struct SignInForm {
    form: FormValidator,
    toasts: ToastHandle,
}

impl SignInForm {
    /// Create an empty sign-in form reporting to the given toast handle
    pub fn new(toasts: ToastHandle) -> Self {
        let mut form = FormValidator::new([("email", ""), ("password", "")]);
        form.register_field("email", rules::email());
        form.register_field("password", rules::password());
        Self { form, toasts }
    }

    /// Form state
    pub fn form(&self) -> &FormValidator {
        &self.form
    }

    /// Mutable form state, for change/blur events
    pub fn form_mut(&mut self) -> &mut FormValidator {
        &mut self.form
    }

    /// Validate and submit
    ///
    /// Only fails if the toast provider is gone.
    pub async fn submit(&mut self, auth: &dyn Authenticator) -> ToastResult<SignInOutcome> {
        let result = self
            .form
            .handle_submit(|values| async move {
                let email = values.get("email").cloned().unwrap_or_default();
                let password = values.get("password").cloned().unwrap_or_default();
                auth.sign_in(&email, &password).await
            })
            .await;

        match result {
            Ok(SignInStatus::Complete { session_id }) => {
                self.toasts.success("Welcome back!", Some("You have successfully signed in."))?;
                Ok(SignInOutcome::SignedIn(session_id))
            }
            Ok(SignInStatus::Incomplete { status }) => {
                tracing::warn!(%status, "Sign-in not complete");
                Ok(SignInOutcome::Incomplete(status))
            }
            Err(SubmitError::Invalid(_)) => Ok(SignInOutcome::Invalid),
            Err(SubmitError::Rejected(AuthError::Rejected(message))) => {
                let lower = message.to_lowercase();
                let field = if lower.contains("identifier") || lower.contains("email") {
                    "email"
                } else {
                    "password"
                };
                self.form.set_field_error(field, message.clone());
                self.toasts.error("Sign In Failed", Some(&message))?;
                Ok(SignInOutcome::Failed)
            }
            Err(SubmitError::Rejected(err)) => {
                tracing::error!("Sign-in failed: {}", err);
                self.toasts.error("Error", Some("An unexpected error occurred. Please try again."))?;
                Ok(SignInOutcome::Failed)
            }
        }
    }
}
