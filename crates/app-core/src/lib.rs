//! Core application logic for the wallet app
//!
//! This crate contains form validation and the sign-in flow that reports
//! its outcome through the toast queue.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod validation;

pub use auth::{AuthError, Authenticator, SignInForm, SignInOutcome, SignInStatus};
pub use validation::{rules, FormValidator, SubmitError, ValidationRule};
