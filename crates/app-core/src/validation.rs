//! Form validation
//!
//! Per-field rules with real-time feedback: a field is validated on blur,
//! and from then on on every change. Submitting marks every field touched
//! and only calls the submit closure when all fields pass.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::future::Future;
use std::sync::{Arc, OnceLock};

/// Submission errors
#[derive(Debug, thiserror::Error)]
pub enum SubmitError<E: std::error::Error + 'static> {
    /// Local validation failed; the submit closure was not called
    #[error("Form has {0} invalid field(s)")]
    Invalid(usize),

    /// The submit closure returned an error
    #[error("Submit failed: {0}")]
    Rejected(#[source] E),
}

type CustomValidator = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Length constraint with its message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthRule {
    /// Limit in characters
    pub value: usize,
    /// Error message
    pub message: String,
}

/// Pattern constraint with its message
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Pattern the whole value must match
    pub value: Regex,
    /// Error message
    pub message: String,
}

/// Validation rule for one field
///
/// Checks run in order: required, min length, max length, pattern, custom.
/// The first failing check's message is the field error.
#[derive(Clone, Default)]
pub struct ValidationRule {
    required: Option<Option<String>>,
    min_length: Option<LengthRule>,
    max_length: Option<LengthRule>,
    pattern: Option<PatternRule>,
    validate: Option<CustomValidator>,
}

impl ValidationRule {
    /// Empty rule (always passes)
    pub fn new() -> Self {
        Self::default()
    }

    /// Field must not be blank; message defaults to "`<name>` is required"
    pub fn required(mut self) -> Self {
        self.required = Some(None);
        self
    }

    /// Field must not be blank, with a custom message
    pub fn required_with(mut self, message: impl Into<String>) -> Self {
        self.required = Some(Some(message.into()));
        self
    }

    /// Minimum length in characters
    pub fn min_length(mut self, value: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(LengthRule { value, message: message.into() });
        self
    }

    /// Maximum length in characters
    pub fn max_length(mut self, value: usize, message: impl Into<String>) -> Self {
        self.max_length = Some(LengthRule { value, message: message.into() });
        self
    }

    /// Pattern the value must match
    pub fn pattern(mut self, value: Regex, message: impl Into<String>) -> Self {
        self.pattern = Some(PatternRule { value, message: message.into() });
        self
    }

    /// Custom check returning an error message on failure
    pub fn validate(mut self, check: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        self.validate = Some(Arc::new(check));
        self
    }

    /// Combine two rules; checks set on `other` win
    pub fn merge(mut self, other: ValidationRule) -> Self {
        if other.required.is_some() {
            self.required = other.required;
        }
        if other.min_length.is_some() {
            self.min_length = other.min_length;
        }
        if other.max_length.is_some() {
            self.max_length = other.max_length;
        }
        if other.pattern.is_some() {
            self.pattern = other.pattern;
        }
        if other.validate.is_some() {
            self.validate = other.validate;
        }
        self
    }

    /// Check a value, returning the first error message
    pub fn check(&self, field: &str, value: &str) -> Option<String> {
        if let Some(message) = &self.required {
            if value.trim().is_empty() {
                return Some(message.clone().unwrap_or_else(|| format!("{} is required", field)));
            }
        }

        let len = value.chars().count();
        if let Some(rule) = &self.min_length {
            if len < rule.value {
                return Some(rule.message.clone());
            }
        }
        if let Some(rule) = &self.max_length {
            if len > rule.value {
                return Some(rule.message.clone());
            }
        }

        if let Some(rule) = &self.pattern {
            if !rule.value.is_match(value) {
                return Some(rule.message.clone());
            }
        }

        self.validate.as_ref().and_then(|check| check(value))
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.as_ref().map(|p| p.value.as_str()))
            .field("validate", &self.validate.is_some())
            .finish()
    }
}

/// Predefined rules
pub mod rules {
    use super::*;

    fn email_regex() -> Regex {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        EMAIL_REGEX
            .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
            .clone()
    }

    fn numeric_regex() -> Regex {
        static NUMERIC_REGEX: OnceLock<Regex> = OnceLock::new();
        NUMERIC_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").unwrap()).clone()
    }

    /// Required, well-formed email address
    pub fn email() -> ValidationRule {
        ValidationRule::new()
            .required_with("Email is required")
            .pattern(email_regex(), "Invalid email format")
    }

    /// Required password of at least 8 characters
    pub fn password() -> ValidationRule {
        ValidationRule::new()
            .required_with("Password is required")
            .min_length(8, "Password must be at least 8 characters")
    }

    /// Required field with a readable name
    pub fn required(field_name: &str) -> ValidationRule {
        ValidationRule::new().required_with(format!("{} is required", field_name))
    }

    /// Minimum length with a readable name
    pub fn min_length(length: usize, field_name: &str) -> ValidationRule {
        ValidationRule::new()
            .min_length(length, format!("{} must be at least {} characters", field_name, length))
    }

    /// Maximum length with a readable name
    pub fn max_length(length: usize, field_name: &str) -> ValidationRule {
        ValidationRule::new()
            .max_length(length, format!("{} must not exceed {} characters", field_name, length))
    }

    /// Digits only
    pub fn numeric() -> ValidationRule {
        ValidationRule::new().pattern(numeric_regex(), "Only numbers are allowed")
    }
}

/// Form state with per-field validation
#[derive(Debug, Clone)]
pub struct FormValidator {
    /// Field names in declaration order
    fields: Vec<String>,
    initial: HashMap<String, String>,
    values: HashMap<String, String>,
    rules: HashMap<String, ValidationRule>,
    errors: HashMap<String, String>,
    touched: HashSet<String>,
    focus: Option<String>,
}

impl FormValidator {
    /// Create a form from initial values, in field order
    pub fn new<K, V>(initial: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = Vec::new();
        let mut values = HashMap::new();
        for (name, value) in initial {
            let name = name.into();
            if !values.contains_key(&name) {
                fields.push(name.clone());
            }
            values.insert(name, value.into());
        }

        Self {
            fields,
            initial: values.clone(),
            values,
            rules: HashMap::new(),
            errors: HashMap::new(),
            touched: HashSet::new(),
            focus: None,
        }
    }

    fn ensure_field(&mut self, name: &str) {
        if !self.values.contains_key(name) {
            self.fields.push(name.to_string());
            self.values.insert(name.to_string(), String::new());
        }
    }

    /// Attach a rule to a field
    pub fn register_field(&mut self, name: &str, rule: ValidationRule) {
        self.ensure_field(name);
        self.rules.insert(name.to_string(), rule);
    }

    /// Validate a value against a field's rule without touching state
    pub fn validate_field(&self, name: &str, value: &str) -> Option<String> {
        self.rules.get(name).and_then(|rule| rule.check(name, value))
    }

    fn apply(&mut self, name: &str, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(name.to_string(), message);
            }
            None => {
                self.errors.remove(name);
            }
        }
    }

    /// Record typed text; validates only fields already touched
    pub fn handle_change(&mut self, name: &str, text: &str) {
        self.ensure_field(name);
        self.values.insert(name.to_string(), text.to_string());

        if self.touched.contains(name) {
            let error = self.validate_field(name, text);
            self.apply(name, error);
        }
    }

    /// Field lost focus: mark touched and validate
    pub fn handle_blur(&mut self, name: &str) {
        self.ensure_field(name);
        self.touched.insert(name.to_string());
        let value = self.values.get(name).cloned().unwrap_or_default();
        let error = self.validate_field(name, &value);
        self.apply(name, error);
    }

    /// Validate every field; focuses the first field in error
    pub fn validate_all(&mut self) -> bool {
        let errors: HashMap<String, String> = self
            .fields
            .iter()
            .filter_map(|name| {
                let value = self.values.get(name).map(String::as_str).unwrap_or_default();
                self.validate_field(name, value).map(|e| (name.clone(), e))
            })
            .collect();

        self.errors = errors;
        self.focus = self.first_error_field();
        self.errors.is_empty()
    }

    /// Mark all fields touched, validate, and submit when valid
    pub async fn handle_submit<F, Fut, T, E>(&mut self, on_submit: F) -> Result<T, SubmitError<E>>
    where
        F: FnOnce(HashMap<String, String>) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::error::Error + 'static,
    {
        self.touched.extend(self.fields.iter().cloned());

        if !self.validate_all() {
            tracing::debug!(invalid = self.errors.len(), "Form submit blocked by validation");
            return Err(SubmitError::Invalid(self.errors.len()));
        }

        on_submit(self.values.clone()).await.map_err(SubmitError::Rejected)
    }

    /// Set an error from outside (e.g. a server response) and focus the field
    pub fn set_field_error(&mut self, name: &str, message: impl Into<String>) {
        self.ensure_field(name);
        self.errors.insert(name.to_string(), message.into());
        self.touched.insert(name.to_string());
        self.focus = Some(name.to_string());
    }

    /// Restore initial values and clear errors and touched state
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        for name in &self.fields {
            self.values.entry(name.clone()).or_default();
        }
        self.errors.clear();
        self.touched.clear();
        self.focus = None;
    }

    fn first_error_field(&self) -> Option<String> {
        self.fields.iter().find(|name| self.errors.contains_key(*name)).cloned()
    }

    /// Current value of a field
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// All current values
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Error for a field, if any
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Error to display: only shown once the field is touched
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        if self.is_touched(name) {
            self.error(name)
        } else {
            None
        }
    }

    /// All current errors
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Check if a field has been touched
    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Check if no field currently has an error
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Field that should receive input focus
    pub fn focus_target(&self) -> Option<&str> {
        self.focus.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("server said no")]
    struct ServerError;

    fn sign_in_form() -> FormValidator {
        let mut form = FormValidator::new([("email", ""), ("password", "")]);
        form.register_field("email", rules::email());
        form.register_field("password", rules::password());
        form
    }

    #[test]
    fn test_rule_order() {
        let rule = ValidationRule::new()
            .required()
            .min_length(3, "too short")
            .max_length(5, "too long")
            .pattern(Regex::new("^[a-z]+$").unwrap(), "lowercase only")
            .validate(|v| (v == "admin").then(|| "reserved".to_string()));

        assert_eq!(rule.check("username", "  "), Some("username is required".to_string()));
        assert_eq!(rule.check("username", "ab"), Some("too short".to_string()));
        assert_eq!(rule.check("username", "abcdef"), Some("too long".to_string()));
        assert_eq!(rule.check("username", "AbC"), Some("lowercase only".to_string()));
        assert_eq!(rule.check("username", "admin"), Some("reserved".to_string()));
        assert_eq!(rule.check("username", "alice"), None);
    }

    #[test]
    fn test_length_counts_chars() {
        let rule = rules::max_length(3, "PIN");
        assert_eq!(rule.check("pin", "日本語"), None);
        assert_eq!(rule.check("pin", "1234"), Some("PIN must not exceed 3 characters".to_string()));
    }

    #[test]
    fn test_predefined_rules() {
        assert_eq!(rules::email().check("email", ""), Some("Email is required".to_string()));
        assert_eq!(rules::email().check("email", "nope"), Some("Invalid email format".to_string()));
        assert_eq!(rules::email().check("email", "a@b.co"), None);
        assert_eq!(
            rules::password().check("password", "short"),
            Some("Password must be at least 8 characters".to_string())
        );
        assert_eq!(rules::numeric().check("amount", "12a"), Some("Only numbers are allowed".to_string()));
        assert_eq!(rules::required("Name").check("name", ""), Some("Name is required".to_string()));
        assert_eq!(
            rules::min_length(2, "Name").check("name", "a"),
            Some("Name must be at least 2 characters".to_string())
        );
    }

    #[test]
    fn test_merge_rules() {
        let rule = rules::required("Amount").merge(rules::numeric());
        assert_eq!(rule.check("amount", ""), Some("Amount is required".to_string()));
        assert_eq!(rule.check("amount", "x"), Some("Only numbers are allowed".to_string()));
        assert_eq!(rule.check("amount", "42"), None);
    }

    #[test]
    fn test_change_before_touch_does_not_validate() {
        let mut form = sign_in_form();
        form.handle_change("email", "not-an-email");
        assert_eq!(form.error("email"), None);

        form.handle_blur("email");
        assert_eq!(form.error("email"), Some("Invalid email format"));

        // Touched now, so typing revalidates
        form.handle_change("email", "alice@example.com");
        assert_eq!(form.error("email"), None);
    }

    #[test]
    fn test_visible_error_requires_touch() {
        let mut form = sign_in_form();
        form.set_field_error("password", "Wrong password");
        assert_eq!(form.visible_error("password"), Some("Wrong password"));
        assert_eq!(form.focus_target(), Some("password"));

        form.validate_all();
        assert!(form.error("email").is_some());
        assert_eq!(form.visible_error("email"), None);
    }

    #[test]
    fn test_validate_all_focuses_first_error() {
        let mut form = sign_in_form();
        form.handle_change("email", "alice@example.com");

        assert!(!form.validate_all());
        assert_eq!(form.focus_target(), Some("password"));

        form.handle_change("email", "");
        form.validate_all();
        assert_eq!(form.focus_target(), Some("email"));
    }

    #[tokio::test]
    async fn test_submit_blocked_when_invalid() {
        let mut form = sign_in_form();
        let mut called = false;

        let result = form
            .handle_submit(|_| {
                called = true;
                async { Ok::<(), ServerError>(()) }
            })
            .await;

        assert!(matches!(result, Err(SubmitError::Invalid(2))));
        assert!(!called);
        assert!(form.is_touched("email"));
        assert!(form.is_touched("password"));
    }

    #[tokio::test]
    async fn test_submit_passes_values() {
        let mut form = sign_in_form();
        form.handle_change("email", "alice@example.com");
        form.handle_change("password", "correct horse");

        let mut submitted = None;
        form.handle_submit(|values| {
            submitted = Some(values);
            async { Ok::<(), ServerError>(()) }
        })
        .await
        .unwrap();

        let values = submitted.unwrap();
        assert_eq!(values["email"], "alice@example.com");
        assert_eq!(values["password"], "correct horse");
    }

    #[tokio::test]
    async fn test_submit_rejected() {
        let mut form = sign_in_form();
        form.handle_change("email", "alice@example.com");
        form.handle_change("password", "correct horse");

        let result = form.handle_submit(|_| async { Err::<(), _>(ServerError) }).await;
        match result {
            Err(SubmitError::Rejected(err)) => assert_eq!(err.to_string(), "server said no"),
            other => panic!("Expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_reset() {
        let mut form = FormValidator::new([("amount", "0")]);
        form.register_field("amount", rules::numeric());
        form.handle_change("amount", "abc");
        form.handle_blur("amount");
        assert!(!form.is_valid());

        form.reset();
        assert_eq!(form.value("amount"), Some("0"));
        assert!(form.is_valid());
        assert!(!form.is_touched("amount"));
        assert_eq!(form.focus_target(), None);
    }
}
