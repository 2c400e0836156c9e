//! Toast notification data model
//!
//! A [`Notification`] is immutable once created: the queue only ever inserts
//! or removes whole entries. Callers describe what they want shown with a
//! [`NotificationInput`] and the queue stamps it with an id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::time::Instant;

/// Opaque notification identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
    /// Wrap a raw identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Toast variant/type
///
/// Only affects presentation (icon and colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    /// Default style
    #[default]
    Default,
    /// Success notification
    Success,
    /// Error notification
    Error,
    /// Warning notification
    Warning,
    /// Informational notification
    Info,
}

impl ToastVariant {
    /// All variants, in declaration order
    pub const ALL: [ToastVariant; 5] = [
        ToastVariant::Default,
        ToastVariant::Success,
        ToastVariant::Error,
        ToastVariant::Warning,
        ToastVariant::Info,
    ];

    /// Lowercase name used in config and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastVariant::Default => "default",
            ToastVariant::Success => "success",
            ToastVariant::Error => "error",
            ToastVariant::Warning => "warning",
            ToastVariant::Info => "info",
        }
    }
}

/// Toast action button
///
/// Pressing the button runs the callback and then dismisses the toast.
#[derive(Clone)]
pub struct ToastAction {
    /// Button label
    pub label: String,
    on_press: Arc<dyn Fn() + Send + Sync>,
}

impl ToastAction {
    /// Create a new toast action
    pub fn new(label: impl Into<String>, on_press: impl Fn() + Send + Sync + 'static) -> Self {
        Self { label: label.into(), on_press: Arc::new(on_press) }
    }

    /// Invoke the action callback
    pub fn press(&self) {
        (self.on_press)();
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction").field("label", &self.label).finish_non_exhaustive()
    }
}

impl PartialEq for ToastAction {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && Arc::ptr_eq(&self.on_press, &other.on_press)
    }
}

/// Caller-side description of a toast to show
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationInput {
    /// Title text
    pub title: Option<String>,
    /// Description text
    pub description: Option<String>,
    /// Variant
    pub variant: ToastVariant,
    /// Auto-dismiss delay in milliseconds (`None` uses the configured default,
    /// `Some(0)` disables auto-dismiss)
    pub duration_ms: Option<u64>,
    /// Optional action button
    pub action: Option<ToastAction>,
}

impl NotificationInput {
    /// Create an input with a title and default settings
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    /// Create an input of the given variant
    pub fn with_variant(variant: ToastVariant, title: &str, description: Option<&str>) -> Self {
        Self {
            title: Some(title.to_string()),
            description: description.map(str::to_string),
            variant,
            ..Self::default()
        }
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the variant
    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the auto-dismiss delay
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Never auto-dismiss
    pub fn persistent(self) -> Self {
        self.duration_ms(0)
    }

    /// Attach an action button
    pub fn action(mut self, label: impl Into<String>, on_press: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(ToastAction::new(label, on_press));
        self
    }
}

/// An active toast notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Unique identifier
    pub id: ToastId,
    /// Title text
    pub title: Option<String>,
    /// Description text
    pub description: Option<String>,
    /// Variant
    pub variant: ToastVariant,
    /// Auto-dismiss delay in milliseconds (0 = never)
    pub duration_ms: u64,
    /// Optional action button
    pub action: Option<ToastAction>,
    /// When the toast was enqueued
    pub created_at: Instant,
}

impl Notification {
    pub(crate) fn from_input(id: ToastId, input: NotificationInput, default_duration_ms: u64) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            variant: input.variant,
            duration_ms: input.duration_ms.unwrap_or(default_duration_ms),
            action: input.action,
            created_at: Instant::now(),
        }
    }

    /// Check if toast should auto-dismiss
    pub fn should_auto_dismiss(&self) -> bool {
        self.duration_ms > 0
    }
}
