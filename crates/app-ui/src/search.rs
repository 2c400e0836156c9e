//! Search bar state
//!
//! Text changes are reported immediately; the search itself is debounced.

use app_state::debounce::{DebounceError, Debouncer, DEFAULT_DEBOUNCE};
use std::sync::Arc;
use std::time::Duration;

/// Search bar model
pub struct SearchBar {
    value: String,
    placeholder: String,
    on_search: Arc<dyn Fn(String) + Send + Sync>,
    debouncer: Debouncer<String>,
}

impl SearchBar {
    /// Search bar with the default 300ms debounce
    ///
    /// Fails with [`DebounceError::NoRuntime`] outside a tokio runtime.
    pub fn new(on_search: impl Fn(String) + Send + Sync + 'static) -> Result<Self, DebounceError> {
        Self::with_debounce(DEFAULT_DEBOUNCE, on_search)
    }

    /// Search bar with a custom debounce; zero searches on every keystroke
    pub fn with_debounce(
        debounce: Duration,
        on_search: impl Fn(String) + Send + Sync + 'static,
    ) -> Result<Self, DebounceError> {
        let on_search: Arc<dyn Fn(String) + Send + Sync> = Arc::new(on_search);
        let debounced = Arc::clone(&on_search);
        let debouncer = Debouncer::new(debounce, move |query| debounced(query))?;
        Ok(Self { value: String::new(), placeholder: "Search...".to_string(), on_search, debouncer })
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Current text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Placeholder text
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether the clear button should show
    pub fn shows_clear_button(&self) -> bool {
        !self.value.is_empty()
    }

    /// User typed
    pub fn on_change_text(&mut self, text: &str) {
        self.value = text.to_string();
        self.debouncer.call(self.value.clone());
    }

    /// Clear button pressed: cancel any pending search and search for ""
    pub fn clear(&mut self) {
        self.value.clear();
        self.debouncer.cancel();
        (self.on_search)(String::new());
    }
}

impl std::fmt::Debug for SearchBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBar")
            .field("value", &self.value)
            .field("placeholder", &self.placeholder)
            .field("debouncer", &self.debouncer)
            .finish()
    }
}
