//! # Form Components
//!
//! Controlled widgets for the checkout form. A widget never owns the truth:
//! it displays the value it was given and reports edits upward through a
//! [`Callback`]. The owner dispatches the edit to a store and pushes the
//! committed value back down with the `set_*` methods.
//!
//! This keeps every keystroke and selection on the same one-way path as the
//! rest of the app: widget -> callback -> store -> snapshot -> widget.

use std::fmt;
use std::sync::Arc;

/// Cloneable handler a widget calls to report an edit.
pub struct Callback<T>(Arc<dyn Fn(T) + Send + Sync>);

impl<T> Callback<T> {
    /// Wraps a handler function.
    pub fn new(handler: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    /// A callback that drops whatever it is given. Useful as a placeholder.
    pub fn noop() -> Self {
        Self(Arc::new(|_| {}))
    }

    /// Invokes the handler.
    pub fn emit(&self, value: T) {
        (self.0)(value)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// A single-line text field.
#[derive(Debug, Clone)]
pub struct TextInput {
    pub label: String,
    pub value: String,
    pub on_change: Callback<String>,
}

impl TextInput {
    pub fn new(label: impl Into<String>, on_change: Callback<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            on_change,
        }
    }

    /// Reports an edit upward. The displayed value only changes once the
    /// owner pushes it back through [`set_value`](Self::set_value).
    pub fn change(&self, text: impl Into<String>) {
        self.on_change.emit(text.into());
    }

    /// The controlled update applied by the owner.
    pub fn set_value(&mut self, text: impl Into<String>) {
        self.value = text.into();
    }
}

/// A fixed-options selector.
#[derive(Debug, Clone)]
pub struct Select<T: Clone> {
    pub label: String,
    pub options: Vec<(String, T)>,
    pub selected: Option<usize>,
    pub on_change: Callback<T>,
}

impl<T: Clone> Select<T> {
    pub fn new(
        label: impl Into<String>,
        options: Vec<(String, T)>,
        on_change: Callback<T>,
    ) -> Self {
        Self {
            label: label.into(),
            options,
            selected: None,
            on_change,
        }
    }

    /// Reports the option at `index` upward. An index past the end of the
    /// options is ignored.
    pub fn choose(&self, index: usize) {
        if let Some((_, value)) = self.options.get(index) {
            self.on_change.emit(value.clone());
        }
    }

    /// The controlled update applied by the owner.
    pub fn set_selected(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    /// Label of the currently selected option, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.options.get(index))
            .map(|(label, _)| label.as_str())
    }
}
