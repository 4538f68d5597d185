//! Mount points the board renders into.
//!
//! The board never owns page structure. A host supplies implementations of
//! [`ListView`], [`SelectView`] and [`TextView`] (backed by a DOM, a terminal,
//! a template engine), and the board rewrites them wholesale on every render.
//!
//! The `Memory*` types keep their contents in memory; they back the tests and
//! can emit HTML markup for hosts that splice strings into a page.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// A list or table body.
pub trait ListView: Send + Sync {
    /// Removes every row and any message.
    fn clear(&self);
    /// Appends one row. List items have one cell, table rows several.
    fn append_row(&self, cells: Vec<String>);
    /// Replaces the whole content with a plain message.
    fn show_message(&self, message: &str);
}

/// A `<select>`-like control.
pub trait SelectView: Send + Sync {
    /// Removes every option.
    fn clear(&self);
    /// Appends one option.
    fn add_option(&self, value: &str, label: &str);
}

/// A single line of text.
pub trait TextView: Send + Sync {
    fn set_text(&self, text: &str);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Escapes text for use inside HTML element content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[derive(Debug, Default)]
struct ListState {
    rows: Vec<Vec<String>>,
    message: Option<String>,
}

/// In-memory [`ListView`].
#[derive(Debug, Default)]
pub struct MemoryList {
    state: Mutex<ListState>,
}

impl MemoryList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<String>> {
        lock(&self.state).rows.clone()
    }

    /// Returns each row's cells joined with `" | "`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        lock(&self.state)
            .rows
            .iter()
            .map(|cells| cells.join(" | "))
            .collect()
    }

    /// Returns the message shown instead of rows, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        lock(&self.state).message.clone()
    }

    /// Renders the content as HTML: `<li>` items for one-cell rows,
    /// `<tr><td>` rows otherwise. A message renders as escaped text.
    #[must_use]
    pub fn to_html(&self) -> String {
        let state = lock(&self.state);
        if let Some(message) = &state.message {
            return escape_html(message);
        }

        state
            .rows
            .iter()
            .map(|cells| match cells.as_slice() {
                [single] => format!("<li>{}</li>", escape_html(single)),
                _ => {
                    let tds: String = cells
                        .iter()
                        .map(|cell| format!("<td>{}</td>", escape_html(cell)))
                        .collect();
                    format!("<tr>{tds}</tr>")
                }
            })
            .collect()
    }
}

impl ListView for MemoryList {
    fn clear(&self) {
        let mut state = lock(&self.state);
        state.rows.clear();
        state.message = None;
    }

    fn append_row(&self, cells: Vec<String>) {
        let mut state = lock(&self.state);
        state.message = None;
        state.rows.push(cells);
    }

    fn show_message(&self, message: &str) {
        let mut state = lock(&self.state);
        state.rows.clear();
        state.message = Some(message.to_string());
    }
}

/// In-memory [`SelectView`]. Options are `(value, label)` pairs.
#[derive(Debug, Default)]
pub struct MemorySelect {
    options: Mutex<Vec<(String, String)>>,
}

impl MemorySelect {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn options(&self) -> Vec<(String, String)> {
        lock(&self.options).clone()
    }

    /// Renders the options as `<option>` markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        lock(&self.options)
            .iter()
            .map(|(value, label)| {
                format!(
                    r#"<option value="{}">{}</option>"#,
                    escape_html(value),
                    escape_html(label)
                )
            })
            .collect()
    }
}

impl SelectView for MemorySelect {
    fn clear(&self) {
        lock(&self.options).clear();
    }

    fn add_option(&self, value: &str, label: &str) {
        lock(&self.options).push((value.to_string(), label.to_string()));
    }
}

/// In-memory [`TextView`].
#[derive(Debug, Default)]
pub struct MemoryText {
    text: Mutex<String>,
}

impl MemoryText {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> String {
        lock(&self.text).clone()
    }
}

impl TextView for MemoryText {
    fn set_text(&self, text: &str) {
        *lock(&self.text) = text.to_string();
    }
}
