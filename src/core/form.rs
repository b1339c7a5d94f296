//! # Form Data
//!
//! What widgets are allowed to see of each other, and what an action receives.
//!
//! The window takes a [`FormContext`] snapshot of every text box before it
//! dispatches an event. Buttons validate and build [`FormValues`] from that
//! snapshot; they never reach into a sibling widget.

use std::collections::BTreeMap;

/// What the event loop should do after an action runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    #[default]
    Continue,
    Exit,
}

/// Turns a text box label into a form key: trim, lowercase, spaces to underscores.
///
/// ```
/// use termform::core::form::normalize;
/// assert_eq!(normalize("Enter the admin server IP: "), "enter_the_admin_server_ip:");
/// ```
pub fn normalize(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "_")
}

/// Submitted form data, keyed by normalized label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Read-only view of one text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub label: String,
    pub text: String,
    pub required: bool,
}

/// Read-only view of every text box in the window, in widget order.
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    fields: Vec<FieldSnapshot>,
}

impl FormContext {
    pub fn new(fields: Vec<FieldSnapshot>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSnapshot] {
        &self.fields
    }

    /// One message per required field whose trimmed text is empty.
    pub fn missing_required(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.required && f.text.trim().is_empty())
            .map(|f| format!("Error: '{}' is required and cannot be empty.", f.label.trim()))
            .collect()
    }

    /// Current text of every field under its normalized label.
    ///
    /// Labels that normalize to the same key keep the later field's text.
    pub fn values(&self) -> FormValues {
        FormValues(
            self.fields
                .iter()
                .map(|f| (normalize(&f.label), f.text.clone()))
                .collect(),
        )
    }
}
