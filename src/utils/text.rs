//! String helpers for column keys and CSS class lists.

use std::fmt;

/// Convert `"this is an example"` to `"thisIsAnExample"`.
pub fn camel_case(text: &str) -> String {
    text.split(' ')
        .map(str::trim)
        .enumerate()
        .map(|(idx, word)| {
            if idx == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

/// Convert `"this is an example"` to `"this_is_an_example"`.
pub fn snake_case(text: &str) -> String {
    text.split(' ')
        .map(|word| word.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert a column label to the row key it displays.
///
/// `"Date Published"` becomes `"datePublished"`.
#[inline]
pub fn string_to_key(label: &str) -> String {
    camel_case(label)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Builder for a space-separated CSS class attribute.
///
/// ```ignore
/// let classes = ClassList::new()
///     .add("spectrum-Table-headCell is-sortable")
///     .toggle("is-sorted-desc", true);
/// assert_eq!(classes.to_string(), "spectrum-Table-headCell is-sortable is-sorted-desc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every class in a space-separated string. Blank entries are skipped.
    pub fn add(mut self, classes: &str) -> Self {
        self.classes.extend(
            classes
                .split_whitespace()
                .map(str::to_string),
        );
        self
    }

    /// Add `class` only when `enabled` is set.
    pub fn toggle(self, class: &str, enabled: bool) -> Self {
        if enabled { self.add(class) } else { self }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.classes
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}
